//! Price series with aligned indicator columns.
//!
//! A [`Series`] owns an ordered run of [`Bar`]s plus zero or more named
//! derived-value columns, one `Option<f64>` per bar. `None` marks an
//! undefined value (indicator warm-up, zero-range RSV window). Every
//! transformation returns a new `Series`; inputs are never mutated.

use chrono::NaiveDate;

use crate::domain::bar::Bar;
use crate::domain::error::SigtraderError;

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    bars: Vec<Bar>,
    columns: Vec<Column>,
}

impl Series {
    /// Build a series from bars, checking the ordering and OHLC invariants.
    ///
    /// Dates must be strictly increasing. An empty bar list is a valid
    /// (empty) series; rejecting empty *files* is the data adapter's job.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SigtraderError> {
        for bar in &bars {
            bar.validate()?;
        }
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SigtraderError::malformed(format!(
                    "dates not strictly increasing: {} then {}",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(Series {
            bars,
            columns: Vec::new(),
        })
    }

    /// Internal constructor for stages that produce bars already known to be
    /// ordered and valid (aggregation output, filtered subsets).
    pub(crate) fn from_bars(bars: Vec<Bar>) -> Self {
        Series {
            bars,
            columns: Vec::new(),
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Named indicator column, aligned one value per bar.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Return a copy of this series with `values` attached under `name`,
    /// replacing any existing column of the same name. `values` must hold
    /// exactly one entry per bar.
    pub fn with_column(&self, name: &str, values: Vec<Option<f64>>) -> Series {
        debug_assert_eq!(values.len(), self.bars.len());
        let mut out = self.clone();
        out.columns.retain(|c| c.name != name);
        out.columns.push(Column {
            name: name.to_string(),
            values,
        });
        out
    }

    /// Keep only bars within the inclusive date range, slicing every
    /// indicator column to match. An empty result is not an error.
    pub fn filter_by_date(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Series {
        let keep: Vec<usize> = self
            .bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| {
                start.is_none_or(|s| bar.date >= s) && end.is_none_or(|e| bar.date <= e)
            })
            .map(|(i, _)| i)
            .collect();

        Series {
            bars: keep.iter().map(|&i| self.bars[i].clone()).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: keep.iter().map(|&i| c.values[i]).collect(),
                })
                .collect(),
        }
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_bar(d: NaiveDate, close: f64) -> Bar {
        Bar {
            date: d,
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
        }
    }

    fn sample_series() -> Series {
        let bars = (1..=5)
            .map(|i| make_bar(date(2024, 1, i), 100.0 + i as f64))
            .collect();
        Series::new(bars).unwrap()
    }

    #[test]
    fn new_rejects_unsorted_dates() {
        let bars = vec![
            make_bar(date(2024, 1, 2), 100.0),
            make_bar(date(2024, 1, 1), 101.0),
        ];
        assert!(Series::new(bars).is_err());
    }

    #[test]
    fn new_rejects_duplicate_dates() {
        let bars = vec![
            make_bar(date(2024, 1, 1), 100.0),
            make_bar(date(2024, 1, 1), 101.0),
        ];
        assert!(Series::new(bars).is_err());
    }

    #[test]
    fn new_accepts_empty() {
        let series = Series::new(vec![]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn with_column_does_not_mutate_original() {
        let series = sample_series();
        let augmented = series.with_column("MA2", vec![None, None, None, None, Some(1.0)]);
        assert!(series.column("MA2").is_none());
        assert_eq!(augmented.column("MA2").unwrap()[4], Some(1.0));
    }

    #[test]
    fn with_column_replaces_existing() {
        let series = sample_series()
            .with_column("X", vec![Some(1.0); 5])
            .with_column("X", vec![Some(2.0); 5]);
        assert_eq!(series.column("X").unwrap()[0], Some(2.0));
        assert_eq!(series.column_names().count(), 1);
    }

    #[test]
    fn filter_by_date_inclusive_bounds() {
        let series = sample_series();
        let filtered = series.filter_by_date(Some(date(2024, 1, 2)), Some(date(2024, 1, 4)));
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered.bars()[0].date, date(2024, 1, 2));
        assert_eq!(filtered.bars()[2].date, date(2024, 1, 4));
    }

    #[test]
    fn filter_by_date_open_ended() {
        let series = sample_series();
        assert_eq!(series.filter_by_date(None, None).len(), 5);
        assert_eq!(series.filter_by_date(Some(date(2024, 1, 4)), None).len(), 2);
        assert_eq!(series.filter_by_date(None, Some(date(2024, 1, 1))).len(), 1);
    }

    #[test]
    fn filter_by_date_no_match_is_empty_not_error() {
        let series = sample_series();
        let filtered = series.filter_by_date(Some(date(2025, 1, 1)), None);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_slices_columns_in_step() {
        let series = sample_series().with_column(
            "V",
            vec![None, Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
        );
        let filtered = series.filter_by_date(Some(date(2024, 1, 3)), None);
        assert_eq!(filtered.column("V").unwrap(), &[Some(3.0), Some(4.0), Some(5.0)]);
    }
}
