//! Series acquisition port trait.

use chrono::NaiveDate;

use crate::domain::error::SigtraderError;
use crate::domain::series::Series;

/// Supplies raw price series to the engine. Implementations must deliver
/// bars sorted ascending by date and fail fast with `MalformedSeries` on
/// missing or unparseable fields.
pub trait DataPort {
    fn load_series(&self, code: &str) -> Result<Series, SigtraderError>;

    /// First date, last date and bar count, or `None` when no data exists.
    fn series_range(
        &self,
        code: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SigtraderError> {
        let series = self.load_series(code)?;
        Ok(series
            .bars()
            .first()
            .zip(series.bars().last())
            .map(|(first, last)| (first.date, last.date, series.len())))
    }
}
