//! KDJ golden/death cross strategy.

use crate::domain::indicator::kdj;
use crate::domain::series::Series;
use crate::domain::signal::Signal;
use crate::domain::strategy::{Strategy, cross_signals};

/// Buy when K crosses above D between consecutive bars, sell when it
/// crosses below.
#[derive(Debug, Clone)]
pub struct KdjCrossStrategy {
    pub n: usize,
    pub m1: usize,
    pub m2: usize,
}

impl KdjCrossStrategy {
    pub fn new(n: usize, m1: usize, m2: usize) -> Self {
        KdjCrossStrategy { n, m1, m2 }
    }
}

impl Default for KdjCrossStrategy {
    fn default() -> Self {
        KdjCrossStrategy::new(9, 3, 3)
    }
}

impl Strategy for KdjCrossStrategy {
    fn name(&self) -> String {
        format!("kdj-cross({},{},{})", self.n, self.m1, self.m2)
    }

    fn process(&self, series: &Series) -> Series {
        kdj::with_kdj(series, self.n, self.m1, self.m2)
    }

    fn signals(&self, series: &Series) -> Vec<Signal> {
        cross_signals(series, kdj::K_COLUMN, kdj::D_COLUMN)
    }

    fn trade_indicator(&self) -> String {
        kdj::K_COLUMN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::Bar;
    use chrono::NaiveDate;

    #[test]
    fn golden_cross_on_prepared_columns() {
        // Bypass process(): attach literal K/D lines and check the rule.
        let bars: Vec<Bar> = (0..4)
            .map(|i| Bar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: 10.0,
                high: 10.0,
                low: 10.0,
                close: 10.0,
            })
            .collect();
        let series = Series::new(bars)
            .unwrap()
            .with_column("K", vec![Some(40.0), Some(42.0), Some(48.0), Some(55.0)])
            .with_column("D", vec![Some(45.0), Some(44.0), Some(46.0), Some(50.0)]);

        let strategy = KdjCrossStrategy::default();
        let signals = strategy.signals(&series);
        assert_eq!(
            signals,
            vec![Signal::Hold, Signal::Hold, Signal::Buy, Signal::Hold]
        );
    }

    #[test]
    fn process_adds_kdj_columns() {
        let bars: Vec<Bar> = (0..12)
            .map(|i| Bar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: 10.0 + i as f64,
                high: 11.0 + i as f64,
                low: 9.0 + i as f64,
                close: 10.0 + i as f64,
            })
            .collect();
        let series = KdjCrossStrategy::default().process(&Series::new(bars).unwrap());
        assert!(series.column("K").is_some());
        assert!(series.column("D").is_some());
        assert!(series.column("J").is_some());
        // warm-up: first n-1 bars undefined
        assert!(series.column("K").unwrap()[..8].iter().all(Option::is_none));
        assert!(series.column("K").unwrap()[8].is_some());
    }
}
