//! MACD golden/death cross strategy.

use crate::domain::indicator::macd;
use crate::domain::series::Series;
use crate::domain::signal::Signal;
use crate::domain::strategy::{Strategy, cross_signals};

/// Same cross rule as the KDJ strategy, applied to (DIF, DEA).
#[derive(Debug, Clone)]
pub struct MacdCrossStrategy {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl MacdCrossStrategy {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        MacdCrossStrategy { fast, slow, signal }
    }
}

impl Default for MacdCrossStrategy {
    fn default() -> Self {
        MacdCrossStrategy::new(12, 26, 9)
    }
}

impl Strategy for MacdCrossStrategy {
    fn name(&self) -> String {
        format!("macd-cross({},{},{})", self.fast, self.slow, self.signal)
    }

    fn process(&self, series: &Series) -> Series {
        macd::with_macd(series, self.fast, self.slow, self.signal)
    }

    fn signals(&self, series: &Series) -> Vec<Signal> {
        cross_signals(series, macd::DIF_COLUMN, macd::DEA_COLUMN)
    }

    fn trade_indicator(&self) -> String {
        macd::DIF_COLUMN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::Bar;
    use crate::domain::extractor::extract_trades;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> Series {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
            })
            .collect();
        Series::new(bars).unwrap()
    }

    #[test]
    fn downtrend_then_uptrend_produces_golden_cross() {
        let mut closes: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        closes.extend((0..10).map(|i| 91.0 + 2.0 * i as f64));
        let strategy = MacdCrossStrategy::new(3, 6, 2);
        let series = strategy.process(&make_series(&closes));
        let signals = strategy.signals(&series);
        assert!(signals.contains(&Signal::Buy));
    }

    #[test]
    fn round_trip_extracts_a_trade() {
        // down, up (cross up), down again (cross down)
        let mut closes: Vec<f64> = (0..8).map(|i| 100.0 - 2.0 * i as f64).collect();
        closes.extend((0..8).map(|i| 87.0 + 3.0 * i as f64));
        closes.extend((0..8).map(|i| 107.0 - 3.0 * i as f64));
        let strategy = MacdCrossStrategy::new(3, 6, 2);
        let series = strategy.process(&make_series(&closes));
        let signals = strategy.signals(&series);
        let trades = extract_trades(&series, &signals, &strategy.trade_indicator());
        assert_eq!(trades.len(), 1);
        assert!(trades[0].entry_date < trades[0].exit_date);
    }
}
