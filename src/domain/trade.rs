//! Closed round-trip trade record.

use chrono::NaiveDate;

/// One closed long round trip. Created at the moment a sell signal closes an
/// open position; never mutated afterwards.
///
/// `max_return_pct` tracks the running maximum close while the position was
/// held; `drawdown_pct` is the exit close against that running maximum, so
/// it is `<= 0` whenever the peak exceeded the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub entry_indicator: f64,
    pub exit_date: NaiveDate,
    pub exit_price: f64,
    pub exit_indicator: f64,
    pub return_pct: f64,
    pub max_return_pct: f64,
    pub drawdown_pct: f64,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.return_pct > 0.0
    }

    pub fn holding_days(&self) -> i64 {
        (self.exit_date - self.entry_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            entry_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            entry_price: 100.0,
            entry_indicator: 0.94,
            exit_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            exit_price: 107.0,
            exit_indicator: 1.06,
            return_pct: 7.0,
            max_return_pct: 10.0,
            drawdown_pct: -2.7,
        }
    }

    #[test]
    fn win_is_strictly_positive_return() {
        assert!(sample_trade().is_win());
        let flat = Trade {
            return_pct: 0.0,
            ..sample_trade()
        };
        assert!(!flat.is_win());
    }

    #[test]
    fn holding_days_spans_entry_to_exit() {
        assert_eq!(sample_trade().holding_days(), 28);
    }
}
