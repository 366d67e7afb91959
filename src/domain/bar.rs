//! OHLC bar representation.

use chrono::NaiveDate;

use crate::domain::error::SigtraderError;

/// One OHLC observation for a time bucket (day, week or month).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Check that all prices are positive finite and that
    /// `low <= open,close <= high`. Downstream formulas assume this.
    pub fn validate(&self) -> Result<(), SigtraderError> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SigtraderError::malformed(format!(
                    "{} on {}: {} is not a positive finite price",
                    name, self.date, value
                )));
            }
        }

        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        if self.low > body_low || self.high < body_high {
            return Err(SigtraderError::malformed(format!(
                "bar on {} violates low <= open,close <= high",
                self.date
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
        }
    }

    #[test]
    fn valid_bar_passes() {
        assert!(sample_bar().validate().is_ok());
    }

    #[test]
    fn negative_price_rejected() {
        let bar = Bar {
            close: -1.0,
            ..sample_bar()
        };
        assert!(bar.validate().is_err());
    }

    #[test]
    fn nan_price_rejected() {
        let bar = Bar {
            open: f64::NAN,
            ..sample_bar()
        };
        assert!(bar.validate().is_err());
    }

    #[test]
    fn high_below_close_rejected() {
        let bar = Bar {
            high: 104.0,
            ..sample_bar()
        };
        assert!(bar.validate().is_err());
    }

    #[test]
    fn low_above_open_rejected() {
        let bar = Bar {
            low: 101.0,
            ..sample_bar()
        };
        assert!(bar.validate().is_err());
    }
}
