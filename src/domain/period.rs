//! Bar period (daily / weekly / monthly).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};

use crate::domain::error::SigtraderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Label date of the bucket containing `date`.
    ///
    /// Weekly buckets end on Friday: Saturday and Sunday bars roll forward
    /// into the next week's Friday. Monthly buckets are labelled with the
    /// calendar month end, whether or not it is a trading day.
    pub fn bucket_label(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Weekly => {
                let ahead = (Weekday::Fri.num_days_from_monday() as i64
                    - date.weekday().num_days_from_monday() as i64)
                    .rem_euclid(7);
                date + Duration::days(ahead)
            }
            Period::Monthly => {
                let first = date.with_day(1).expect("day 1 always valid");
                let next_month = first
                    .checked_add_months(chrono::Months::new(1))
                    .expect("in-range month add");
                next_month - Days::new(1)
            }
        }
    }

    /// Days per native unit, used to express holding time in bars' own
    /// period (weeks for a weekly series, and so on).
    pub fn days_per_unit(&self) -> f64 {
        match self {
            Period::Daily => 1.0,
            Period::Weekly => 7.0,
            Period::Monthly => 30.0,
        }
    }
}

impl FromStr for Period {
    type Err = SigtraderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Period::Daily),
            "W" => Ok(Period::Weekly),
            "M" => Ok(Period::Monthly),
            other => Err(SigtraderError::InvalidPeriod {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Daily => "D",
            Period::Weekly => "W",
            Period::Monthly => "M",
        };
        write!(f, "{}", s)
    }
}
