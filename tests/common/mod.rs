#![allow(dead_code)]

use chrono::NaiveDate;
use sigtrader::domain::bar::Bar;
use sigtrader::domain::series::Series;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Flat bars (open = high = low = close) on consecutive days.
pub fn daily_series(start: NaiveDate, closes: &[f64]) -> Series {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close,
            low: close,
            close,
        })
        .collect();
    Series::new(bars).unwrap()
}

/// One bar per week, each dated a Friday, starting 2024-01-05.
pub fn weekly_series(closes: &[f64]) -> Series {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: date(2024, 1, 5) + chrono::Duration::weeks(i as i64),
            open: close,
            high: close,
            low: close,
            close,
        })
        .collect();
    Series::new(bars).unwrap()
}
