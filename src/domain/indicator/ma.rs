//! Simple moving average of close.

use crate::domain::indicator::undefined_column;
use crate::domain::series::Series;

pub fn column_name(period: usize) -> String {
    format!("MA{}", period)
}

/// Add an `MA{period}` column: the arithmetic mean of the trailing `period`
/// closes, undefined for the first `period - 1` bars.
pub fn with_ma(series: &Series, period: usize) -> Series {
    let name = column_name(period);
    if period == 0 {
        return series.with_column(&name, undefined_column(series));
    }

    let bars = series.bars();
    let mut values = Vec::with_capacity(bars.len());
    let mut sum = 0.0;
    for (i, bar) in bars.iter().enumerate() {
        sum += bar.close;
        if i >= period {
            sum -= bars[i - period].close;
        }
        if i + 1 >= period {
            values.push(Some(sum / period as f64));
        } else {
            values.push(None);
        }
    }

    series.with_column(&name, values)
}
