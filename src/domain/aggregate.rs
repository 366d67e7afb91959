//! Period aggregation: resample a daily series into weekly or monthly bars.

use crate::domain::bar::Bar;
use crate::domain::period::Period;
use crate::domain::series::Series;

/// Resample `series` into `period` buckets.
///
/// Bucket OHLC: open = first open, high = max high, low = min low,
/// close = last close. Buckets with no contributing bars never appear.
/// `Daily` returns an identical copy, indicator columns included; for
/// weekly and monthly targets indicator columns are discarded, since the
/// pipeline computes indicators only after aggregation.
pub fn aggregate_by_period(series: &Series, period: Period) -> Series {
    if period == Period::Daily {
        return series.clone();
    }

    let mut out: Vec<Bar> = Vec::new();
    for bar in series.bars() {
        let label = period.bucket_label(bar.date);
        match out.last_mut() {
            Some(last) if last.date == label => {
                last.high = last.high.max(bar.high);
                last.low = last.low.min(bar.low);
                last.close = bar.close;
            }
            _ => out.push(Bar {
                date: label,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
            }),
        }
    }

    Series::from_bars(out)
}
