//! MACD: DIF, DEA and histogram columns.
//!
//! fastEMA and slowEMA are EMAs of close with alpha = 2/(span+1), seeded
//! with the first close, so every bar is defined. DIF = fastEMA - slowEMA,
//! DEA = EMA of DIF with the signal span (seeded DIF[0]),
//! HIST = 2 * (DIF - DEA).

use crate::domain::indicator::{ema, undefined_column};
use crate::domain::series::Series;

pub const DIF_COLUMN: &str = "DIF";
pub const DEA_COLUMN: &str = "DEA";
pub const HIST_COLUMN: &str = "HIST";

pub fn with_macd(series: &Series, fast: usize, slow: usize, signal: usize) -> Series {
    if fast == 0 || slow == 0 || signal == 0 {
        let undefined = undefined_column(series);
        return series
            .with_column(DIF_COLUMN, undefined.clone())
            .with_column(DEA_COLUMN, undefined.clone())
            .with_column(HIST_COLUMN, undefined);
    }

    let closes = series.closes();
    let fast_ema = ema(&closes, fast);
    let slow_ema = ema(&closes, slow);
    let dif: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let dea = ema(&dif, signal);
    let hist: Vec<Option<f64>> = dif
        .iter()
        .zip(&dea)
        .map(|(dif, dea)| Some(2.0 * (dif - dea)))
        .collect();

    series
        .with_column(DIF_COLUMN, dif.into_iter().map(Some).collect())
        .with_column(DEA_COLUMN, dea.into_iter().map(Some).collect())
        .with_column(HIST_COLUMN, hist)
}
