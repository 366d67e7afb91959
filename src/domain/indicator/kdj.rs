//! KDJ stochastic oscillator.
//!
//! RSV[i] = (close - lowest low over n bars) / (highest high - lowest low) * 100,
//! undefined during the n-1 bar warm-up and wherever the window range is zero.
//! K smooths RSV with alpha = 1/m1, D smooths K with alpha = 1/m2 (both seeded
//! from the first defined input), J = 3K - 2D. Values are not clamped to
//! [0, 100].

use crate::domain::indicator::{smooth_sparse, undefined_column};
use crate::domain::series::Series;

pub const K_COLUMN: &str = "K";
pub const D_COLUMN: &str = "D";
pub const J_COLUMN: &str = "J";

/// Add `K`, `D` and `J` columns for the oscillator with window `n` and
/// smoothing divisors `m1`, `m2`.
pub fn with_kdj(series: &Series, n: usize, m1: usize, m2: usize) -> Series {
    if n == 0 || m1 == 0 || m2 == 0 {
        let undefined = undefined_column(series);
        return series
            .with_column(K_COLUMN, undefined.clone())
            .with_column(D_COLUMN, undefined.clone())
            .with_column(J_COLUMN, undefined);
    }

    let rsv = raw_stochastic(series, n);
    let k = smooth_sparse(&rsv, m1);
    let d = smooth_sparse(&k, m2);
    let j: Vec<Option<f64>> = k
        .iter()
        .zip(&d)
        .map(|(k, d)| match (k, d) {
            (Some(k), Some(d)) => Some(3.0 * k - 2.0 * d),
            _ => None,
        })
        .collect();

    series
        .with_column(K_COLUMN, k)
        .with_column(D_COLUMN, d)
        .with_column(J_COLUMN, j)
}

fn raw_stochastic(series: &Series, n: usize) -> Vec<Option<f64>> {
    let bars = series.bars();
    let mut rsv = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        if i + 1 < n {
            rsv.push(None);
            continue;
        }
        let window = &bars[i + 1 - n..=i];
        let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let highest = window
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = highest - lowest;
        if range == 0.0 {
            rsv.push(None);
        } else {
            rsv.push(Some((bars[i].close - lowest) / range * 100.0));
        }
    }
    rsv
}
