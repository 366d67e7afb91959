//! Technical indicators: pure transforms that add columns to a [`Series`].
//!
//! Two exponential smoothing conventions are in play and must not be mixed:
//! MACD-style EMAs use `alpha = 2/(span+1)`; KDJ smoothing uses `alpha = 1/m`.
//! Both are recurrences seeded from the first available value, so the MACD
//! family has no warm-up window while MA does.

pub mod kdj;
pub mod ma;
pub mod macd;

use crate::domain::series::Series;

/// EMA over dense values with `alpha = 2/(span+1)`, seeded `EMA[0] = v[0]`.
pub(crate) fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let e = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        prev = Some(e);
        out.push(e);
    }
    out
}

/// Exponential smoothing over sparse values with `alpha = 1/m`, seeded from
/// the first defined input. An undefined input yields an undefined output
/// for that bar, but the smoothing state is retained so the recurrence
/// resumes at the next defined value.
pub(crate) fn smooth_sparse(values: &[Option<f64>], m: usize) -> Vec<Option<f64>> {
    let alpha = 1.0 / m as f64;
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for value in values {
        match value {
            Some(v) => {
                let s = match prev {
                    None => *v,
                    Some(p) => alpha * v + (1.0 - alpha) * p,
                };
                prev = Some(s);
                out.push(Some(s));
            }
            None => out.push(None),
        }
    }
    out
}

/// All-`None` column of the series' length, for degenerate parameters.
pub(crate) fn undefined_column(series: &Series) -> Vec<Option<f64>> {
    vec![None; series.len()]
}
