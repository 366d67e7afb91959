//! Performance summary over a closed trade list.

use crate::domain::period::Period;
use crate::domain::trade::Trade;

/// Aggregate statistics for a trade list. Always recomputed from its input,
/// never cached. All percentage fields are in percent units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSummary {
    pub total_trades: usize,
    pub win_rate: f64,
    pub avg_return: f64,
    /// Compounded across trades in chronological order.
    pub total_return: f64,
    pub max_return: f64,
    pub min_return: f64,
    /// Mean holding time in the series' native period unit (days, weeks or
    /// months), each trade rounded to one decimal first.
    pub avg_hold_periods: f64,
    pub avg_drawdown: f64,
    /// The most negative drawdown across trades.
    pub max_drawdown: f64,
}

impl PerformanceSummary {
    /// Compute the summary for `trades`, assumed chronologically ordered as
    /// the extractor emits them. An empty list yields the all-zero summary.
    pub fn compute(trades: &[Trade], period: Period) -> Self {
        if trades.is_empty() {
            return PerformanceSummary::default();
        }

        let total = trades.len();
        let wins = trades.iter().filter(|t| t.is_win()).count();

        let returns: Vec<f64> = trades.iter().map(|t| t.return_pct).collect();
        let compound = returns.iter().fold(1.0, |acc, r| acc * (1.0 + r / 100.0));

        let hold_periods: Vec<f64> = trades
            .iter()
            .map(|t| round1(t.holding_days() as f64 / period.days_per_unit()))
            .collect();

        let drawdowns: Vec<f64> = trades.iter().map(|t| t.drawdown_pct).collect();

        PerformanceSummary {
            total_trades: total,
            win_rate: wins as f64 / total as f64 * 100.0,
            avg_return: mean(&returns),
            total_return: (compound - 1.0) * 100.0,
            max_return: returns.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min_return: returns.iter().copied().fold(f64::INFINITY, f64::min),
            avg_hold_periods: mean(&hold_periods),
            avg_drawdown: mean(&drawdowns),
            max_drawdown: drawdowns.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
