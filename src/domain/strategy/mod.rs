//! Strategy trait and the evaluation pipeline.
//!
//! A strategy is two steps over a series: `process` adds its indicator
//! columns, `signals` maps the processed series to one [`Signal`] per bar.
//! Everything else (date filtering, aggregation, trade extraction, summary)
//! is shared and lives in [`run_strategy`].

pub mod kdj_cross;
pub mod macd_cross;
pub mod ratio;

pub use kdj_cross::KdjCrossStrategy;
pub use macd_cross::MacdCrossStrategy;
pub use ratio::RatioStrategy;

use chrono::NaiveDate;

use crate::domain::aggregate::aggregate_by_period;
use crate::domain::extractor::extract_trades;
use crate::domain::period::Period;
use crate::domain::series::Series;
use crate::domain::signal::Signal;
use crate::domain::summary::PerformanceSummary;
use crate::domain::trade::Trade;

pub trait Strategy {
    fn name(&self) -> String;

    /// Copy the series and add this strategy's indicator columns.
    fn process(&self, series: &Series) -> Series;

    /// One signal per bar of the processed series.
    fn signals(&self, series: &Series) -> Vec<Signal>;

    /// Column whose value gates trade extraction and is stamped on trades.
    fn trade_indicator(&self) -> String;
}

/// Inclusive date range; `None` bounds are open.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Everything one evaluation produces: the indicator-augmented series, the
/// per-bar signals and the closed trades, all read-only for reporting.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub period: Period,
    pub series: Series,
    pub signals: Vec<Signal>,
    pub trades: Vec<Trade>,
}

impl StrategyRun {
    pub fn summary(&self) -> PerformanceSummary {
        PerformanceSummary::compute(&self.trades, self.period)
    }
}

/// Evaluate `strategy` over `raw`: filter by date range, aggregate to
/// `period`, compute indicators, generate signals, extract trades, in that
/// fixed order. Filtering before aggregation keeps weekly bucket boundaries
/// independent of the chosen range. An empty filtered series flows through
/// as empty outputs, never an error.
pub fn run_strategy(
    strategy: &dyn Strategy,
    raw: &Series,
    range: DateRange,
    period: Period,
) -> StrategyRun {
    let filtered = raw.filter_by_date(range.start, range.end);
    let aggregated = aggregate_by_period(&filtered, period);
    let series = strategy.process(&aggregated);
    let signals = strategy.signals(&series);
    let trades = extract_trades(&series, &signals, &strategy.trade_indicator());
    StrategyRun {
        period,
        series,
        signals,
        trades,
    }
}

/// Golden/death cross signals between two columns of `series`.
///
/// Buy where the fast line closes above the slow line after being at or
/// below it on the previous bar; sell on the mirror condition. All four
/// values must be defined, so the first bar with defined lines never
/// signals.
pub(crate) fn cross_signals(series: &Series, fast_column: &str, slow_column: &str) -> Vec<Signal> {
    let (Some(fast), Some(slow)) = (series.column(fast_column), series.column(slow_column)) else {
        return vec![Signal::Hold; series.len()];
    };

    let mut signals = vec![Signal::Hold; series.len()];
    for i in 1..series.len() {
        let (Some(f), Some(s), Some(f_prev), Some(s_prev)) =
            (fast[i], slow[i], fast[i - 1], slow[i - 1])
        else {
            continue;
        };
        if f > s && f_prev <= s_prev {
            signals[i] = Signal::Buy;
        } else if f < s && f_prev >= s_prev {
            signals[i] = Signal::Sell;
        }
    }
    signals
}
