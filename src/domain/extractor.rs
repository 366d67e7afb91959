//! Trade extraction: fold a signal series into closed round-trip trades.
//!
//! A two-state machine (flat / long) walks the bars in time order. At most
//! one position is open at any moment; buys while long and sells while flat
//! are ignored, so consecutive trades never overlap. A position still open
//! at series end produces no trade.

use crate::domain::bar::Bar;
use crate::domain::series::Series;
use crate::domain::signal::Signal;
use crate::domain::trade::Trade;

/// Open-position state threaded bar to bar. Not exposed outside the fold.
#[derive(Debug, Clone)]
enum Position {
    Flat,
    Long {
        entry_price: f64,
        entry_date: chrono::NaiveDate,
        entry_indicator: f64,
        max_price: f64,
    },
}

/// Walk `signals` over `series` and emit closed trades.
///
/// `indicator_column` names the strategy's gating indicator: bars where it
/// is undefined are skipped entirely (treated as hold, no state change), and
/// its value at entry and exit is stamped on each trade. A missing column
/// yields no trades.
pub fn extract_trades(series: &Series, signals: &[Signal], indicator_column: &str) -> Vec<Trade> {
    let Some(indicator) = series.column(indicator_column) else {
        return Vec::new();
    };

    let mut trades = Vec::new();
    let mut position = Position::Flat;

    for (i, bar) in series.bars().iter().enumerate() {
        let Some(indicator_value) = indicator[i] else {
            continue;
        };
        let signal = signals.get(i).copied().unwrap_or(Signal::Hold);

        match &mut position {
            Position::Flat => {
                if signal == Signal::Buy {
                    position = Position::Long {
                        entry_price: bar.close,
                        entry_date: bar.date,
                        entry_indicator: indicator_value,
                        max_price: bar.close,
                    };
                }
            }
            Position::Long {
                entry_price,
                entry_date,
                entry_indicator,
                max_price,
            } => {
                // The running maximum is updated before the sell check, so a
                // peak reached on the exit bar itself still counts.
                *max_price = max_price.max(bar.close);
                if signal == Signal::Sell {
                    trades.push(close_trade(
                        bar,
                        *entry_price,
                        *entry_date,
                        *entry_indicator,
                        *max_price,
                        indicator_value,
                    ));
                    position = Position::Flat;
                }
            }
        }
    }

    trades
}

fn close_trade(
    bar: &Bar,
    entry_price: f64,
    entry_date: chrono::NaiveDate,
    entry_indicator: f64,
    max_price: f64,
    exit_indicator: f64,
) -> Trade {
    Trade {
        entry_date,
        entry_price,
        entry_indicator,
        exit_date: bar.date,
        exit_price: bar.close,
        exit_indicator,
        return_pct: (bar.close / entry_price - 1.0) * 100.0,
        max_return_pct: (max_price / entry_price - 1.0) * 100.0,
        drawdown_pct: (bar.close / max_price - 1.0) * 100.0,
    }
}
