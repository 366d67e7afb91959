//! Plain-text / CSV report adapter.
//!
//! Renders the performance summary as aligned text and the trade list as
//! CSV. With an output directory it writes `summary.txt` and `trades.csv`;
//! without one it prints the same content to stdout.

use std::fs;
use std::path::PathBuf;

use crate::domain::error::SigtraderError;
use crate::domain::strategy::StrategyRun;
use crate::domain::summary::PerformanceSummary;
use crate::domain::trade::Trade;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter {
    out_dir: Option<PathBuf>,
}

impl TextReportAdapter {
    pub fn new(out_dir: Option<PathBuf>) -> Self {
        Self { out_dir }
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        name: &str,
        run: &StrategyRun,
        summary: &PerformanceSummary,
    ) -> Result<(), SigtraderError> {
        let summary_text = render_summary(name, summary);
        let trades_csv = render_trades_csv(&run.trades)?;

        match &self.out_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                fs::write(dir.join("summary.txt"), summary_text)?;
                fs::write(dir.join("trades.csv"), trades_csv)?;
            }
            None => {
                println!("{}", summary_text);
                if !run.trades.is_empty() {
                    println!("{}", trades_csv);
                }
            }
        }
        Ok(())
    }
}

pub fn render_summary(name: &str, summary: &PerformanceSummary) -> String {
    format!(
        "strategy:          {name}\n\
         total trades:      {total}\n\
         win rate:          {win:.2}%\n\
         avg return:        {avg:.2}%\n\
         total return:      {tot:.2}%\n\
         best trade:        {max:.2}%\n\
         worst trade:       {min:.2}%\n\
         avg hold periods:  {hold:.1}\n\
         avg drawdown:      {avg_dd:.2}%\n\
         max drawdown:      {max_dd:.2}%",
        name = name,
        total = summary.total_trades,
        win = summary.win_rate,
        avg = summary.avg_return,
        tot = summary.total_return,
        max = summary.max_return,
        min = summary.min_return,
        hold = summary.avg_hold_periods,
        avg_dd = summary.avg_drawdown,
        max_dd = summary.max_drawdown,
    )
}

pub fn render_trades_csv(trades: &[Trade]) -> Result<String, SigtraderError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "entry_date",
        "entry_price",
        "entry_indicator",
        "exit_date",
        "exit_price",
        "exit_indicator",
        "return_pct",
        "max_return_pct",
        "drawdown_pct",
    ])
    .map_err(csv_error)?;

    for trade in trades {
        wtr.write_record([
            trade.entry_date.to_string(),
            format!("{}", trade.entry_price),
            format!("{}", trade.entry_indicator),
            trade.exit_date.to_string(),
            format!("{}", trade.exit_price),
            format!("{}", trade.exit_indicator),
            format!("{}", trade.return_pct),
            format!("{}", trade.max_return_pct),
            format!("{}", trade.drawdown_pct),
        ])
        .map_err(csv_error)?;
    }

    let bytes = wtr.into_inner().map_err(|e| {
        SigtraderError::Io(std::io::Error::other(format!("CSV flush error: {}", e)))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| SigtraderError::Io(std::io::Error::other(format!("CSV encoding: {}", e))))
}

fn csv_error(e: csv::Error) -> SigtraderError {
    SigtraderError::Io(std::io::Error::other(format!("CSV write error: {}", e)))
}
