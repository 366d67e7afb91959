//! CLI definition and dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::error::SigtraderError;
use crate::domain::period::Period;
use crate::domain::strategy::{
    DateRange, KdjCrossStrategy, MacdCrossStrategy, RatioStrategy, Strategy, run_strategy,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "sigtrader", about = "Rule-based trading strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyKind {
    /// Close/MA ratio thresholds
    Ratio,
    /// KDJ golden/death cross
    Kdj,
    /// MACD golden/death cross
    Macd,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a strategy against a price series and report performance
    Analyze {
        /// Series code; the data adapter reads {data_dir}/{code}.csv
        #[arg(long)]
        code: String,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// INI file supplying defaults for the flags below
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = StrategyKind::Ratio)]
        strategy: StrategyKind,
        /// Bar period: D, W or M
        #[arg(long)]
        period: Option<String>,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        ratio_low: Option<f64>,
        #[arg(long)]
        ratio_high: Option<f64>,
        #[arg(long)]
        ma_period: Option<usize>,
        #[arg(long)]
        kdj_n: Option<usize>,
        #[arg(long)]
        kdj_m1: Option<usize>,
        #[arg(long)]
        kdj_m2: Option<usize>,
        #[arg(long)]
        macd_fast: Option<usize>,
        #[arg(long)]
        macd_slow: Option<usize>,
        #[arg(long)]
        macd_signal: Option<usize>,
        /// Write summary.txt and trades.csv here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show date range and bar count for a series
    Info {
        #[arg(long)]
        code: String,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            code,
            data_dir,
            config,
            strategy,
            period,
            start_date,
            end_date,
            ratio_low,
            ratio_high,
            ma_period,
            kdj_n,
            kdj_m1,
            kdj_m2,
            macd_fast,
            macd_slow,
            macd_signal,
            output,
        } => run_analyze(AnalyzeArgs {
            code,
            data_dir,
            config,
            strategy,
            period,
            start_date,
            end_date,
            ratio_low,
            ratio_high,
            ma_period,
            kdj_n,
            kdj_m1,
            kdj_m2,
            macd_fast,
            macd_slow,
            macd_signal,
            output,
        }),
        Command::Info {
            code,
            data_dir,
            config,
        } => run_info(&code, data_dir, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

struct AnalyzeArgs {
    code: String,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    strategy: StrategyKind,
    period: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    ratio_low: Option<f64>,
    ratio_high: Option<f64>,
    ma_period: Option<usize>,
    kdj_n: Option<usize>,
    kdj_m1: Option<usize>,
    kdj_m2: Option<usize>,
    macd_fast: Option<usize>,
    macd_slow: Option<usize>,
    macd_signal: Option<usize>,
    output: Option<PathBuf>,
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), SigtraderError> {
    let config = load_config(args.config.as_deref())?;
    let config = config.as_ref();

    let data_dir = resolve_data_dir(args.data_dir, config);
    let period: Period = args
        .period
        .or_else(|| config.and_then(|c| c.get_string("strategy", "period")))
        .unwrap_or_else(|| "W".to_string())
        .parse()?;

    let range = DateRange {
        start: args
            .start_date
            .or_else(|| config.and_then(|c| c.get_date("strategy", "start_date"))),
        end: args
            .end_date
            .or_else(|| config.and_then(|c| c.get_date("strategy", "end_date"))),
    };

    let double = |flag: Option<f64>, key: &str, default: f64| {
        flag.or_else(|| config.and_then(|c| c.get_double("strategy", key)))
            .unwrap_or(default)
    };
    let int = |flag: Option<usize>, key: &str, default: usize| {
        flag.or_else(|| {
            config
                .and_then(|c| c.get_int("strategy", key))
                .and_then(|v| usize::try_from(v).ok())
        })
        .unwrap_or(default)
    };

    let strategy: Box<dyn Strategy> = match args.strategy {
        StrategyKind::Ratio => Box::new(RatioStrategy::new(
            double(args.ratio_low, "ratio_low", 1.00),
            double(args.ratio_high, "ratio_high", 1.05),
            int(args.ma_period, "ma_period", 5),
        )),
        StrategyKind::Kdj => Box::new(KdjCrossStrategy::new(
            int(args.kdj_n, "kdj_n", 9),
            int(args.kdj_m1, "kdj_m1", 3),
            int(args.kdj_m2, "kdj_m2", 3),
        )),
        StrategyKind::Macd => Box::new(MacdCrossStrategy::new(
            int(args.macd_fast, "macd_fast", 12),
            int(args.macd_slow, "macd_slow", 26),
            int(args.macd_signal, "macd_signal", 9),
        )),
    };

    let adapter = CsvAdapter::new(data_dir);
    let raw = adapter.load_series(&args.code)?;
    let run = run_strategy(strategy.as_ref(), &raw, range, period);
    let summary = run.summary();

    let report = TextReportAdapter::new(args.output);
    report.write(&strategy.name(), &run, &summary)
}

fn run_info(
    code: &str,
    data_dir: Option<PathBuf>,
    config_path: Option<&std::path::Path>,
) -> Result<(), SigtraderError> {
    let config = load_config(config_path)?;
    let adapter = CsvAdapter::new(resolve_data_dir(data_dir, config.as_ref()));
    match adapter.series_range(code)? {
        Some((first, last, count)) => {
            println!("code:  {code}");
            println!("range: {first} to {last}");
            println!("bars:  {count}");
        }
        None => println!("no data for {code}"),
    }
    Ok(())
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<Option<FileConfigAdapter>, SigtraderError> {
    path.map(FileConfigAdapter::from_file).transpose()
}

fn resolve_data_dir(flag: Option<PathBuf>, config: Option<&FileConfigAdapter>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.get_string("data", "dir").map(PathBuf::from)))
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "sigtrader",
            "analyze",
            "--code",
            "600000",
            "--strategy",
            "kdj",
            "--period",
            "W",
            "--start-date",
            "2018-01-01",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze {
                code,
                period,
                start_date,
                ..
            } => {
                assert_eq!(code, "600000");
                assert_eq!(period.as_deref(), Some("W"));
                assert_eq!(
                    start_date,
                    Some(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
                );
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn cli_rejects_unknown_strategy() {
        assert!(
            Cli::try_parse_from(["sigtrader", "analyze", "--code", "x", "--strategy", "rsi"])
                .is_err()
        );
    }

    #[test]
    fn cli_parses_info() {
        let cli = Cli::try_parse_from(["sigtrader", "info", "--code", "600000"]).unwrap();
        assert!(matches!(cli.command, Command::Info { .. }));
    }

    #[test]
    fn bad_period_string_is_invalid_period() {
        let args = AnalyzeArgs {
            code: "600000".into(),
            data_dir: None,
            config: None,
            strategy: StrategyKind::Ratio,
            period: Some("Q".into()),
            start_date: None,
            end_date: None,
            ratio_low: None,
            ratio_high: None,
            ma_period: None,
            kdj_n: None,
            kdj_m1: None,
            kdj_m2: None,
            macd_fast: None,
            macd_slow: None,
            macd_signal: None,
            output: None,
        };
        let err = run_analyze(args).unwrap_err();
        assert!(matches!(err, SigtraderError::InvalidPeriod { .. }));
    }
}
