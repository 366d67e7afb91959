//! Close/MA ratio threshold strategy.

use crate::domain::indicator::ma;
use crate::domain::series::Series;
use crate::domain::signal::Signal;
use crate::domain::strategy::Strategy;

pub const RATIO_COLUMN: &str = "PRICE_MA_RATIO";

/// Buy when close falls a given fraction below its moving average, sell when
/// it rises a given fraction above. Both thresholds compare against the same
/// bar's ratio; there is no shift.
#[derive(Debug, Clone)]
pub struct RatioStrategy {
    pub ratio_low: f64,
    pub ratio_high: f64,
    pub ma_period: usize,
}

impl RatioStrategy {
    pub fn new(ratio_low: f64, ratio_high: f64, ma_period: usize) -> Self {
        RatioStrategy {
            ratio_low,
            ratio_high,
            ma_period,
        }
    }
}

impl Strategy for RatioStrategy {
    fn name(&self) -> String {
        format!(
            "ratio(MA{}, {:.2}/{:.2})",
            self.ma_period, self.ratio_low, self.ratio_high
        )
    }

    fn process(&self, series: &Series) -> Series {
        let with_ma = ma::with_ma(series, self.ma_period);
        let ma_column = with_ma
            .column(&ma::column_name(self.ma_period))
            .map(<[Option<f64>]>::to_vec)
            .unwrap_or_default();
        let ratio: Vec<Option<f64>> = with_ma
            .bars()
            .iter()
            .zip(&ma_column)
            .map(|(bar, ma)| ma.map(|m| bar.close / m))
            .collect();
        with_ma.with_column(RATIO_COLUMN, ratio)
    }

    fn signals(&self, series: &Series) -> Vec<Signal> {
        let Some(ratio) = series.column(RATIO_COLUMN) else {
            return vec![Signal::Hold; series.len()];
        };
        ratio
            .iter()
            .map(|value| match value {
                Some(r) if *r < self.ratio_low => Signal::Buy,
                Some(r) if *r > self.ratio_high => Signal::Sell,
                _ => Signal::Hold,
            })
            .collect()
    }

    fn trade_indicator(&self) -> String {
        RATIO_COLUMN.to_string()
    }
}
