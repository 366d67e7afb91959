//! CSV file data adapter.
//!
//! Reads `{base_path}/{code}.csv` with a `date,open,high,low,close` header.
//! Anything missing or unparseable fails fast with `MalformedSeries` before
//! the engine sees the data.

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::bar::Bar;
use crate::domain::error::SigtraderError;
use crate::domain::series::Series;
use crate::ports::data_port::DataPort;

const REQUIRED_COLUMNS: [&str; 5] = ["date", "open", "high", "low", "close"];

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", code))
    }
}

impl DataPort for CsvAdapter {
    fn load_series(&self, code: &str) -> Result<Series, SigtraderError> {
        let path = self.csv_path(code);
        let file = File::open(&path).map_err(|e| {
            SigtraderError::malformed(format!("cannot open {}: {}", path.display(), e))
        })?;
        let mut rdr = csv::Reader::from_reader(file);

        let headers = rdr
            .headers()
            .map_err(|e| SigtraderError::malformed(format!("CSV header error: {}", e)))?
            .clone();
        let mut indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    SigtraderError::malformed(format!("missing required column {:?}", name))
                })?;
        }
        let [date_idx, open_idx, high_idx, low_idx, close_idx] = indices;

        let mut bars = Vec::new();
        for result in rdr.records() {
            let record =
                result.map_err(|e| SigtraderError::malformed(format!("CSV parse error: {}", e)))?;

            let date_str = field(&record, date_idx, "date")?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                SigtraderError::malformed(format!("unparseable date {:?}: {}", date_str, e))
            })?;

            bars.push(Bar {
                date,
                open: parse_price(&record, open_idx, "open")?,
                high: parse_price(&record, high_idx, "high")?,
                low: parse_price(&record, low_idx, "low")?,
                close: parse_price(&record, close_idx, "close")?,
            });
        }

        if bars.is_empty() {
            return Err(SigtraderError::malformed(format!(
                "{} contains no data rows",
                path.display()
            )));
        }

        bars.sort_by_key(|b| b.date);
        Series::new(bars)
    }
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'r str, SigtraderError> {
    record
        .get(index)
        .ok_or_else(|| SigtraderError::malformed(format!("row is missing the {} field", name)))
}

fn parse_price(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<f64, SigtraderError> {
    let raw = field(record, index, name)?;
    raw.parse::<f64>()
        .map_err(|e| SigtraderError::malformed(format!("invalid {} value {:?}: {}", name, raw, e)))
}
