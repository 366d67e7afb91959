//! Configuration access port trait.

use chrono::NaiveDate;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;
    fn get_double(&self, section: &str, key: &str) -> Option<f64>;

    /// ISO `YYYY-MM-DD` date value; `None` when absent or unparseable.
    fn get_date(&self, section: &str, key: &str) -> Option<NaiveDate> {
        self.get_string(section, key)
            .and_then(|s| s.parse::<NaiveDate>().ok())
    }
}
