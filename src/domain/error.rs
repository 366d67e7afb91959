//! Domain error types.

/// Top-level error type for sigtrader.
///
/// Undefined indicator values are never errors; they are `None` entries in a
/// series column. Likewise a date filter that matches nothing yields an empty
/// series, not an error.
#[derive(Debug, thiserror::Error)]
pub enum SigtraderError {
    #[error("invalid period {value:?}: expected one of D, W, M")]
    InvalidPeriod { value: String },

    #[error("malformed series: {reason}")]
    MalformedSeries { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SigtraderError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SigtraderError::MalformedSeries {
            reason: reason.into(),
        }
    }
}

impl From<&SigtraderError> for std::process::ExitCode {
    fn from(err: &SigtraderError) -> Self {
        let code: u8 = match err {
            SigtraderError::Io(_) => 1,
            SigtraderError::ConfigParse { .. } | SigtraderError::ConfigInvalid { .. } => 2,
            SigtraderError::InvalidPeriod { .. } => 3,
            SigtraderError::MalformedSeries { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
