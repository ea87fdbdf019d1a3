use thiserror::Error;

/// Errors raised by the numeric pipeline.
///
/// The engine never returns a partially filled result: any of these means
/// the chart could not be computed at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unable to compute {stage}: got non-finite value {value}")]
    NonFinite { stage: &'static str, value: f64 },
    #[error("Invalid civil time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidCivilTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    #[error("House number must be between 1 and 12, got {0}")]
    InvalidHouseNumber(u8),
}

/// Errors raised by interpretation stores.
///
/// These never reach callers of the lookup adapter; they are logged and
/// replaced by placeholder text.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Interpretation store unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read interpretation store at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in interpretation store: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Malformed collection {collection}: {message}")]
    Malformed { collection: String, message: String },
}

pub(crate) fn ensure_finite(stage: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFinite { stage, value })
    }
}
