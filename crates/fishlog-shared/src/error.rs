use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("Index {index} out of range for log of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown draft field: {0}")]
    UnknownField(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),
}
