//! Error type shared across stamp crates.

use thiserror::Error;

/// Common error type for timestamp formatting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid calendar date: {reason}")]
    InvalidDate { reason: String },

    #[error("timestamp {0} is outside the representable calendar range")]
    OutOfRange(i64),

    #[error("UTC offset of {0} seconds is out of range")]
    InvalidOffset(i32),

    #[error("failed to parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("config error: {0}")]
    Config(String),
}
