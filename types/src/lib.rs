//! Fundamental types for stamp.
//!
//! This crate defines the value types shared by the formatting crate:
//! timestamps, calendar components, and the common error type.

pub mod date;
pub mod error;
pub mod time;

pub use date::DateParts;
pub use error::TimeError;
pub use time::Timestamp;
