//! Timestamp display formatting for stamp.
//!
//! Relative durations ("2 days 3 hours ago"), absolute local dates
//! (`YYYY-MM-DD HH:MM[:SS]`), the title/text annotation of timestamped
//! elements, countdown labels, and the server-side template filters.

pub mod annotate;
pub mod config;
pub mod countdown;
pub mod date;
pub mod duration;
pub mod filters;
pub mod logging;

pub use annotate::{annotate, annotate_attr, parse_timestamp_attr, Annotation, DisplayFlags};
pub use config::FormatConfig;
pub use countdown::{countdown_label, format_remaining};
pub use date::{format_date, format_timestamp, Zone};
pub use duration::{decompose, format_duration, TimeUnit, UNITS};
pub use logging::{init_logging, LogFormat};
pub use stamp_types::{DateParts, TimeError, Timestamp};
