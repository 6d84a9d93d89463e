//! Formatting configuration with TOML file support.

use serde::{Deserialize, Serialize};

use stamp_types::TimeError;

use crate::date::Zone;
use crate::logging::LogFormat;

/// Configuration for timestamp rendering.
///
/// Can be loaded from a TOML file via [`FormatConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
///
/// `countdown_tick_ms` and `relative_refresh_secs` are not read by this
/// crate. They are handed through to the page layer that re-runs
/// [`countdown_label`](crate::countdown_label) and
/// [`annotate`](crate::annotate) on a timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Fixed UTC offset in seconds for absolute dates; unset means the
    /// system local zone.
    #[serde(default)]
    pub utc_offset_secs: Option<i32>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How often the page layer refreshes countdown labels, in milliseconds.
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,

    /// How often the page layer recomputes relative durations, in seconds.
    #[serde(default = "default_relative_refresh_secs")]
    pub relative_refresh_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_countdown_tick_ms() -> u64 {
    1000
}

fn default_relative_refresh_secs() -> u64 {
    60
}

// ── Impl ───────────────────────────────────────────────────────────────

impl FormatConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, TimeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TimeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, TimeError> {
        toml::from_str(s).map_err(|e| TimeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, TimeError> {
        toml::to_string_pretty(self).map_err(|e| TimeError::Config(e.to_string()))
    }

    /// Zone absolute dates are rendered in.
    pub fn zone(&self) -> Zone {
        self.utc_offset_secs.map_or(Zone::Local, Zone::Fixed)
    }

    pub fn log_format(&self) -> Result<LogFormat, TimeError> {
        self.log_format.parse()
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            utc_offset_secs: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
            countdown_tick_ms: default_countdown_tick_ms(),
            relative_refresh_secs: default_relative_refresh_secs(),
        }
    }
}
