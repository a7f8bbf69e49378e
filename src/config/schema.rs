//! TOML configuration schema types for Mission Console.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible
//! defaults via `#[serde(default)]`, so a missing file or a partial file
//! both yield a working configuration.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"5s"`)
//! parsed by the `humantime` crate at the call site.
//!
//! Configuration tunes ambient behavior only. Layout state (sidebar
//! widgets, grid order) is deliberately not configurable or persisted:
//! it resets to the built-in defaults on every start.

use crate::ViewId;
use serde::{Deserialize, Serialize};

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [console]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Console appearance and timing settings.
    pub console: ConsoleConfig,
}

/// Console timing and startup settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    /// Lower values animate more smoothly at the cost of CPU.
    pub tick_rate: String,
    /// Interval between synthetic telemetry refreshes (e.g. `"5s"`).
    pub data_refresh: String,
    /// How long a notification toast stays on screen (e.g. `"5s"`).
    pub toast_ttl: String,
    /// View shown at startup.
    pub start_view: ViewId,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            data_refresh: "5s".to_string(),
            toast_ttl: "5s".to_string(),
            start_view: ViewId::Dashboard,
        }
    }
}

impl ConsoleConfig {
    /// Parses a duration field, falling back to `fallback` on invalid
    /// input with a warning rather than refusing to start.
    pub fn parse_duration(value: &str, fallback: std::time::Duration) -> std::time::Duration {
        match humantime::parse_duration(value) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("invalid duration '{value}': {e}; using default");
                fallback
            }
        }
    }
}
