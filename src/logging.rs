//! Logging initialization for Mission Console.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `MSC_LOG` environment variable. Falls back to `info` level when the
//! variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! msc widgets
//!
//! # Debug level
//! MSC_LOG=debug msc widgets
//!
//! # Module-specific filtering
//! MSC_LOG=mission_console=debug,warn msc widgets
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `MSC_LOG` environment variable for filter directives and
/// falls back to `info` when the variable is unset or invalid. Output
/// goes to stderr; for the TUI this keeps log lines off the alternate
/// screen (redirect stderr to a file to capture them).
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init() {
    let filter = EnvFilter::try_from_env("MSC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
