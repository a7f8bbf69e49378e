//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Mission Console Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/mission-console/config.toml

[console]

# Render tick rate as a human-readable duration.
# Controls how often the console redraws. Lower values = smoother but more CPU.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Interval between synthetic telemetry refreshes.
# Examples: "5s", "10s", "1m"
data_refresh = "5s"

# How long a notification toast stays on screen.
toast_ttl = "5s"

# View shown at startup.
# Options: "dashboard", "agents", "tasks", "growth", "vault", "comms", "settings"
start_view = "dashboard"
"#;

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns
///   `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to
///   `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and
/// setting 0600 permissions.
fn write_default_config(path: &PathBuf) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.clone(),
                source: e,
            }
        })?;
    }

    Ok(())
}
