//! Platform-aware path resolution for Mission Console.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/mission-console` or `~/.config/mission-console`.
//!
//! On **macOS**, uses Apple conventions with an XDG env var override:
//! `$XDG_CONFIG_HOME/mission-console` or
//! `~/Library/Application Support/mission-console`.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "mission-console";

/// Returns the configuration directory for Mission Console.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mission-console` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/mission-console`
///    - macOS: `~/Library/Application Support/mission-console`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Creates the configuration directory if it does not exist, returning
/// its path.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}
