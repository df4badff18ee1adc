//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific config directory for armory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/armory`
/// - Linux: `~/.config/armory` (or `$XDG_CONFIG_HOME/armory`)
/// - Windows: `%APPDATA%\armory\config`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "armory").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default build config file, `armory.toml` in [`config_dir`].
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("armory.toml"))
}
