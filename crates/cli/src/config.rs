//! Environment configuration for the armory CLI.
use std::env;
use std::path::{Path, PathBuf};

use crate::dirs;

/// Settings read from the environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Build config file to use when `--config` is not given.
    pub config_path: Option<PathBuf>,
    /// Raw `ARMORY_LIMIT`, replacing the built-in default of 5. Parsed and
    /// validated when criteria are resolved.
    pub limit: Option<String>,
    /// Log filter directives.
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_CONFIG` - Build config file (TOML)
    /// - `ARMORY_LIMIT` - Default result limit
    /// - `ARMORY_LOG` - Log filter, falling back to `RUST_LOG`
    pub fn from_env() -> Self {
        Self {
            config_path: read_env::<PathBuf>("ARMORY_CONFIG"),
            limit: read_env::<String>("ARMORY_LIMIT"),
            log_filter: read_env::<String>("ARMORY_LOG").or_else(|| read_env("RUST_LOG")),
        }
    }

    /// Picks the build config file: the flag, then `ARMORY_CONFIG`, then the
    /// platform default if it exists.
    pub fn config_file(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.config_path.clone())
            .or_else(|| dirs::default_config_file().filter(|path| path.is_file()))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
