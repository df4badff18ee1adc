//! Loaders for reading armory data from files.
//!
//! Armory files are parsed by [`crate::armory`]; DIM exports are CSV and build
//! configuration is TOML.

pub mod armory;
pub mod config;
pub mod dim;

pub use armory::ArmoryLoader;
pub use config::{BuildConfig, ConfigLoader, StatTable};
pub use dim::{CharacterClass, DimImport, DimImporter};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
