//! Armory file loader.

use std::path::Path;

use anyhow::Context;

use crate::armory::ArmoryFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for armory files.
pub struct ArmoryLoader;

impl ArmoryLoader {
    /// Load and parse an armory file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the armory file
    ///
    /// # Returns
    ///
    /// Returns the parsed catalog, declared suits and criteria.
    pub fn load(path: &Path) -> LoadResult<ArmoryFile> {
        let content = read_file(path)?;
        let file = ArmoryFile::parse(&content)
            .with_context(|| format!("Failed to parse armory file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            pieces = file.catalog().len(),
            suits = file.suits().len(),
            "loaded armory file"
        );
        Ok(file)
    }
}
