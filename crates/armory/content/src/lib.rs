//! File formats and loaders for the armory tool.
//!
//! This crate turns files into armory-core values and back:
//! - Armory files (line-oriented text: pieces, declared suits, weights, minimums)
//! - Destiny Item Manager armor exports (CSV) converted to armory files
//! - Build configuration (TOML)
//!
//! Everything here is I/O and parsing; the loadout search itself lives in armory-core.

pub mod armory;
pub mod loaders;
pub mod writer;

pub use armory::{ArmoryFile, ParseError, ParseErrorKind};
pub use loaders::{
    ArmoryLoader, BuildConfig, CharacterClass, ConfigLoader, DimImport, DimImporter, StatTable,
};
pub use writer::{ArmoryWriter, armor_row};
