//! Convert a DIM armor export into an armory file.

use std::path::PathBuf;

use anyhow::Result;
use armory_content::{ArmoryWriter, CharacterClass, DimImporter};
use clap::Parser;

/// Import armor from a Destiny Item Manager (DIM) armor CSV file
#[derive(Parser)]
pub struct Import {
    /// DIM armor CSV export
    #[arg(value_name = "CSV")]
    file: PathBuf,

    /// Only import armor for this class (warlock, titan or hunter); also adds
    /// default criteria and the equipped and loadout suits
    #[arg(short, long, value_name = "CLASS")]
    class: Option<CharacterClass>,
}

impl Import {
    pub fn execute(self) -> Result<()> {
        let import = DimImporter::new(self.class).load(&self.file)?;
        tracing::info!(
            file = %self.file.display(),
            pieces = import.pieces.len(),
            "converted DIM export"
        );
        print!("{}", ArmoryWriter::render(&import));
        Ok(())
    }
}
