//! List the pieces of an armory file and flag the dominated ones.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use armory_content::{ArmoryFile, ArmoryLoader};
use armory_core::find_dominated;
use clap::Parser;
use console::style;

/// List the pieces of armor in an armory file
#[derive(Parser)]
pub struct List {
    /// Armory file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let armory = ArmoryLoader::load(&self.file)?;
        let mut out = io::stdout().lock();
        write_listing(&mut out, &self.file.display().to_string(), &armory)?;
        Ok(())
    }
}

fn write_listing(out: &mut impl Write, name: &str, armory: &ArmoryFile) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {name}:", style("Pieces from").bold().cyan())?;
    writeln!(out)?;
    for piece in armory.catalog().pieces() {
        writeln!(out, "{piece}")?;
    }

    let dominated = find_dominated(armory.catalog());
    tracing::debug!(dominated = dominated.len(), "checked for dominated pieces");
    if !dominated.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "The following pieces of armor are dominated by other pieces of"
        )?;
        writeln!(out, "the same type.  You might wish to dispose of them.")?;
        writeln!(out)?;
        for piece in dominated {
            writeln!(out, "{piece}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        console::set_colors_enabled(false);
        let armory = ArmoryFile::parse(text).unwrap();
        let mut out = Vec::new();
        write_listing(&mut out, "test.txt", &armory).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_pieces_then_dominated_ones() {
        let output = render(
            "ARMS LEGEND \"A\" 10 10 10 10 10 10\n\
             ARMS LEGEND \"B\" 10  9 10 10 10 10\n",
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "Pieces from test.txt:");
        assert!(lines[3].starts_with("ARMS LEGEND A "));
        assert!(lines[4].starts_with("ARMS LEGEND B "));
        assert!(output.contains("dominated by other pieces of"));
        assert!(lines.last().unwrap().starts_with("ARMS LEGEND B "));
    }

    #[test]
    fn no_dominated_section_when_nothing_is_dominated() {
        let output = render(
            "ARMS LEGEND \"A\" 10 10 10 10 10 10\n\
             ARMS LEGEND \"B\" 11  9 10 10 10 10\n",
        );
        assert!(!output.contains("dominated"));
    }
}
