//! Armory file writer.
//!
//! Renders a [`DimImport`] as armory-file text that [`crate::ArmoryFile::parse`]
//! reads back.

use armory_core::{Armor, Slot, Stat};

use crate::loaders::DimImport;
use crate::loaders::dim::CURRENT_SUIT;

const DEFAULT_WEIGHTS: &str = "weights  0.8 1.0 1.0 0.0 0.0 0.0";
const DEFAULT_MINIMUMS: &str = "minStats  20  20  20  20  20  20";

/// One piece line: `SLOT RARITY "Name" mob res rec dis int str`.
pub fn armor_row(piece: &Armor) -> String {
    let mut row = format!(
        "{:<4} {:<6} {:<32}",
        piece.slot().as_ref(),
        piece.rarity().as_ref(),
        format!("\"{}\"", piece.name())
    );
    for stat in Stat::all() {
        row.push_str(&format!(" {:>3}", piece.stat(stat)));
    }
    row
}

/// Writes imported armor as an armory file.
pub struct ArmoryWriter;

impl ArmoryWriter {
    pub fn render(import: &DimImport) -> String {
        let mut out = String::new();

        match import.class {
            Some(class) => out.push_str(&format!("# Armory File: {class}\n")),
            None => out.push_str("# Armory File: All Classes\n"),
        }
        out.push_str("#\n# * = Equipped, - = Carried\n\n");

        // Suits and defaults only make sense for a single class.
        if import.class.is_some() {
            out.push_str(DEFAULT_WEIGHTS);
            out.push('\n');
            out.push_str(DEFAULT_MINIMUMS);
            out.push_str("\n\n");

            if !import.equipped.is_empty() {
                write_suit(&mut out, CURRENT_SUIT, &import.equipped);
            }
            for (name, pieces) in &import.loadouts {
                write_suit(&mut out, name, pieces);
            }
        }

        out.push_str("# Exotic Armor\n");
        for piece in import.pieces.iter().filter(|piece| piece.is_exotic()) {
            out.push_str(&armor_row(piece));
            out.push('\n');
        }
        out.push_str("\n# Legacy Armor\n");
        for piece in import.pieces.iter().filter(|piece| !piece.is_exotic()) {
            out.push_str(&armor_row(piece));
            out.push('\n');
        }
        out
    }
}

/// Writes a suit block, or skips it with a warning unless it has exactly one piece
/// per slot.
fn write_suit(out: &mut String, name: &str, pieces: &[Armor]) {
    let mut by_slot: [Option<&Armor>; Slot::COUNT] = [None; Slot::COUNT];
    for piece in pieces {
        let entry = &mut by_slot[piece.slot().as_index()];
        if entry.is_some() {
            tracing::warn!(suit = name, slot = %piece.slot(), "suit has two pieces in one slot, skipped");
            return;
        }
        *entry = Some(piece);
    }

    let mut rows = Vec::with_capacity(Slot::COUNT);
    for slot in Slot::all() {
        match by_slot[slot.as_index()] {
            Some(piece) => rows.push(armor_row(piece)),
            None => {
                tracing::warn!(suit = name, %slot, "suit is missing a piece, skipped");
                return;
            }
        }
    }

    out.push_str(&format!("suit \"{name}\"\n"));
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
}
