//! Destiny Item Manager (DIM) armor CSV importer.
//!
//! DIM exports one row per armor piece with many columns; only the identity, tier,
//! ownership, loadout and base stat columns are read. Rows the tool cannot use
//! (class items, rare and common tiers, other classes) are skipped.

use std::cmp::Ordering;
use std::io;
use std::path::Path;

use anyhow::{Context, anyhow};
use armory_core::{Armor, Rarity, Slot, Stat, Stats};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::loaders::LoadResult;

/// Name of the suit built from equipped pieces.
pub const CURRENT_SUIT: &str = "Current";

/// Guardian class, matched against the `Equippable` column.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CharacterClass {
    Warlock,
    Titan,
    Hunter,
}

impl CharacterClass {
    fn matches(self, equippable: &str) -> bool {
        self.as_ref().eq_ignore_ascii_case(equippable.trim())
    }
}

/// One CSV row. Stats stay text until the row is known to be wanted.
#[derive(Debug, Deserialize)]
struct DimRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Equippable")]
    equippable: String,
    #[serde(rename = "Equipped")]
    equipped: String,
    #[serde(rename = "Owner")]
    owner: String,
    #[serde(rename = "Loadouts", default)]
    loadouts: String,
    #[serde(rename = "Mobility (Base)")]
    mobility: String,
    #[serde(rename = "Resilience (Base)")]
    resilience: String,
    #[serde(rename = "Recovery (Base)")]
    recovery: String,
    #[serde(rename = "Discipline (Base)")]
    discipline: String,
    #[serde(rename = "Intellect (Base)")]
    intellect: String,
    #[serde(rename = "Strength (Base)")]
    strength: String,
}

const SKIPPED_TYPES: [&str; 3] = ["Warlock Bond", "Titan Mark", "Hunter Cloak"];

impl DimRow {
    fn is_equipped(&self) -> bool {
        self.equipped == "true"
    }

    fn rarity(&self) -> Option<Rarity> {
        match self.tier.as_str() {
            "Exotic" => Some(Rarity::Exotic),
            "Legendary" => Some(Rarity::Legend),
            _ => None,
        }
    }

    fn slot(&self) -> anyhow::Result<Slot> {
        match self.kind.as_str() {
            "Helmet" => Ok(Slot::Head),
            "Gauntlets" => Ok(Slot::Arms),
            "Chest Armor" => Ok(Slot::Body),
            "Leg Armor" => Ok(Slot::Legs),
            other => Err(anyhow!("unexpected armor type: {other}")),
        }
    }

    /// `*` marks equipped pieces, `-` pieces carried outside the vault.
    ///
    /// Double quotes are dropped; armory files delimit names with them.
    fn decorated_name(&self) -> String {
        let name = strip_quotes(&self.name);
        if self.is_equipped() {
            format!("*{name}")
        } else if self.owner != "Vault" {
            format!("-{name}")
        } else {
            name
        }
    }

    fn stats(&self) -> anyhow::Result<Stats> {
        let columns = [
            &self.mobility,
            &self.resilience,
            &self.recovery,
            &self.discipline,
            &self.intellect,
            &self.strength,
        ];
        let mut stats = Stats::ZERO;
        for (stat, text) in Stat::all().into_iter().zip(columns) {
            let value = text
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid {stat} value: {text:?}"))?;
            stats.set(stat, value);
        }
        Ok(Stats::bounded(*stats.values())?)
    }

    fn loadout_names(&self) -> impl Iterator<Item = String> + '_ {
        self.loadouts
            .split(',')
            .map(strip_quotes)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

/// Pieces imported from a DIM export.
#[derive(Clone, Debug, Default)]
pub struct DimImport {
    /// Class filter the import was made with.
    pub class: Option<CharacterClass>,
    /// Every imported piece, in armory-file order.
    pub pieces: Vec<Armor>,
    /// Currently equipped pieces.
    pub equipped: Vec<Armor>,
    /// Pieces per DIM loadout, in first-seen loadout order.
    pub loadouts: IndexMap<String, Vec<Armor>>,
}

/// Importer for DIM armor CSV exports.
#[derive(Clone, Copy, Debug, Default)]
pub struct DimImporter {
    class: Option<CharacterClass>,
}

impl DimImporter {
    /// Creates an importer; `class` restricts the import to one guardian class.
    pub fn new(class: Option<CharacterClass>) -> Self {
        Self { class }
    }

    /// Load a DIM armor export.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// Returns the imported pieces and suits.
    pub fn load(&self, path: &Path) -> LoadResult<DimImport> {
        let reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
        self.import(reader)
            .with_context(|| format!("Failed to import {}", path.display()))
    }

    /// Imports from any reader holding CSV text with a header row.
    pub fn read<R: io::Read>(&self, reader: R) -> LoadResult<DimImport> {
        self.import(csv::Reader::from_reader(reader))
    }

    fn import<R: io::Read>(&self, mut reader: csv::Reader<R>) -> LoadResult<DimImport> {
        let mut import = DimImport {
            class: self.class,
            ..DimImport::default()
        };
        let mut skipped = 0usize;

        for (row, result) in reader.deserialize::<DimRow>().enumerate() {
            // 1-based, after the header row.
            let line = row + 2;
            let record =
                result.with_context(|| format!("Could not import row at line {line}"))?;

            let Some(rarity) = self.wanted(&record) else {
                skipped += 1;
                continue;
            };

            let piece = convert(&record, rarity)
                .with_context(|| format!("Could not import row at line {line}"))?;
            tracing::trace!(line, name = piece.name(), "imported piece");

            if record.is_equipped() {
                import.equipped.push(piece.clone());
            }
            for loadout in record.loadout_names() {
                import
                    .loadouts
                    .entry(loadout)
                    .or_default()
                    .push(piece.clone());
            }
            import.pieces.push(piece);
        }

        import.pieces.sort_by(import_order);
        tracing::debug!(
            pieces = import.pieces.len(),
            skipped,
            loadouts = import.loadouts.len(),
            "imported DIM export"
        );
        Ok(import)
    }

    /// The row's rarity if the row should be imported at all.
    fn wanted(&self, record: &DimRow) -> Option<Rarity> {
        if self
            .class
            .is_some_and(|class| !class.matches(&record.equippable))
        {
            return None;
        }
        if SKIPPED_TYPES.contains(&record.kind.as_str()) {
            return None;
        }
        record.rarity()
    }
}

fn convert(record: &DimRow, rarity: Rarity) -> anyhow::Result<Armor> {
    Ok(Armor::new(
        record.slot()?,
        rarity,
        record.decorated_name(),
        record.stats()?,
    ))
}

/// Exotics first, then slot, then name ignoring case, then higher total first.
fn import_order(a: &Armor, b: &Armor) -> Ordering {
    b.is_exotic()
        .cmp(&a.is_exotic())
        .then_with(|| a.slot().cmp(&b.slot()))
        .then_with(|| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
        })
        .then_with(|| b.total().cmp(&a.total()))
}
