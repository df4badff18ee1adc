//! Armor pieces, slots and rarity.

use core::fmt;

use crate::stats::{Stat, Stats, Weights};

/// Equipment position. A suit holds exactly one piece per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Slot {
    Head = 0,
    Arms = 1,
    Body = 2,
    Legs = 3,
}

impl Slot {
    /// Total number of slots.
    pub const COUNT: usize = 4;

    /// Returns all slots in suit order.
    pub const fn all() -> [Slot; Self::COUNT] {
        [Slot::Head, Slot::Arms, Slot::Body, Slot::Legs]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Armor rarity. Other tiers exist in the game but never matter for loadouts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    /// At most one exotic piece may appear in a suit.
    #[strum(to_string = "EXOTIC")]
    Exotic,
    #[strum(to_string = "LEGEND", serialize = "LEGENDARY")]
    Legend,
}

/// A single armor piece.
///
/// Identity is the whole record: two pieces with the same slot, rarity, name and
/// stats are the same piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    slot: Slot,
    rarity: Rarity,
    name: String,
    stats: Stats,
}

impl Armor {
    pub fn new(slot: Slot, rarity: Rarity, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            slot,
            rarity,
            name: name.into(),
            stats,
        }
    }

    #[inline]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    #[inline]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[inline]
    pub fn is_exotic(&self) -> bool {
        self.rarity == Rarity::Exotic
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    pub fn total(&self) -> i32 {
        self.stats.total()
    }

    pub fn weighted_sum(&self, weights: &Weights) -> f64 {
        self.stats.weighted_sum(weights)
    }

    pub fn dominates(&self, other: &Armor) -> bool {
        self.stats.dominates(&other.stats)
    }

    pub fn diff(&self, other: &Armor) -> Stats {
        self.stats.diff(&other.stats)
    }
}

impl fmt::Display for Armor {
    /// One report row: slot, rarity, padded name, numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:<30} {}",
            self.slot,
            self.rarity,
            self.name,
            self.stats.numbers()
        )
    }
}
