//! Suits: one armor piece per slot.

use core::fmt;

use crate::armor::{Armor, Slot};
use crate::error::ArmoryError;
use crate::stats::{Stats, Weights};

/// A complete suit borrowed from a catalog (or from a [`NamedSuit`]).
///
/// Pieces are stored in slot order. A suit has no name of its own; ranked results
/// are labeled by position and declared suits carry their name in [`NamedSuit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Suit<'a> {
    pieces: [&'a Armor; Slot::COUNT],
}

impl<'a> Suit<'a> {
    /// Builds a suit, checking that the pieces are HEAD, ARMS, BODY, LEGS.
    pub fn new(pieces: [&'a Armor; Slot::COUNT]) -> Result<Self, ArmoryError> {
        for (expected, piece) in Slot::all().into_iter().zip(pieces) {
            if piece.slot() != expected {
                return Err(ArmoryError::WrongSlot {
                    expected,
                    found: piece.slot(),
                });
            }
        }
        Ok(Self { pieces })
    }

    /// Builds a suit from pieces already known to be in slot order.
    pub(crate) fn from_slots(
        head: &'a Armor,
        arms: &'a Armor,
        body: &'a Armor,
        legs: &'a Armor,
    ) -> Self {
        Self {
            pieces: [head, arms, body, legs],
        }
    }

    #[inline]
    pub fn piece(&self, slot: Slot) -> &'a Armor {
        self.pieces[slot.as_index()]
    }

    /// Pieces in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = &'a Armor> + '_ {
        self.pieces.iter().copied()
    }

    pub fn contains(&self, piece: &Armor) -> bool {
        self.pieces[piece.slot().as_index()] == piece
    }

    pub fn exotic_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.is_exotic()).count()
    }

    /// A suit is legal when it holds at most one exotic piece.
    pub fn is_legal(&self) -> bool {
        self.exotic_count() <= 1
    }

    /// Element-wise sum of the four pieces.
    pub fn stats(&self) -> Stats {
        self.pieces.iter().map(|piece| piece.stats()).sum()
    }

    pub fn total(&self) -> i32 {
        self.stats().total()
    }

    pub fn weighted_sum(&self, weights: &Weights) -> f64 {
        self.stats().weighted_sum(weights)
    }

    pub fn dominates(&self, floor: &Stats) -> bool {
        self.stats().dominates(floor)
    }

    pub fn diff(&self, other: &Suit<'_>) -> Stats {
        self.stats().diff(&other.stats())
    }
}

/// A suit declared in the armory file, used as a comparison baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedSuit {
    name: String,
    pieces: [Armor; Slot::COUNT],
}

impl NamedSuit {
    /// Builds a named suit, checking that the pieces are HEAD, ARMS, BODY, LEGS.
    pub fn new(
        name: impl Into<String>,
        pieces: [Armor; Slot::COUNT],
    ) -> Result<Self, ArmoryError> {
        Suit::new(pieces.each_ref())?;
        Ok(Self {
            name: name.into(),
            pieces,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suit(&self) -> Suit<'_> {
        Suit {
            pieces: self.pieces.each_ref(),
        }
    }
}

impl fmt::Display for NamedSuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<44} {}", self.name, self.suit().stats().numbers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::Rarity;
    use crate::stats::Stat;

    fn piece(slot: Slot, rarity: Rarity, value: i32) -> Armor {
        Armor::new(slot, rarity, format!("{slot} piece"), Stats::new([value; 6]))
    }

    fn full_set(rarities: [Rarity; 4]) -> [Armor; 4] {
        [
            piece(Slot::Head, rarities[0], 1),
            piece(Slot::Arms, rarities[1], 2),
            piece(Slot::Body, rarities[2], 3),
            piece(Slot::Legs, rarities[3], 4),
        ]
    }

    #[test]
    fn totals_sum_the_pieces() {
        let set = full_set([Rarity::Legend; 4]);
        let suit = Suit::new(set.each_ref()).unwrap();

        assert_eq!(suit.stats().get(Stat::Mob), 10);
        assert_eq!(suit.total(), 60);
        assert_eq!(suit.piece(Slot::Body).name(), "BODY piece");
        assert!(suit.contains(&set[2]));
    }

    #[test]
    fn legality_counts_exotics() {
        let one = full_set([Rarity::Exotic, Rarity::Legend, Rarity::Legend, Rarity::Legend]);
        let two = full_set([Rarity::Exotic, Rarity::Legend, Rarity::Exotic, Rarity::Legend]);

        assert!(Suit::new(one.each_ref()).unwrap().is_legal());
        let suit = Suit::new(two.each_ref()).unwrap();
        assert_eq!(suit.exotic_count(), 2);
        assert!(!suit.is_legal());
    }

    #[test]
    fn pieces_must_be_in_slot_order() {
        let [head, arms, body, legs] = full_set([Rarity::Legend; 4]);
        let err = Suit::new([&head, &body, &arms, &legs]).unwrap_err();
        assert_eq!(
            err,
            ArmoryError::WrongSlot {
                expected: Slot::Arms,
                found: Slot::Body
            }
        );

        assert!(NamedSuit::new("Broken", [legs, head, arms, body]).is_err());
    }

    #[test]
    fn named_suit_renders_name_and_totals() {
        let named = NamedSuit::new("Current", full_set([Rarity::Legend; 4])).unwrap();
        let row = named.to_string();
        assert!(row.starts_with("Current "));
        assert!(row.ends_with("=   60"));
        assert_eq!(named.suit().total(), 60);
    }
}
