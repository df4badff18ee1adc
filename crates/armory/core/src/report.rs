//! Reports derived from ranked results and from the catalog.

use crate::armor::{Armor, Slot};
use crate::catalog::Catalog;
use crate::error::ArmoryError;
use crate::rank::RankedSuit;
use crate::stats::Stats;
use crate::suit::{NamedSuit, Suit};

/// Stat deltas between a result and a baseline suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    /// `result totals - baseline totals`.
    pub total: Stats,
    /// Per-slot piece deltas, in slot order.
    pub pieces: [Stats; Slot::COUNT],
}

impl Comparison {
    pub fn piece(&self, slot: Slot) -> &Stats {
        &self.pieces[slot.as_index()]
    }
}

/// Compares `result` against `baseline`, suit totals and slot by slot.
pub fn compare(result: &Suit<'_>, baseline: &Suit<'_>) -> Comparison {
    Comparison {
        total: result.diff(baseline),
        pieces: Slot::all().map(|slot| result.piece(slot).diff(baseline.piece(slot))),
    }
}

/// Catalog pieces that appear in none of `results`, in catalog order.
///
/// `results` must be the final list shown to the user: a piece only used by suits
/// that missed the floor or the limit counts as unused.
pub fn find_unused<'c>(results: &[RankedSuit<'_>], catalog: &'c Catalog) -> Vec<&'c Armor> {
    catalog
        .pieces()
        .filter(|piece| !results.iter().any(|ranked| ranked.suit.contains(piece)))
        .collect()
}

/// Pieces dominated by a different piece of the same slot, in catalog order.
///
/// Two distinct pieces with identical stats dominate each other and are both
/// reported.
pub fn find_dominated(catalog: &Catalog) -> Vec<&Armor> {
    catalog
        .pieces()
        .filter(|piece| {
            catalog
                .slot(piece.slot())
                .iter()
                .any(|other| other != *piece && other.dominates(piece))
        })
        .collect()
}

/// Looks up a declared suit by name.
pub fn find_suit<'s>(suits: &'s [NamedSuit], name: &str) -> Result<&'s NamedSuit, ArmoryError> {
    suits
        .iter()
        .find(|suit| suit.name() == name)
        .ok_or_else(|| ArmoryError::UnknownSuit(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::Rarity;
    use crate::generate::SuitGenerator;
    use crate::rank::{Criteria, rank};
    use crate::stats::Stat;

    fn piece(slot: Slot, name: &str, values: [i32; 6]) -> Armor {
        Armor::new(slot, Rarity::Legend, name, Stats::new(values))
    }

    #[test]
    fn comparison_diffs_totals_and_pieces() {
        let a = [
            piece(Slot::Head, "H1", [10, 0, 0, 0, 0, 0]),
            piece(Slot::Arms, "A1", [0, 10, 0, 0, 0, 0]),
            piece(Slot::Body, "B1", [0, 0, 10, 0, 0, 0]),
            piece(Slot::Legs, "L1", [0, 0, 0, 10, 0, 0]),
        ];
        let b = [
            piece(Slot::Head, "H2", [4, 0, 0, 0, 0, 0]),
            piece(Slot::Arms, "A2", [0, 10, 0, 0, 0, 0]),
            piece(Slot::Body, "B2", [0, 0, 12, 0, 0, 0]),
            piece(Slot::Legs, "L2", [0, 0, 0, 10, 0, 1]),
        ];
        let result = Suit::new(a.each_ref()).unwrap();
        let baseline = Suit::new(b.each_ref()).unwrap();

        let comparison = compare(&result, &baseline);
        assert_eq!(comparison.total, Stats::new([6, 0, -2, 0, 0, -1]));
        assert_eq!(comparison.piece(Slot::Head).get(Stat::Mob), 6);
        assert_eq!(comparison.piece(Slot::Arms), &Stats::ZERO);
        assert_eq!(comparison.piece(Slot::Legs).get(Stat::Str), -1);
    }

    #[test]
    fn unused_is_relative_to_final_results() {
        let catalog: Catalog = [
            piece(Slot::Head, "Best Helm", [10, 10, 10, 10, 10, 10]),
            piece(Slot::Head, "Worse Helm", [1, 1, 1, 1, 1, 1]),
            piece(Slot::Arms, "Gloves", [1, 1, 1, 1, 1, 1]),
            piece(Slot::Body, "Vest", [1, 1, 1, 1, 1, 1]),
            piece(Slot::Legs, "Boots", [1, 1, 1, 1, 1, 1]),
        ]
        .into_iter()
        .collect();

        let criteria = Criteria {
            limit: 1,
            ..Criteria::default()
        };
        let ranking = rank(SuitGenerator::new(&catalog), &criteria);
        let unused: Vec<&str> = find_unused(&ranking.results, &catalog)
            .into_iter()
            .map(Armor::name)
            .collect();
        assert_eq!(unused, ["Worse Helm"]);

        let ranking = rank(SuitGenerator::new(&catalog), &Criteria::default());
        assert!(find_unused(&ranking.results, &catalog).is_empty());

        // No results: everything is unused.
        assert_eq!(find_unused(&[], &catalog).len(), catalog.len());
    }

    #[test]
    fn dominated_pieces_are_flagged_per_slot() {
        let catalog: Catalog = [
            piece(Slot::Head, "A", [10, 10, 10, 10, 10, 10]),
            piece(Slot::Head, "B", [10, 9, 10, 10, 10, 10]),
            piece(Slot::Head, "C", [11, 0, 10, 10, 10, 10]),
            // Different slot: never compared with the heads
            piece(Slot::Arms, "D", [0, 0, 0, 0, 0, 0]),
        ]
        .into_iter()
        .collect();

        let dominated: Vec<&str> = find_dominated(&catalog).into_iter().map(Armor::name).collect();
        assert_eq!(dominated, ["B"]);
    }

    #[test]
    fn identical_stats_dominate_each_other() {
        let catalog: Catalog = [
            piece(Slot::Legs, "Left", [5, 5, 5, 5, 5, 5]),
            piece(Slot::Legs, "Right", [5, 5, 5, 5, 5, 5]),
        ]
        .into_iter()
        .collect();

        assert_eq!(find_dominated(&catalog).len(), 2);
    }

    #[test]
    fn unknown_suit_is_a_named_lookup_failure() {
        let pieces = [
            piece(Slot::Head, "H", [1; 6]),
            piece(Slot::Arms, "A", [1; 6]),
            piece(Slot::Body, "B", [1; 6]),
            piece(Slot::Legs, "L", [1; 6]),
        ];
        let suits = vec![NamedSuit::new("Current", pieces).unwrap()];

        assert_eq!(find_suit(&suits, "Current").unwrap().name(), "Current");
        assert_eq!(
            find_suit(&suits, "Raid"),
            Err(ArmoryError::UnknownSuit("Raid".to_string()))
        );
    }
}
