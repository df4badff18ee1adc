//! The set of known armor pieces, partitioned by slot.

use crate::armor::{Armor, Slot};

/// All known pieces, de-duplicated and grouped by slot.
///
/// Pieces keep the order in which they were inserted, both within their slot and
/// across the whole catalog. The catalog is filled once by a loader and only read
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    by_slot: [Vec<Armor>; Slot::COUNT],
    order: Vec<(Slot, usize)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a piece. Returns `false` if an identical piece is already present.
    pub fn insert(&mut self, piece: Armor) -> bool {
        let slot = piece.slot();
        let list = &mut self.by_slot[slot.as_index()];
        if list.contains(&piece) {
            return false;
        }
        self.order.push((slot, list.len()));
        list.push(piece);
        true
    }

    pub fn contains(&self, piece: &Armor) -> bool {
        self.slot(piece.slot()).contains(piece)
    }

    /// Pieces of one slot, in insertion order.
    #[inline]
    pub fn slot(&self, slot: Slot) -> &[Armor] {
        &self.by_slot[slot.as_index()]
    }

    pub fn get(&self, slot: Slot, index: usize) -> Option<&Armor> {
        self.slot(slot).get(index)
    }

    pub fn count(&self, slot: Slot) -> usize {
        self.slot(slot).len()
    }

    /// Total number of pieces.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All pieces in insertion order.
    pub fn pieces(&self) -> impl Iterator<Item = &Armor> + '_ {
        self.order
            .iter()
            .map(|&(slot, index)| &self.by_slot[slot.as_index()][index])
    }
}

impl FromIterator<Armor> for Catalog {
    fn from_iter<I: IntoIterator<Item = Armor>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Armor> for Catalog {
    fn extend<I: IntoIterator<Item = Armor>>(&mut self, iter: I) {
        for piece in iter {
            self.insert(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armor::Rarity;
    use crate::stats::Stats;

    fn piece(slot: Slot, name: &str, value: i32) -> Armor {
        Armor::new(slot, Rarity::Legend, name, Stats::new([value; 6]))
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(piece(Slot::Head, "Cap", 2)));
        assert!(!catalog.insert(piece(Slot::Head, "Cap", 2)));
        // Same name, different stats: a different piece
        assert!(catalog.insert(piece(Slot::Head, "Cap", 3)));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.count(Slot::Head), 2);
        assert_eq!(catalog.count(Slot::Legs), 0);
    }

    #[test]
    fn keeps_insertion_order_across_slots() {
        let catalog: Catalog = [
            piece(Slot::Legs, "Greaves", 1),
            piece(Slot::Head, "Helm", 1),
            piece(Slot::Legs, "Pants", 1),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = catalog.pieces().map(Armor::name).collect();
        assert_eq!(names, ["Greaves", "Helm", "Pants"]);

        let legs: Vec<&str> = catalog.slot(Slot::Legs).iter().map(Armor::name).collect();
        assert_eq!(legs, ["Greaves", "Pants"]);
        assert_eq!(catalog.get(Slot::Legs, 1).map(Armor::name), Some("Pants"));
        assert!(catalog.get(Slot::Arms, 0).is_none());
    }
}
