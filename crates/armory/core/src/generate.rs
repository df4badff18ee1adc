//! Suit generation.
//!
//! Walks the Cartesian product head × arms × body × legs of a catalog and yields
//! every legal suit. The walk is lazy: callers that filter or count never hold the
//! full product in memory.

use crate::armor::Slot;
use crate::catalog::Catalog;
use crate::suit::Suit;

/// Iterator over the legal suits of a catalog.
///
/// Order is nested-loop order over the catalog's per-slot order, head outermost and
/// legs innermost. Candidates with more than one exotic piece are skipped. If any
/// slot is empty the iterator yields nothing.
#[derive(Clone, Debug)]
pub struct SuitGenerator<'a> {
    catalog: &'a Catalog,
    cursor: [usize; Slot::COUNT],
    done: bool,
}

impl<'a> SuitGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let done = Slot::all().into_iter().any(|slot| catalog.count(slot) == 0);
        Self {
            catalog,
            cursor: [0; Slot::COUNT],
            done,
        }
    }

    /// Size of the raw product, legal or not.
    pub fn candidates(&self) -> usize {
        Slot::all()
            .into_iter()
            .map(|slot| self.catalog.count(slot))
            .product()
    }

    fn current(&self) -> Suit<'a> {
        let catalog = self.catalog;
        let piece = |slot: Slot| &catalog.slot(slot)[self.cursor[slot.as_index()]];
        Suit::from_slots(
            piece(Slot::Head),
            piece(Slot::Arms),
            piece(Slot::Body),
            piece(Slot::Legs),
        )
    }

    // Odometer step, legs fastest.
    fn advance(&mut self) {
        for slot in Slot::all().into_iter().rev() {
            let index = slot.as_index();
            self.cursor[index] += 1;
            if self.cursor[index] < self.catalog.count(slot) {
                return;
            }
            self.cursor[index] = 0;
        }
        self.done = true;
    }
}

impl<'a> Iterator for SuitGenerator<'a> {
    type Item = Suit<'a>;

    fn next(&mut self) -> Option<Suit<'a>> {
        while !self.done {
            let suit = self.current();
            self.advance();
            if suit.is_legal() {
                return Some(suit);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.candidates()))
        }
    }
}

/// Materializes every legal suit of the catalog.
pub fn all_suits(catalog: &Catalog) -> Vec<Suit<'_>> {
    SuitGenerator::new(catalog).collect()
}

/// Number of legal suits, without materializing them.
pub fn count_legal(catalog: &Catalog) -> usize {
    SuitGenerator::new(catalog).count()
}
