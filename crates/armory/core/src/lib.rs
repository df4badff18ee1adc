//! Loadout search over a catalog of armor pieces.
//!
//! `armory-core` holds the pure part of the tool: stat vectors, armor pieces, the
//! catalog, the suit generator, the ranker and the reports built on top of ranked
//! results. Parsing and presentation live in `armory-content` and `armory-cli`;
//! everything here is deterministic and free of I/O.
//!
//! The pipeline runs once per invocation:
//!
//! ```text
//! Catalog ──► SuitGenerator ──► rank() ──► compare() / find_unused()
//!    └──────────────────────────────────► find_dominated()
//! ```
pub mod armor;
pub mod catalog;
pub mod error;
pub mod generate;
pub mod rank;
pub mod report;
pub mod stats;
pub mod suit;

pub use armor::{Armor, Rarity, Slot};
pub use catalog::Catalog;
pub use error::ArmoryError;
pub use generate::{SuitGenerator, all_suits, count_legal};
pub use rank::{Criteria, RankedSuit, Ranking, rank, validate_limit};
pub use report::{Comparison, compare, find_dominated, find_suit, find_unused};
pub use stats::{Stat, Stats, Weights};
pub use suit::{NamedSuit, Suit};
