//! Ranking suits against the user's criteria.
//!
//! Ranking is filter → sort → truncate → label:
//!
//! 1. keep suits whose totals dominate the minimums,
//! 2. stable-sort them by weighted sum, highest first,
//! 3. keep at most `limit` of them,
//! 4. number the survivors from 1.
//!
//! The sort is stable, so suits with equal scores stay in generation order.

use crate::error::ArmoryError;
use crate::stats::{Stats, Weights};
use crate::suit::Suit;

/// What the user is looking for.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    pub weights: Weights,
    /// Floor every accepted suit must meet or exceed.
    pub minimums: Stats,
    /// Maximum number of results.
    pub limit: usize,
}

impl Criteria {
    pub const DEFAULT_LIMIT: usize = 5;
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            minimums: Stats::ZERO,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Converts a user-supplied limit, rejecting negative values.
pub fn validate_limit(limit: i64) -> Result<usize, ArmoryError> {
    usize::try_from(limit).map_err(|_| ArmoryError::InvalidLimit(limit))
}

/// A suit that survived ranking, with its position and score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedSuit<'a> {
    /// Position in the result list, starting at 1.
    pub rank: usize,
    pub score: f64,
    pub suit: Suit<'a>,
}

impl RankedSuit<'_> {
    pub fn label(&self) -> String {
        format!("Choice #{}", self.rank)
    }
}

/// Outcome of [`rank`].
#[derive(Clone, Debug, Default)]
pub struct Ranking<'a> {
    /// Final results, best first.
    pub results: Vec<RankedSuit<'a>>,
    /// Number of suits examined.
    pub considered: usize,
    /// Number of suits that met the minimums, before truncation.
    pub acceptable: usize,
}

impl<'a> Ranking<'a> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn suits(&self) -> impl Iterator<Item = Suit<'a>> + '_ {
        self.results.iter().map(|ranked| ranked.suit)
    }
}

/// Ranks `suits` against `criteria`.
pub fn rank<'a, I>(suits: I, criteria: &Criteria) -> Ranking<'a>
where
    I: IntoIterator<Item = Suit<'a>>,
{
    let mut considered = 0;
    let mut scored: Vec<(f64, Suit<'a>)> = suits
        .into_iter()
        .inspect(|_| considered += 1)
        .filter_map(|suit| {
            let stats = suit.stats();
            stats
                .dominates(&criteria.minimums)
                .then(|| (stats.weighted_sum(&criteria.weights), suit))
        })
        .collect();

    let acceptable = scored.len();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.truncate(criteria.limit);

    let results = scored
        .into_iter()
        .enumerate()
        .map(|(index, (score, suit))| RankedSuit {
            rank: index + 1,
            score,
            suit,
        })
        .collect();

    Ranking {
        results,
        considered,
        acceptable,
    }
}
