//! Stat vectors.
//!
//! Every armor piece and every suit carries the same six stats. Vectors are fixed
//! arrays indexed by [`Stat`], so a vector can never be missing a key and arithmetic
//! between two vectors is always total.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};

use crate::error::ArmoryError;

/// The six armor stats, in display order.
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
pub enum Stat {
    #[strum(to_string = "MOB", serialize = "mobility")]
    Mob = 0,
    #[strum(to_string = "RES", serialize = "resilience")]
    Res = 1,
    #[strum(to_string = "REC", serialize = "recovery")]
    Rec = 2,
    #[strum(to_string = "DIS", serialize = "discipline")]
    Dis = 3,
    #[strum(to_string = "INT", serialize = "intellect")]
    Int = 4,
    #[strum(to_string = "STR", serialize = "strength")]
    Str = 5,
}

impl Stat {
    /// Total number of stats.
    pub const COUNT: usize = 6;

    /// Returns all stats in display order.
    pub const fn all() -> [Stat; Self::COUNT] {
        [
            Stat::Mob,
            Stat::Res,
            Stat::Rec,
            Stat::Dis,
            Stat::Int,
            Stat::Str,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Integer stat vector: piece values, suit totals and minimums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stats {
    values: [i32; Stat::COUNT],
}

impl Stats {
    /// All stats zero.
    pub const ZERO: Self = Self {
        values: [0; Stat::COUNT],
    };

    pub const fn new(values: [i32; Stat::COUNT]) -> Self {
        Self { values }
    }

    /// Largest accepted piece stat or minimum. Suit totals and their
    /// differences stay well inside `i32` at this bound.
    pub const MAX_VALUE: i32 = 10_000;

    /// Builds a vector whose values all lie in `0..=MAX_VALUE`.
    pub fn bounded(values: [i32; Stat::COUNT]) -> Result<Self, ArmoryError> {
        for stat in Stat::all() {
            let value = values[stat.as_index()];
            if value < 0 {
                return Err(ArmoryError::NegativeStat { stat, value });
            }
            if value > Self::MAX_VALUE {
                return Err(ArmoryError::StatTooLarge {
                    stat,
                    value,
                    max: Self::MAX_VALUE,
                });
            }
        }
        Ok(Self { values })
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.as_index()]
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.as_index()] = value;
    }

    /// Returns a copy with one stat replaced.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    #[inline]
    pub fn values(&self) -> &[i32; Stat::COUNT] {
        &self.values
    }

    pub fn total(&self) -> i32 {
        self.values.iter().sum()
    }

    pub fn weighted_sum(&self, weights: &Weights) -> f64 {
        Stat::all()
            .into_iter()
            .map(|stat| f64::from(self.get(stat)) * weights.get(stat))
            .sum()
    }

    /// True if every stat is at least the matching stat of `other`.
    ///
    /// This is a partial order: two vectors may each fail to dominate the other.
    pub fn dominates(&self, other: &Stats) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Per-stat difference `self - other`.
    pub fn diff(&self, other: &Stats) -> Stats {
        *self - *other
    }

    /// Fixed-width row of the six values followed by the total.
    pub fn numbers(&self) -> String {
        let [mob, res, rec, dis, int, strength] = self.values;
        format!(
            "{mob:3} {res:3} {rec:3} {dis:3} {int:3} {strength:3} = {:4}",
            self.total()
        )
    }
}

impl From<[i32; Stat::COUNT]> for Stats {
    fn from(values: [i32; Stat::COUNT]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[i32]> for Stats {
    type Error = ArmoryError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let values: [i32; Stat::COUNT] =
            values
                .try_into()
                .map_err(|_| ArmoryError::MalformedVector {
                    expected: Stat::COUNT,
                    found: values.len(),
                })?;
        Ok(Self::new(values))
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(mut self, rhs: Stats) -> Stats {
        self += rhs;
        self
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        for (mine, theirs) in self.values.iter_mut().zip(rhs.values) {
            *mine += theirs;
        }
    }
}

impl Sub for Stats {
    type Output = Stats;

    fn sub(mut self, rhs: Stats) -> Stats {
        for (mine, theirs) in self.values.iter_mut().zip(rhs.values) {
            *mine -= theirs;
        }
        self
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Stats> for Stats {
    fn sum<I: Iterator<Item = &'a Stats>>(iter: I) -> Stats {
        iter.copied().sum()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numbers())
    }
}

/// Relative importance of each stat when ranking suits.
///
/// Defaults to 1.0 everywhere, which ranks suits by their plain total.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Weights {
    values: [f64; Stat::COUNT],
}

impl Default for Weights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Weights {
    /// All weights 1.0.
    pub const fn uniform() -> Self {
        Self {
            values: [1.0; Stat::COUNT],
        }
    }

    /// Builds weights, rejecting negative and non-finite values.
    pub fn new(values: [f64; Stat::COUNT]) -> Result<Self, ArmoryError> {
        let mut weights = Self::uniform();
        for stat in Stat::all() {
            weights.set(stat, values[stat.as_index()])?;
        }
        Ok(weights)
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.as_index()]
    }

    pub fn set(&mut self, stat: Stat, value: f64) -> Result<(), ArmoryError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ArmoryError::InvalidWeight { stat, value });
        }
        self.values[stat.as_index()] = value;
        Ok(())
    }

    #[inline]
    pub fn values(&self) -> &[f64; Stat::COUNT] {
        &self.values
    }

    /// Renders the ranking expression, e.g. `MOB*0.8 + RES + REC`.
    ///
    /// Stats weighted 1.0 appear bare, zero weights are left out.
    pub fn describe(&self) -> String {
        let terms: Vec<String> = Stat::all()
            .into_iter()
            .filter_map(|stat| {
                let weight = self.get(stat);
                if weight == 0.0 {
                    None
                } else if weight == 1.0 {
                    Some(stat.to_string())
                } else if (weight * 10.0).fract() == 0.0 {
                    Some(format!("{stat}*{weight:.1}"))
                } else {
                    Some(format!("{stat}*{weight}"))
                }
            })
            .collect();
        terms.join(" + ")
    }
}
