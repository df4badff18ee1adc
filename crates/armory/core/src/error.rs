//! Input errors surfaced by armory-core.
//!
//! Every variant describes bad input caught at the boundary of the pipeline:
//! malformed vectors, negative or oversized values, an invalid limit or an unknown baseline.
//! Nothing here is transient, so callers report the error and stop.

use crate::armor::Slot;
use crate::stats::Stat;

/// Errors raised while validating input for the loadout pipeline.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArmoryError {
    /// A stat vector was built from the wrong number of values.
    #[error("expected {expected} stat values, found {found}")]
    MalformedVector { expected: usize, found: usize },

    /// Stat values and minimums must be non-negative.
    #[error("negative value for {stat}: {value}")]
    NegativeStat { stat: Stat, value: i32 },

    /// Stat values and minimums are capped so suit sums cannot overflow.
    #[error("value for {stat} too large: {value} (max {max})")]
    StatTooLarge { stat: Stat, value: i32, max: i32 },

    /// Weights must be finite and non-negative.
    #[error("invalid weight for {stat}: {value}")]
    InvalidWeight { stat: Stat, value: f64 },

    /// Result limits are counts and cannot be negative.
    #[error("invalid limit: {0}")]
    InvalidLimit(i64),

    /// The requested comparison suit was never declared.
    #[error("unknown suit: {0}")]
    UnknownSuit(String),

    /// A declared suit must list HEAD, ARMS, BODY and LEGS in that order.
    #[error("expected {expected}, found {found}")]
    WrongSlot { expected: Slot, found: Slot },
}

impl ArmoryError {
    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedVector { .. } => "malformed_vector",
            Self::NegativeStat { .. } => "negative_stat",
            Self::StatTooLarge { .. } => "stat_too_large",
            Self::InvalidWeight { .. } => "invalid_weight",
            Self::InvalidLimit(_) => "invalid_limit",
            Self::UnknownSuit(_) => "unknown_suit",
            Self::WrongSlot { .. } => "wrong_slot",
        }
    }
}
