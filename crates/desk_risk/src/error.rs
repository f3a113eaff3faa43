//! Error types for portfolio risk analytics.

use chrono::{DateTime, Utc};
use desk_core::types::OptionKind;
use thiserror::Error;

/// Errors raised when validating risk inputs.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskError {
    /// Spot price must be positive and finite
    #[error("Invalid spot: S = {spot}. Spot must be positive and finite.")]
    InvalidSpot {
        /// The offending spot value
        spot: f64,
    },

    /// Confidence level must lie strictly between 0 and 1
    #[error("Invalid confidence level: {confidence}. Must lie strictly between 0 and 1.")]
    InvalidConfidence {
        /// The offending confidence value
        confidence: f64,
    },

    /// Lookback window must cover at least one observation
    #[error("Invalid lookback: {lookback}. Window must cover at least one observation.")]
    InvalidLookback {
        /// The offending lookback value
        lookback: usize,
    },

    /// Optimizer budget must be positive and finite
    #[error("Invalid budget: {budget}. Budget must be positive and finite.")]
    InvalidBudget {
        /// The offending budget value
        budget: f64,
    },

    /// Strategy legs must share one expiry
    #[error("Mismatched leg expiries: {first} vs {second}")]
    MismatchedExpiries {
        /// Expiry of the first offending leg
        first: DateTime<Utc>,
        /// Expiry of the second offending leg
        second: DateTime<Utc>,
    },

    /// Strategy leg strikes must be strictly ordered
    #[error("Invalid strike order: {lower} must be strictly below {upper}")]
    InvalidStrikeOrder {
        /// The strike that should be lower
        lower: f64,
        /// The strike that should be higher
        upper: f64,
    },

    /// A strategy leg has the wrong option kind
    #[error("Expected a {expected} leg, found a {found}")]
    UnexpectedKind {
        /// The kind the strategy requires at this leg
        expected: OptionKind,
        /// The kind actually supplied
        found: OptionKind,
    },
}
