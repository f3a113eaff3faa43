//! Error types for pricing and implied volatility solving.

use desk_core::types::ContractError;
use thiserror::Error;

/// Errors raised when validating pricing inputs.
///
/// Construction-time checks keep the pricing paths themselves free of
/// input validation. Each variant carries the offending value so callers
/// can report exactly what was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Spot price must be positive and finite
    #[error("Invalid spot: S = {spot}. Spot must be positive and finite.")]
    InvalidSpot {
        /// The offending spot value
        spot: f64,
    },

    /// Strike price must be positive and finite
    #[error("Invalid strike: K = {strike}. Strike must be positive and finite.")]
    InvalidStrike {
        /// The offending strike value
        strike: f64,
    },

    /// Time to expiry must be positive and finite
    #[error("Invalid expiry: T = {expiry}. Time to expiry must be positive and finite.")]
    InvalidExpiry {
        /// The offending expiry value (in years)
        expiry: f64,
    },

    /// Target price handed to the implied volatility solver must be
    /// positive and finite
    #[error("Invalid target price: {price}. Target price must be positive and finite.")]
    InvalidTargetPrice {
        /// The offending price value
        price: f64,
    },

    /// The contract has already expired and cannot be analysed
    #[error("Contract '{contract_id}' has expired and cannot be analysed")]
    ExpiredContract {
        /// Identifier of the expired contract
        contract_id: String,
    },

    /// Contract-level validation failure from the core layer
    #[error(transparent)]
    Contract(#[from] ContractError),
}
