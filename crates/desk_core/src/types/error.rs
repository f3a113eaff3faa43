//! Contract validation errors.

use thiserror::Error;

/// Errors raised while constructing or refreshing an [`OptionContract`].
///
/// Each variant carries the offending value so callers can report the
/// rejected input verbatim.
///
/// [`OptionContract`]: super::contract::OptionContract
///
/// # Examples
/// ```
/// use desk_core::types::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -100.0 };
/// assert!(err.to_string().contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractError {
    /// Strike price is non-positive or non-finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Observed market price is negative or non-finite.
    #[error("Invalid market price: {price}")]
    InvalidPrice {
        /// The rejected price value
        price: f64,
    },
}
