//! Option contract value type.
//!
//! This module provides the `OptionContract` record consumed by the pricing
//! and risk layers, with validation on construction and a derived
//! time-to-expiry in year units.

use chrono::{DateTime, Utc};

use super::error::ContractError;

/// Seconds in a 365-day year, the denominator for time-to-expiry.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Option kind: call or put.
///
/// # Examples
/// ```
/// use desk_core::types::OptionKind;
///
/// assert!(OptionKind::Call.is_call());
/// assert!(!OptionKind::Put.is_call());
/// assert_eq!(OptionKind::Put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns true for calls.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// A listed option contract.
///
/// Immutable once constructed, except for the observed market price which
/// may be refreshed via [`OptionContract::update_price`]. Volume and open
/// interest are informational metadata and default to zero.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use desk_core::types::{OptionContract, OptionKind};
///
/// let expiry = Utc::now() + Duration::days(30);
/// let contract = OptionContract::new(
///     "BTC-30D-30000-C",
///     "BTC",
///     30_000.0,
///     expiry,
///     OptionKind::Call,
///     1_250.0,
/// )
/// .unwrap()
/// .with_volume(152.0)
/// .with_open_interest(1_040.0);
///
/// assert_eq!(contract.strike(), 30_000.0);
/// assert_eq!(contract.underlying(), "BTC");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    contract_id: String,
    underlying: String,
    strike: f64,
    expiry: DateTime<Utc>,
    kind: OptionKind,
    current_price: f64,
    volume: f64,
    open_interest: f64,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `contract_id` - Exchange identifier for the contract
    /// * `underlying` - Identifier of the underlying asset
    /// * `strike` - Strike price (must be positive and finite)
    /// * `expiry` - Expiry timestamp
    /// * `kind` - Call or put
    /// * `current_price` - Observed market price (must be non-negative)
    ///
    /// # Errors
    /// - `ContractError::InvalidStrike` if the strike is non-positive or
    ///   non-finite
    /// - `ContractError::InvalidPrice` if the price is negative or non-finite
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use desk_core::types::{OptionContract, OptionKind};
    ///
    /// let expiry = Utc::now() + Duration::days(7);
    /// assert!(
    ///     OptionContract::new("X", "BTC", -1.0, expiry, OptionKind::Put, 0.0).is_err()
    /// );
    /// ```
    pub fn new(
        contract_id: impl Into<String>,
        underlying: impl Into<String>,
        strike: f64,
        expiry: DateTime<Utc>,
        kind: OptionKind,
        current_price: f64,
    ) -> Result<Self, ContractError> {
        if strike <= 0.0 || !strike.is_finite() {
            return Err(ContractError::InvalidStrike { strike });
        }

        if current_price < 0.0 || !current_price.is_finite() {
            return Err(ContractError::InvalidPrice {
                price: current_price,
            });
        }

        Ok(Self {
            contract_id: contract_id.into(),
            underlying: underlying.into(),
            strike,
            expiry,
            kind,
            current_price,
            volume: 0.0,
            open_interest: 0.0,
        })
    }

    /// Sets the traded volume metadata.
    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the open interest metadata.
    #[must_use]
    pub fn with_open_interest(mut self, open_interest: f64) -> Self {
        self.open_interest = open_interest;
        self
    }

    /// Returns the contract identifier.
    #[inline]
    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    /// Returns the underlying identifier.
    #[inline]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiry timestamp.
    #[inline]
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the last observed market price.
    #[inline]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Returns the traded volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the open interest.
    #[inline]
    pub fn open_interest(&self) -> f64 {
        self.open_interest
    }

    /// Refreshes the observed market price.
    ///
    /// # Errors
    /// `ContractError::InvalidPrice` if the price is negative or non-finite;
    /// the stored price is left unchanged.
    pub fn update_price(&mut self, price: f64) -> Result<(), ContractError> {
        if price < 0.0 || !price.is_finite() {
            return Err(ContractError::InvalidPrice { price });
        }
        self.current_price = price;
        Ok(())
    }

    /// Time to expiry in years, measured from `now`.
    ///
    /// Computed as whole seconds to expiry over [`SECONDS_PER_YEAR`].
    /// Non-positive once the contract has expired; pricing callers must
    /// reject that case before evaluating any formula.
    #[inline]
    pub fn time_to_expiry(&self, now: DateTime<Utc>) -> f64 {
        (self.expiry - now).num_seconds() as f64 / SECONDS_PER_YEAR
    }

    /// Whether the contract has expired as of `now`.
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.time_to_expiry(now) <= 0.0
    }
}
