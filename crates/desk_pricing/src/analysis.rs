//! Per-contract analysis pipeline.
//!
//! Ties the implied volatility solver and the Black-Scholes model
//! together: one call turns an [`OptionContract`] plus a spot price into
//! an [`OptionAnalysis`] record carrying implied volatility, theoretical
//! price, intrinsic/extrinsic split, and the full greeks block.

use chrono::{DateTime, Utc};

use desk_core::types::{Greeks, OptionContract, OptionKind};

use crate::black_scholes::BlackScholes;
use crate::error::PricingError;
use crate::implied::{ImpliedVol, ImpliedVolSolver, SolverConfig};

/// Risk-free rate used when none is supplied.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// Full valuation snapshot of a single contract.
///
/// Produced by [`OptionAnalyzer::analyze`] and read-only downstream: the
/// risk layer consumes these records without recomputing anything.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionAnalysis {
    /// The analysed contract
    pub contract: OptionContract,
    /// Implied volatility solve result (volatility plus diagnostics)
    pub implied_volatility: ImpliedVol,
    /// Model price at the implied volatility
    pub theoretical_price: f64,
    /// Exercise value at the current spot
    pub intrinsic_value: f64,
    /// Market price minus intrinsic value (negative when the quote sits
    /// below exercise value)
    pub extrinsic_value: f64,
    /// Greeks at the implied volatility
    pub greeks: Greeks,
}

/// Analyses contracts against a spot price.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use desk_core::types::{OptionContract, OptionKind};
/// use desk_pricing::analysis::OptionAnalyzer;
///
/// let now = Utc::now();
/// let contract = OptionContract::new(
///     "BTC-30D-30000-C",
///     "BTC",
///     30_000.0,
///     now + Duration::days(30),
///     OptionKind::Call,
///     1_280.0,
/// )?;
///
/// let analyzer = OptionAnalyzer::default();
/// let analysis = analyzer.analyze(&contract, 29_000.0, now)?;
///
/// assert!(analysis.implied_volatility.volatility > 0.0);
/// assert!(analysis.greeks.delta > 0.0);
/// # Ok::<(), desk_pricing::PricingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptionAnalyzer {
    /// Risk-free interest rate (r)
    rate: f64,
    /// Settings handed to the volatility solver
    solver_config: SolverConfig,
}

impl Default for OptionAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_RISK_FREE_RATE)
    }
}

impl OptionAnalyzer {
    /// Creates an analyzer with the given risk-free rate and default
    /// solver settings.
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            solver_config: SolverConfig::default(),
        }
    }

    /// Replaces the volatility solver configuration.
    #[must_use]
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Analyses one contract against the current spot.
    ///
    /// Solves implied volatility from the contract's observed market
    /// price, then prices and computes greeks at that volatility.
    ///
    /// # Arguments
    /// * `contract` - The contract to analyse
    /// * `spot` - Current underlying price
    /// * `now` - Valuation timestamp (drives time-to-expiry)
    ///
    /// # Errors
    /// - `PricingError::ExpiredContract` if the contract's expiry is at
    ///   or before `now`
    /// - `PricingError::InvalidTargetPrice` if the contract's market
    ///   price is zero (nothing to invert)
    /// - `PricingError::InvalidSpot` if spot is non-positive or
    ///   non-finite
    pub fn analyze(
        &self,
        contract: &OptionContract,
        spot: f64,
        now: DateTime<Utc>,
    ) -> Result<OptionAnalysis, PricingError> {
        let expiry = contract.time_to_expiry(now);
        if expiry <= 0.0 {
            return Err(PricingError::ExpiredContract {
                contract_id: contract.contract_id().to_string(),
            });
        }

        let solver = ImpliedVolSolver::new(self.rate).with_config(self.solver_config);
        let implied = solver.solve(
            contract.current_price(),
            spot,
            contract.strike(),
            expiry,
            contract.kind(),
        )?;

        let model = BlackScholes::new(spot, self.rate, implied.volatility)?;
        let theoretical_price = model.price(contract.kind(), contract.strike(), expiry);
        let greeks = model.greeks(contract.kind(), contract.strike(), expiry);

        let intrinsic_value = match contract.kind() {
            OptionKind::Call => (spot - contract.strike()).max(0.0),
            OptionKind::Put => (contract.strike() - spot).max(0.0),
        };
        let extrinsic_value = contract.current_price() - intrinsic_value;

        Ok(OptionAnalysis {
            contract: contract.clone(),
            implied_volatility: implied,
            theoretical_price,
            intrinsic_value,
            extrinsic_value,
            greeks,
        })
    }
}
