//! Portfolio positions over analysed contracts.

use desk_core::types::{Greeks, OptionContract};
use desk_pricing::OptionAnalysis;

/// One booked position: a contract, a signed quantity, and the per-unit
/// valuation figures the risk layer needs.
///
/// Positive quantity is long, negative short. `greeks` and
/// `implied_volatility` are per unit of contract; quantity weighting
/// happens at aggregation time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// The held contract
    pub contract: OptionContract,
    /// Signed quantity (long > 0, short < 0)
    pub quantity: f64,
    /// Per-unit greeks at the position's implied volatility
    pub greeks: Greeks,
    /// Per-unit implied volatility backing the greeks
    pub implied_volatility: f64,
}

impl Position {
    /// Creates a position from its parts.
    pub fn new(
        contract: OptionContract,
        quantity: f64,
        greeks: Greeks,
        implied_volatility: f64,
    ) -> Self {
        Self {
            contract,
            quantity,
            greeks,
            implied_volatility,
        }
    }

    /// Books a quantity of an analysed contract.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use desk_core::types::{OptionContract, OptionKind};
    /// use desk_pricing::OptionAnalyzer;
    /// use desk_risk::Position;
    ///
    /// let now = Utc::now();
    /// let contract = OptionContract::new(
    ///     "C100",
    ///     "TEST",
    ///     100.0,
    ///     now + Duration::days(30),
    ///     OptionKind::Call,
    ///     4.0,
    /// )?;
    /// let analysis = OptionAnalyzer::default().analyze(&contract, 100.0, now)?;
    ///
    /// let position = Position::from_analysis(&analysis, -2.0);
    /// assert_eq!(position.quantity, -2.0);
    /// assert_eq!(position.greeks, analysis.greeks);
    /// # Ok::<(), desk_pricing::PricingError>(())
    /// ```
    pub fn from_analysis(analysis: &OptionAnalysis, quantity: f64) -> Self {
        Self {
            contract: analysis.contract.clone(),
            quantity,
            greeks: analysis.greeks,
            implied_volatility: analysis.implied_volatility.volatility,
        }
    }

    /// Signed market value: quantity times the contract's current price.
    #[inline]
    pub fn market_value(&self) -> f64 {
        self.quantity * self.contract.current_price()
    }

    /// Quantity-weighted greeks contribution of this position.
    #[inline]
    pub fn weighted_greeks(&self) -> Greeks {
        self.greeks.scale(self.quantity)
    }
}
