//! Top-level portfolio risk analysis.
//!
//! [`PortfolioRiskAnalyzer`] runs the full pipeline over a book of
//! analysed positions: greeks aggregation, historical VaR and expected
//! shortfall, stress scenarios, correlation estimation, and
//! concentration, collected into one [`PortfolioRisk`] report.

use std::collections::BTreeMap;

use desk_core::types::Greeks;

use crate::aggregation::portfolio_greeks;
use crate::concentration::ConcentrationReport;
use crate::correlation::{ConstantCorrelation, CorrelationEstimator, CorrelationMatrix};
use crate::error::RiskError;
use crate::position::Position;
use crate::stress::run_stress_tests;
use crate::var::{expected_shortfall, historical_var, returns_from_prices};

/// Confidence level used when none is configured.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Trailing return window used when none is configured.
pub const DEFAULT_LOOKBACK: usize = 252;

/// VaR confidence level and lookback window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskConfig {
    /// Confidence level for VaR and expected shortfall, in (0, 1).
    pub confidence_level: f64,
    /// Number of trailing returns the tail statistics look at.
    pub lookback: usize,
}

impl Default for RiskConfig {
    /// 95% confidence over one trading year of daily returns.
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            lookback: DEFAULT_LOOKBACK,
        }
    }
}

impl RiskConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// - `RiskError::InvalidConfidence` unless the confidence level is
    ///   strictly between 0 and 1
    /// - `RiskError::InvalidLookback` if the lookback window is zero
    pub fn new(confidence_level: f64, lookback: usize) -> Result<Self, RiskError> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(RiskError::InvalidConfidence {
                confidence: confidence_level,
            });
        }
        if lookback == 0 {
            return Err(RiskError::InvalidLookback { lookback });
        }

        Ok(Self {
            confidence_level,
            lookback,
        })
    }
}

/// Complete risk report for one book.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioRisk {
    /// Historical-simulation VaR of the underlying return series.
    pub value_at_risk: f64,
    /// Mean return in the tail at or below VaR.
    pub expected_shortfall: f64,
    /// Aggregate greeks across the book.
    pub greeks: Greeks,
    /// Portfolio value change per stress scenario, keyed by scenario.
    pub stress_tests: BTreeMap<String, f64>,
    /// Pairwise correlation across positions; `None` for books of
    /// fewer than two positions or without a usable estimate.
    pub correlation: Option<CorrelationMatrix>,
    /// Call/put and per-expiry exposure fractions.
    pub concentration: ConcentrationReport,
}

/// Runs the full risk pipeline over a book.
///
/// Defaults to [`ConstantCorrelation`] for the correlation step;
/// plug in a [`HistoricalCorrelation`](crate::HistoricalCorrelation)
/// via [`with_estimator`](Self::with_estimator) when return series are
/// available.
pub struct PortfolioRiskAnalyzer {
    config: RiskConfig,
    estimator: Box<dyn CorrelationEstimator + Send + Sync>,
}

impl PortfolioRiskAnalyzer {
    /// Creates an analyzer with the given tail-statistics config.
    pub fn new(config: RiskConfig) -> Self {
        Self {
            config,
            estimator: Box::new(ConstantCorrelation::default()),
        }
    }

    /// Swaps in a correlation estimation strategy.
    #[must_use]
    pub fn with_estimator(
        mut self,
        estimator: impl CorrelationEstimator + Send + Sync + 'static,
    ) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    /// Returns the configured tail statistics parameters.
    #[inline]
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Analyses the book against the given spot and underlying price
    /// history.
    ///
    /// An empty book is not an error: every statistic degrades to zero
    /// (or `None` for correlation). Likewise an empty or too-short
    /// price history yields zero VaR and expected shortfall.
    ///
    /// # Errors
    /// Returns `RiskError::InvalidSpot` if the spot price is
    /// non-positive or non-finite.
    pub fn analyze(
        &self,
        positions: &[Position],
        spot: f64,
        historical_prices: &[f64],
    ) -> Result<PortfolioRisk, RiskError> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(RiskError::InvalidSpot { spot });
        }

        let returns = returns_from_prices(historical_prices);
        let confidence = self.config.confidence_level;
        let lookback = self.config.lookback;

        Ok(PortfolioRisk {
            value_at_risk: historical_var(&returns, confidence, lookback),
            expected_shortfall: expected_shortfall(&returns, confidence, lookback),
            greeks: portfolio_greeks(positions),
            stress_tests: run_stress_tests(positions, spot),
            correlation: self.estimator.estimate(positions),
            concentration: ConcentrationReport::from_positions(positions),
        })
    }
}

impl Default for PortfolioRiskAnalyzer {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
