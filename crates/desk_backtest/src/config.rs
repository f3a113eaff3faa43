//! Backtest run configuration.

use crate::error::BacktestError;

/// Starting cash when none is configured.
pub const DEFAULT_INITIAL_CAPITAL: f64 = 10_000.0;

/// Periods per year used to annualize the Sharpe ratio.
pub const DEFAULT_ANNUALIZATION_PERIODS: usize = 252;

/// Capital and annualization settings for one backtest run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktestConfig {
    /// Cash the book starts with.
    pub initial_capital: f64,
    /// Bars per year, used to annualize per-bar return statistics.
    pub annualization_periods: usize,
}

impl Default for BacktestConfig {
    /// 10 000 starting capital over daily bars.
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            annualization_periods: DEFAULT_ANNUALIZATION_PERIODS,
        }
    }
}

impl BacktestConfig {
    /// Creates a configuration with the given starting capital.
    ///
    /// # Errors
    /// Returns `BacktestError::InvalidCapital` if the capital is
    /// non-positive or non-finite.
    pub fn new(initial_capital: f64) -> Result<Self, BacktestError> {
        if initial_capital <= 0.0 || !initial_capital.is_finite() {
            return Err(BacktestError::InvalidCapital {
                capital: initial_capital,
            });
        }

        Ok(Self {
            initial_capital,
            annualization_periods: DEFAULT_ANNUALIZATION_PERIODS,
        })
    }

    /// Overrides the bars-per-year used for annualization.
    #[must_use]
    pub fn with_annualization_periods(mut self, periods: usize) -> Self {
        self.annualization_periods = periods;
        self
    }
}
