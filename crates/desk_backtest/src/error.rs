//! Backtest error types.

use thiserror::Error;

/// Errors raised while configuring a backtest.
///
/// Trade-level problems never surface here: invalid or unaffordable
/// trades are skipped with the book unchanged, observable only as an
/// absent trade record.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BacktestError {
    /// Initial capital was zero, negative, or non-finite.
    #[error("Invalid initial capital: {capital}. Capital must be positive and finite.")]
    InvalidCapital {
        /// The rejected capital amount.
        capital: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_value() {
        let error = BacktestError::InvalidCapital { capital: -5.0 };
        assert_eq!(
            error.to_string(),
            "Invalid initial capital: -5. Capital must be positive and finite."
        );
    }
}
