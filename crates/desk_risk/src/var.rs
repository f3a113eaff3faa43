//! Historical-simulation Value-at-Risk and Expected Shortfall.
//!
//! Both metrics work directly on an empirical return series without
//! distributional assumptions, which also makes them sensitive to
//! sample size and tail sparsity. Missing history degrades to zero rather than
//! erroring, so a fresh book without data still produces a report.

use desk_core::math::stats::{mean, percentile};

/// Simple percentage returns of a price series.
///
/// Element `i` is `(prices[i+1] - prices[i]) / prices[i]`; the result is
/// one shorter than the input, empty for fewer than two prices. Prices
/// are expected to be positive.
///
/// # Examples
/// ```
/// use desk_risk::var::returns_from_prices;
///
/// let returns = returns_from_prices(&[100.0, 110.0, 99.0]);
/// assert_eq!(returns.len(), 2);
/// assert!((returns[0] - 0.1).abs() < 1e-12);
/// assert!((returns[1] + 0.1).abs() < 1e-12);
/// ```
pub fn returns_from_prices(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Historical VaR at the given confidence level.
///
/// The empirical percentile of the trailing `lookback` returns at
/// `(1 - confidence)·100`, linearly interpolated. A 95% confidence level
/// reads the 5th percentile: the return not undercut in 95% of observed
/// periods. Returns 0 for an empty series.
///
/// The result is a (usually negative) return, not a currency amount.
pub fn historical_var(returns: &[f64], confidence: f64, lookback: usize) -> f64 {
    let window = trailing_window(returns, lookback);
    percentile(window, (1.0 - confidence) * 100.0).unwrap_or(0.0)
}

/// Expected Shortfall at the given confidence level.
///
/// Mean of the trailing-window returns at or below the VaR threshold,
/// evaluated on the same window VaR used. Returns 0 for an empty series.
pub fn expected_shortfall(returns: &[f64], confidence: f64, lookback: usize) -> f64 {
    let window = trailing_window(returns, lookback);
    if window.is_empty() {
        return 0.0;
    }

    let var = historical_var(returns, confidence, lookback);
    let tail: Vec<f64> = window.iter().copied().filter(|r| *r <= var).collect();
    mean(&tail).unwrap_or(0.0)
}

fn trailing_window(returns: &[f64], lookback: usize) -> &[f64] {
    &returns[returns.len().saturating_sub(lookback)..]
}
