//! OHLCV price bar.

use chrono::{DateTime, Utc};

/// One bar of market data.
///
/// Bars are plain records; an ordered oldest-to-newest slice of them is the
/// input to the backtest engine, and [`closes`] extracts the series the
/// indicator helpers consume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceBar {
    /// Bar timestamp (open time).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// High of the bar.
    pub high: f64,
    /// Low of the bar.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume over the bar.
    pub volume: f64,
}

impl PriceBar {
    /// Creates a bar from its components.
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Extracts the closing prices of a bar slice, oldest first.
pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|bar| bar.close).collect()
}
