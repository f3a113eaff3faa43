//! Trading signals and price indicators.
//!
//! A [`Signal`] maps the closing-price history seen so far to a signed
//! desired trade size. The trait is blanket-implemented for closures,
//! so ad-hoc rules can be passed straight to the engine; the
//! [`MovingAverageCross`] and [`RsiReversion`] strategies cover the two
//! standard cases.

use desk_core::math::stats::mean;

/// RSI level below which [`RsiReversion`] buys.
pub const DEFAULT_OVERSOLD: f64 = 30.0;

/// RSI level above which [`RsiReversion`] sells.
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;

/// A trading rule evaluated once per bar.
///
/// `history` is the closing-price series up to and including the
/// current bar, oldest first. The return value is the desired trade
/// size: positive to buy, negative to sell, zero to hold.
pub trait Signal {
    /// Produces the desired signed trade size for the current bar.
    fn evaluate(&mut self, history: &[f64]) -> f64;
}

impl<F> Signal for F
where
    F: FnMut(&[f64]) -> f64,
{
    fn evaluate(&mut self, history: &[f64]) -> f64 {
        self(history)
    }
}

/// Simple moving average of the trailing `window` prices.
///
/// Returns `None` until the window is filled, or for a zero window.
pub fn moving_average(prices: &[f64], window: usize) -> Option<f64> {
    if window == 0 || prices.len() < window {
        return None;
    }
    mean(&prices[prices.len() - window..])
}

/// Relative Strength Index over the trailing `period` price changes.
///
/// `RSI = 100 - 100/(1 + RS)` with `RS` the ratio of average gain to
/// average loss over the window. A window with no losses reads 100, a
/// perfectly flat one reads 50. Returns `None` until `period + 1`
/// prices are available, or for a zero period.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in prices[prices.len() - period - 1..].windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    if losses == 0.0 {
        // The averaging period cancels out of RS, so sums suffice
        return Some(if gains == 0.0 { 50.0 } else { 100.0 });
    }

    let rs = gains / losses;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Trend-following rule: buy above the moving average, sell below it.
///
/// Holds while the window is unfilled or the close sits exactly on the
/// average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverageCross {
    window: usize,
    trade_size: f64,
}

impl MovingAverageCross {
    /// Creates a cross strategy over the given window.
    pub fn new(window: usize, trade_size: f64) -> Self {
        Self { window, trade_size }
    }
}

impl Signal for MovingAverageCross {
    fn evaluate(&mut self, history: &[f64]) -> f64 {
        match (moving_average(history, self.window), history.last()) {
            (Some(average), Some(&close)) if close > average => self.trade_size,
            (Some(average), Some(&close)) if close < average => -self.trade_size,
            _ => 0.0,
        }
    }
}

/// Mean-reversion rule: buy oversold, sell overbought.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiReversion {
    period: usize,
    trade_size: f64,
    oversold: f64,
    overbought: f64,
}

impl RsiReversion {
    /// Creates a reversion strategy with the standard 30/70 thresholds.
    pub fn new(period: usize, trade_size: f64) -> Self {
        Self {
            period,
            trade_size,
            oversold: DEFAULT_OVERSOLD,
            overbought: DEFAULT_OVERBOUGHT,
        }
    }

    /// Overrides the oversold/overbought thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, oversold: f64, overbought: f64) -> Self {
        self.oversold = oversold;
        self.overbought = overbought;
        self
    }
}

impl Signal for RsiReversion {
    fn evaluate(&mut self, history: &[f64]) -> f64 {
        match rsi(history, self.period) {
            Some(value) if value < self.oversold => self.trade_size,
            Some(value) if value > self.overbought => -self.trade_size,
            _ => 0.0,
        }
    }
}
