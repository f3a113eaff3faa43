//! Trade records and post-trade book snapshots.

/// Direction of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeSide {
    /// Bought the underlying.
    Buy,
    /// Sold the underlying.
    Sell,
}

/// One executed trade.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    /// Index of the bar the trade executed on.
    pub bar: usize,
    /// Buy or sell.
    pub side: TradeSide,
    /// Executed quantity, always positive.
    pub quantity: f64,
    /// Execution price (the bar's close).
    pub price: f64,
}

impl Trade {
    /// Traded notional, `quantity * price`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }

    /// Signed cash flow: negative for buys, positive for sells.
    #[inline]
    pub fn cash_flow(&self) -> f64 {
        match self.side {
            TradeSide::Buy => -self.value(),
            TradeSide::Sell => self.value(),
        }
    }
}

/// Book state captured immediately after an executed trade.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSnapshot {
    /// Index of the bar the trade executed on.
    pub bar: usize,
    /// Signed position after the trade.
    pub position: f64,
    /// Cash after the trade.
    pub cash: f64,
}
