//! The backtest state machine.
//!
//! One engine owns one ledger: [`BacktestEngine::run`] consumes the
//! engine, so cash, position, and equity history can never be shared
//! between runs. Concurrent backtests use independent instances.

use desk_core::types::{closes, PriceBar};
use tracing::{debug, info};

use crate::config::BacktestConfig;
use crate::metrics::PerformanceMetrics;
use crate::signals::Signal;
use crate::trade::{PositionSnapshot, Trade, TradeSide};

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktestResult {
    /// Executed trades, in execution order.
    pub trades: Vec<Trade>,
    /// Book state after each executed trade.
    pub snapshots: Vec<PositionSnapshot>,
    /// Equity after every bar, seeded with the initial capital, so its
    /// length is always `bars + 1`.
    pub equity_curve: Vec<f64>,
    /// Equity change per bar, one entry per input bar.
    pub step_pnl: Vec<f64>,
    /// Summary performance statistics.
    pub metrics: PerformanceMetrics,
}

/// Signal-driven ledger over a bar series.
///
/// Trades execute at the bar close. A buy is accepted only when the
/// book is flat or short and leaves it long exactly the executed
/// quantity; a sell is accepted only when the book is flat or long,
/// is capped at the current position, and flips the book short the
/// executed quantity. Either side is rejected, with the book left
/// untouched, when no positive quantity is executable or the trade
/// value exceeds the cash on hand.
#[derive(Debug)]
pub struct BacktestEngine {
    config: BacktestConfig,
    cash: f64,
    position: f64,
    trades: Vec<Trade>,
    snapshots: Vec<PositionSnapshot>,
    equity_curve: Vec<f64>,
}

impl BacktestEngine {
    /// Creates an engine with a fresh ledger.
    pub fn new(config: BacktestConfig) -> Self {
        Self {
            config,
            cash: config.initial_capital,
            position: 0.0,
            trades: Vec::new(),
            snapshots: Vec::new(),
            equity_curve: vec![config.initial_capital],
        }
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &BacktestConfig {
        &self.config
    }

    /// Replays the bar series through the signal and closes the ledger.
    ///
    /// The signal sees the closing-price history up to and including
    /// the current bar. Equity is recorded after every bar whether or
    /// not a trade occurred.
    pub fn run<S>(mut self, bars: &[PriceBar], signal: &mut S) -> BacktestResult
    where
        S: Signal + ?Sized,
    {
        let closing_prices = closes(bars);

        for (bar, &price) in closing_prices.iter().enumerate() {
            let desired = signal.evaluate(&closing_prices[..=bar]);
            if desired > 0.0 {
                self.try_buy(bar, price, desired);
            } else if desired < 0.0 {
                self.try_sell(bar, price, -desired);
            }

            self.equity_curve.push(self.cash + self.position * price);
        }

        let step_pnl = self
            .equity_curve
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();
        let metrics = PerformanceMetrics::compute(
            &self.equity_curve,
            &self.trades,
            self.config.initial_capital,
            self.config.annualization_periods,
        );

        info!(
            bars = bars.len(),
            trades = self.trades.len(),
            total_return = metrics.total_return,
            "Backtest complete"
        );

        BacktestResult {
            trades: self.trades,
            snapshots: self.snapshots,
            equity_curve: self.equity_curve,
            step_pnl,
            metrics,
        }
    }

    fn try_buy(&mut self, bar: usize, price: f64, desired: f64) {
        if self.position > 0.0 {
            debug!(bar, "Buy rejected: book is already long");
            return;
        }

        let quantity = desired.min(self.cash / price);
        if !self.validate(bar, quantity, price) {
            return;
        }

        self.cash -= quantity * price;
        self.position = quantity;
        self.record(bar, TradeSide::Buy, quantity, price);
    }

    fn try_sell(&mut self, bar: usize, price: f64, desired: f64) {
        if self.position < 0.0 {
            debug!(bar, "Sell rejected: book is already short");
            return;
        }

        let quantity = desired.min(self.position);
        if !self.validate(bar, quantity, price) {
            return;
        }

        self.cash += quantity * price;
        self.position = -quantity;
        self.record(bar, TradeSide::Sell, quantity, price);
    }

    // One rule for both sides: a positive quantity whose value fits in cash
    fn validate(&self, bar: usize, quantity: f64, price: f64) -> bool {
        if quantity <= 0.0 {
            debug!(bar, quantity, "Trade rejected: no executable quantity");
            return false;
        }
        if quantity * price > self.cash {
            debug!(bar, quantity, price, "Trade rejected: insufficient cash");
            return false;
        }
        true
    }

    fn record(&mut self, bar: usize, side: TradeSide, quantity: f64, price: f64) {
        debug!(bar, ?side, quantity, price, "Trade executed");
        self.trades.push(Trade {
            bar,
            side,
            quantity,
            price,
        });
        self.snapshots.push(PositionSnapshot {
            bar,
            position: self.position,
            cash: self.cash,
        });
    }
}

impl Default for BacktestEngine {
    fn default() -> Self {
        Self::new(BacktestConfig::default())
    }
}
