//! # Desk Backtest (L3: Simulation)
//!
//! Signal-driven backtesting over historical bar series.
//!
//! This crate provides:
//! - A ledger state machine tracking cash, signed position, trades, and
//!   equity per bar
//! - A [`Signal`] trait evaluated once per bar against the closing-price
//!   history, blanket-implemented for closures
//! - Moving-average and RSI indicators plus ready-made
//!   [`MovingAverageCross`] and [`RsiReversion`] strategies
//! - Performance metrics: total return, annualized Sharpe ratio, max
//!   drawdown, and win rate
//!
//! ## Design Principles
//!
//! - **One ledger per run**: [`BacktestEngine::run`] consumes the engine,
//!   so run state can never be shared or reused
//! - **Reject, don't fail**: invalid or unaffordable trades are skipped
//!   with the book unchanged and logged at `debug` level
//!
//! ## Usage
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use desk_backtest::{BacktestConfig, BacktestEngine};
//! use desk_core::types::PriceBar;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let bars: Vec<PriceBar> = [100.0, 102.0, 101.0, 105.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &close)| {
//!         PriceBar::new(start + Duration::days(i as i64), close, close, close, close, 0.0)
//!     })
//!     .collect();
//!
//! // Buy two units on the first bar, then hold
//! let engine = BacktestEngine::new(BacktestConfig::default());
//! let result = engine.run(&bars, &mut |history: &[f64]| {
//!     if history.len() == 1 {
//!         2.0
//!     } else {
//!         0.0
//!     }
//! });
//!
//! assert_eq!(result.trades.len(), 1);
//! assert_eq!(result.equity_curve.len(), bars.len() + 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod signals;
pub mod trade;

pub use config::{BacktestConfig, DEFAULT_ANNUALIZATION_PERIODS, DEFAULT_INITIAL_CAPITAL};
pub use engine::{BacktestEngine, BacktestResult};
pub use error::BacktestError;
pub use metrics::PerformanceMetrics;
pub use signals::{MovingAverageCross, RsiReversion, Signal};
pub use trade::{PositionSnapshot, Trade, TradeSide};
