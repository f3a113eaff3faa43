//! # Desk Pricing (L2: Business Logic)
//!
//! Black-Scholes valuation, greeks, and implied volatility for European
//! options.
//!
//! This crate provides:
//! - Closed-form Black-Scholes pricing for calls and puts
//! - First-order greeks (delta, theta, vega) and gamma
//! - A Newton-Raphson implied volatility solver with best-effort
//!   termination diagnostics
//! - A contract analyzer combining price, greeks, and implied volatility
//!
//! ## Design Principles
//!
//! - **Validated constructors**: market inputs are checked once at
//!   construction, so the hot pricing paths stay branch-light
//! - **Best-effort solving**: the implied volatility solver reports its
//!   convergence state instead of failing on hard-to-invert quotes
//!
//! ## Usage
//!
//! ```
//! use desk_pricing::black_scholes::BlackScholes;
//! use desk_core::types::OptionKind;
//!
//! let model = BlackScholes::new(29_000.0, 0.05, 0.5)?;
//! let price = model.price(OptionKind::Call, 30_000.0, 30.0 / 365.0);
//! assert!(price > 0.0);
//! # Ok::<(), desk_pricing::PricingError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod black_scholes;
pub mod error;
pub mod implied;

pub use analysis::{OptionAnalysis, OptionAnalyzer, DEFAULT_RISK_FREE_RATE};
pub use black_scholes::{BlackScholes, VOL_FLOOR};
pub use error::PricingError;
pub use implied::{ImpliedVol, ImpliedVolSolver, SolverConfig};
