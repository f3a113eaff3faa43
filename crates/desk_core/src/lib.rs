//! # desk_core: Foundation Layer for the Optionsdesk Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! desk_core is the bottom layer of the workspace, providing:
//! - Contract and market value types: `OptionContract`, `OptionKind`,
//!   `PriceBar` (`types`)
//! - The `Greeks` sensitivity value type with its enumerable field list
//!   (`types::greeks`)
//! - Error types: `ContractError` (`types::error`)
//! - Standard normal distribution functions (`math::distributions`)
//! - Descriptive statistics used by the risk and backtest layers
//!   (`math::stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other desk_* crates, with minimal external
//! dependencies:
//! - num-traits: traits for generic numerical computation
//! - chrono: expiry and bar timestamps
//! - thiserror: error derives
//! - serde: serialisation support (optional, default on)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use desk_core::math::distributions::norm_cdf;
//! use desk_core::types::{OptionContract, OptionKind};
//!
//! // A call contract expiring in 30 days
//! let expiry = Utc::now() + Duration::days(30);
//! let contract = OptionContract::new(
//!     "BTC-30D-30000-C",
//!     "BTC",
//!     30_000.0,
//!     expiry,
//!     OptionKind::Call,
//!     1_250.0,
//! )
//! .unwrap();
//! assert!(contract.time_to_expiry(Utc::now()) > 0.0);
//!
//! // Standard normal CDF
//! let p = norm_cdf(0.0_f64);
//! # assert!((p - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation for all value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
