//! Value types shared across the workspace.
//!
//! Everything here is a plain data object: contracts, price bars, and the
//! Greeks sensitivity bundle. Construction validates what the pricing layer
//! relies on (positive strikes, non-negative prices); behaviour lives in the
//! layers above.

pub mod bar;
pub mod contract;
pub mod error;
pub mod greeks;

pub use bar::{closes, PriceBar};
pub use contract::{OptionContract, OptionKind, SECONDS_PER_YEAR};
pub use error::ContractError;
pub use greeks::{GreekKind, Greeks};
