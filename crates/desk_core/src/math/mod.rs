//! Math utilities shared across the workspace.
//!
//! - `distributions`: standard normal CDF/PDF, generic over `Float`, used by
//!   the analytical pricing layer
//! - `stats`: descriptive statistics (mean, sample deviation, percentile,
//!   Pearson correlation) used by the risk and backtest layers

pub mod distributions;
pub mod stats;
