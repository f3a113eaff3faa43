//! # Desk Risk (L3: Portfolio Analytics)
//!
//! Portfolio-level risk analytics over analysed option positions.
//!
//! This crate provides:
//! - Linear greeks aggregation across positions (Rayon-parallel above a
//!   sequential cutoff)
//! - Historical-simulation Value-at-Risk and Expected Shortfall
//! - Deterministic stress scenarios via Taylor approximation
//! - A pluggable correlation estimator with historical and constant
//!   implementations
//! - A greedy delta-targeting portfolio optimizer under budget, vega,
//!   and theta constraints
//! - Position concentration reporting and multi-leg strategy builders
//!
//! ## Design Principles
//!
//! - **Pure evaluation**: every analysis is a function of its arguments;
//!   reports are built once and never mutated incrementally
//! - **Degrade, don't fail**: missing history yields zero VaR and no
//!   correlation matrix rather than an error
//!
//! ## Usage
//!
//! ```
//! use desk_risk::{PortfolioRiskAnalyzer, RiskConfig};
//!
//! let analyzer = PortfolioRiskAnalyzer::new(RiskConfig::default());
//! let report = analyzer.analyze(&[], 100.0, &[])?;
//!
//! // No positions and no history: everything degrades to zero
//! assert_eq!(report.value_at_risk, 0.0);
//! assert!(report.correlation.is_none());
//! # Ok::<(), desk_risk::RiskError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregation;
pub mod analyzer;
pub mod concentration;
pub mod correlation;
pub mod error;
pub mod optimizer;
pub mod position;
pub mod strategy;
pub mod stress;
pub mod var;

pub use analyzer::{
    PortfolioRisk, PortfolioRiskAnalyzer, RiskConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_LOOKBACK,
};
pub use concentration::ConcentrationReport;
pub use correlation::{
    ConstantCorrelation, CorrelationEstimator, CorrelationMatrix, HistoricalCorrelation,
};
pub use error::RiskError;
pub use optimizer::{Allocation, Candidate, OptimizerConstraints, PortfolioOptimizer};
pub use position::Position;
pub use strategy::{Strategy, StrategyMetrics};
pub use stress::StressScenario;
