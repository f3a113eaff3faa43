//! Deterministic stress scenarios.
//!
//! Each scenario shocks spot and/or volatility and values the portfolio
//! change with a Taylor expansion of the greeks:
//!
//! ```text
//! ΔV = Δ·ΔS + ½·Γ·ΔS² + vega·Δσ
//! ```
//!
//! This is an approximation valid for small-to-moderate shocks, not a
//! full re-pricing: higher-order terms and cross effects are dropped.

use std::collections::BTreeMap;

use crate::position::Position;

/// A named deterministic market shock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StressScenario {
    /// Spot falls 20%
    SpotDown20Pct,
    /// Spot rises 20%
    SpotUp20Pct,
    /// Implied volatility doubles
    VolDouble,
}

impl StressScenario {
    /// Every scenario in report order.
    pub const ALL: [StressScenario; 3] = [
        StressScenario::SpotDown20Pct,
        StressScenario::SpotUp20Pct,
        StressScenario::VolDouble,
    ];

    /// Stable report key for this scenario.
    pub fn key(&self) -> &'static str {
        match self {
            StressScenario::SpotDown20Pct => "down_20_percent",
            StressScenario::SpotUp20Pct => "up_20_percent",
            StressScenario::VolDouble => "double_volatility",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            StressScenario::SpotDown20Pct => "Underlying price declines 20%",
            StressScenario::SpotUp20Pct => "Underlying price rises 20%",
            StressScenario::VolDouble => "Implied volatility regime doubles",
        }
    }

    /// Shock sizes (ΔS, Δσ) for one position under this scenario.
    ///
    /// Doubling volatility adds the position's own implied volatility on
    /// top of itself, so Δσ is that volatility.
    fn shifts(&self, spot: f64, position: &Position) -> (f64, f64) {
        match self {
            StressScenario::SpotDown20Pct => (-0.2 * spot, 0.0),
            StressScenario::SpotUp20Pct => (0.2 * spot, 0.0),
            StressScenario::VolDouble => (0.0, position.implied_volatility),
        }
    }
}

/// Taylor-approximated value change of one position under a scenario.
pub fn scenario_pnl(position: &Position, spot: f64, scenario: StressScenario) -> f64 {
    let (d_spot, d_vol) = scenario.shifts(spot, position);
    let greeks = position.weighted_greeks();

    greeks.delta * d_spot + 0.5 * greeks.gamma * d_spot * d_spot + greeks.vega * d_vol
}

/// Runs every stress scenario over the book.
///
/// Returns portfolio-level value changes keyed by scenario name. The
/// map always carries all scenarios; an empty book reports zeros.
///
/// # Examples
/// ```
/// use desk_risk::stress::run_stress_tests;
///
/// let results = run_stress_tests(&[], 100.0);
/// assert_eq!(results["down_20_percent"], 0.0);
/// assert_eq!(results.len(), 3);
/// ```
pub fn run_stress_tests(positions: &[Position], spot: f64) -> BTreeMap<String, f64> {
    StressScenario::ALL
        .iter()
        .map(|scenario| {
            let pnl: f64 = positions
                .iter()
                .map(|position| scenario_pnl(position, spot, *scenario))
                .sum();
            (scenario.key().to_string(), pnl)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, Utc};
    use desk_core::types::{Greeks, OptionContract, OptionKind};

    fn call_position(quantity: f64) -> Position {
        let contract = OptionContract::new(
            "TEST",
            "BTC",
            100.0,
            Utc::now() + Duration::days(365),
            OptionKind::Call,
            10.45,
        )
        .unwrap();
        // ATM call greeks at S=100, σ=0.2, T=1
        Position::new(
            contract,
            quantity,
            Greeks::new(0.6368, 0.018762, -6.414, 37.524),
            0.2,
        )
    }

    // ==========================================================
    // Scenario Metadata Tests
    // ==========================================================

    #[test]
    fn test_scenario_keys_are_stable() {
        assert_eq!(StressScenario::SpotDown20Pct.key(), "down_20_percent");
        assert_eq!(StressScenario::SpotUp20Pct.key(), "up_20_percent");
        assert_eq!(StressScenario::VolDouble.key(), "double_volatility");
    }

    #[test]
    fn test_all_scenarios_have_descriptions() {
        for scenario in StressScenario::ALL {
            assert!(!scenario.description().is_empty());
        }
    }

    // ==========================================================
    // Per-Position P/L Tests
    // ==========================================================

    #[test]
    fn test_long_call_loses_on_spot_drop() {
        let position = call_position(1.0);
        let pnl = scenario_pnl(&position, 100.0, StressScenario::SpotDown20Pct);

        // Δ·(-20) + ½·Γ·400 = -12.736 + 3.752
        assert_relative_eq!(pnl, -12.736 + 0.5 * 0.018762 * 400.0, epsilon = 1e-9);
        assert!(pnl < 0.0);
    }

    #[test]
    fn test_long_call_gains_on_spot_rise_and_vol_doubling() {
        let position = call_position(1.0);

        let up = scenario_pnl(&position, 100.0, StressScenario::SpotUp20Pct);
        assert!(up > 0.0);

        let vol = scenario_pnl(&position, 100.0, StressScenario::VolDouble);
        assert_relative_eq!(vol, 37.524 * 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_short_position_flips_sign() {
        let long = scenario_pnl(&call_position(2.0), 100.0, StressScenario::VolDouble);
        let short = scenario_pnl(&call_position(-2.0), 100.0, StressScenario::VolDouble);
        assert_relative_eq!(long, -short, epsilon = 1e-9);
    }

    // ==========================================================
    // Portfolio Report Tests
    // ==========================================================

    #[test]
    fn test_report_carries_every_scenario() {
        let results = run_stress_tests(&[call_position(1.0)], 100.0);

        assert_eq!(results.len(), 3);
        for scenario in StressScenario::ALL {
            assert!(results.contains_key(scenario.key()));
        }
    }

    #[test]
    fn test_report_sums_across_positions() {
        let single = run_stress_tests(&[call_position(1.0)], 100.0);
        let double = run_stress_tests(&[call_position(1.0), call_position(1.0)], 100.0);

        for scenario in StressScenario::ALL {
            assert_relative_eq!(
                double[scenario.key()],
                2.0 * single[scenario.key()],
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_empty_book_reports_zeros() {
        let results = run_stress_tests(&[], 100.0);
        for value in results.values() {
            assert_eq!(*value, 0.0);
        }
    }
}
