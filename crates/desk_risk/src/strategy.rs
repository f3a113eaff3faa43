//! Multi-leg option strategy builders.
//!
//! Each builder validates leg kinds, expiries, and strike ordering,
//! then assembles the legs as signed [`Position`]s together with the
//! strategy's payoff metrics (net cost, maximum profit and loss, and
//! break-even underlying prices at expiry).

use desk_core::types::{Greeks, OptionKind};
use desk_pricing::OptionAnalysis;

use crate::aggregation::portfolio_greeks;
use crate::error::RiskError;
use crate::position::Position;

/// Payoff profile of an assembled strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyMetrics {
    /// Net premium paid (negative for credit strategies).
    pub net_cost: f64,
    /// Best-case profit at expiry.
    pub max_profit: f64,
    /// Worst-case loss at expiry.
    pub max_loss: f64,
    /// Underlying prices at which the strategy breaks even at expiry.
    pub break_evens: Vec<f64>,
    /// Aggregate greeks across the legs.
    pub greeks: Greeks,
}

/// A named multi-leg position with its payoff metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    /// Strategy key, e.g. `"bull_call_spread"`.
    pub name: String,
    /// Signed legs in construction order.
    pub legs: Vec<Position>,
    /// Payoff metrics for the combined position.
    pub metrics: StrategyMetrics,
}

impl Strategy {
    /// Long the lower-strike call, short the upper-strike call.
    ///
    /// A debit strategy that profits when the underlying rises: loss is
    /// capped at the net premium, profit at the strike width less that
    /// premium.
    ///
    /// # Errors
    /// - `RiskError::UnexpectedKind` if either leg is not a call
    /// - `RiskError::MismatchedExpiries` if the legs expire on
    ///   different dates
    /// - `RiskError::InvalidStrikeOrder` unless the long strike is
    ///   strictly below the short strike
    pub fn bull_call_spread(
        lower: &OptionAnalysis,
        upper: &OptionAnalysis,
    ) -> Result<Self, RiskError> {
        require_kind(lower, OptionKind::Call)?;
        require_kind(upper, OptionKind::Call)?;
        require_same_expiry(lower, upper)?;
        require_ascending(lower, upper)?;

        let legs = vec![
            Position::from_analysis(lower, 1.0),
            Position::from_analysis(upper, -1.0),
        ];

        let net_cost = lower.contract.current_price() - upper.contract.current_price();
        let width = upper.contract.strike() - lower.contract.strike();

        Ok(Self {
            name: "bull_call_spread".to_string(),
            metrics: StrategyMetrics {
                net_cost,
                max_profit: width - net_cost,
                max_loss: net_cost,
                break_evens: vec![lower.contract.strike() + net_cost],
                greeks: portfolio_greeks(&legs),
            },
            legs,
        })
    }

    /// Long one call at each wing, short two at the body.
    ///
    /// Profits when the underlying pins the middle strike at expiry.
    /// Break-evens assume symmetric wings.
    ///
    /// # Errors
    /// - `RiskError::UnexpectedKind` if any leg is not a call
    /// - `RiskError::MismatchedExpiries` if the legs expire on
    ///   different dates
    /// - `RiskError::InvalidStrikeOrder` unless strikes are strictly
    ///   ascending
    pub fn long_butterfly(
        low: &OptionAnalysis,
        mid: &OptionAnalysis,
        high: &OptionAnalysis,
    ) -> Result<Self, RiskError> {
        for leg in [low, mid, high] {
            require_kind(leg, OptionKind::Call)?;
        }
        require_same_expiry(low, mid)?;
        require_same_expiry(mid, high)?;
        require_ascending(low, mid)?;
        require_ascending(mid, high)?;

        let legs = vec![
            Position::from_analysis(low, 1.0),
            Position::from_analysis(mid, -2.0),
            Position::from_analysis(high, 1.0),
        ];

        let net_cost = low.contract.current_price() + high.contract.current_price()
            - 2.0 * mid.contract.current_price();

        Ok(Self {
            name: "long_butterfly".to_string(),
            metrics: StrategyMetrics {
                net_cost,
                max_profit: (mid.contract.strike() - low.contract.strike()) - net_cost,
                max_loss: net_cost,
                break_evens: vec![
                    low.contract.strike() + net_cost,
                    high.contract.strike() - net_cost,
                ],
                greeks: portfolio_greeks(&legs),
            },
            legs,
        })
    }

    /// Short an inner put/call pair, long the outer wings.
    ///
    /// A credit strategy that profits when the underlying stays between
    /// the short strikes. The short put may sit at the same strike as
    /// the short call (an iron butterfly), but never above it.
    ///
    /// # Errors
    /// - `RiskError::UnexpectedKind` if the put/call slots hold the
    ///   wrong kinds
    /// - `RiskError::MismatchedExpiries` if any leg expires on a
    ///   different date
    /// - `RiskError::InvalidStrikeOrder` if strikes are not ordered
    ///   `put_low < put_high <= call_low < call_high`
    pub fn iron_condor(
        put_low: &OptionAnalysis,
        put_high: &OptionAnalysis,
        call_low: &OptionAnalysis,
        call_high: &OptionAnalysis,
    ) -> Result<Self, RiskError> {
        require_kind(put_low, OptionKind::Put)?;
        require_kind(put_high, OptionKind::Put)?;
        require_kind(call_low, OptionKind::Call)?;
        require_kind(call_high, OptionKind::Call)?;
        require_same_expiry(put_low, put_high)?;
        require_same_expiry(put_high, call_low)?;
        require_same_expiry(call_low, call_high)?;
        require_ascending(put_low, put_high)?;
        require_ascending(call_low, call_high)?;
        if put_high.contract.strike() > call_low.contract.strike() {
            return Err(RiskError::InvalidStrikeOrder {
                lower: put_high.contract.strike(),
                upper: call_low.contract.strike(),
            });
        }

        let legs = vec![
            Position::from_analysis(put_low, 1.0),
            Position::from_analysis(put_high, -1.0),
            Position::from_analysis(call_low, -1.0),
            Position::from_analysis(call_high, 1.0),
        ];

        let net_cost = put_low.contract.current_price() + call_high.contract.current_price()
            - put_high.contract.current_price()
            - call_low.contract.current_price();
        let credit = -net_cost;
        let put_width = put_high.contract.strike() - put_low.contract.strike();
        let call_width = call_high.contract.strike() - call_low.contract.strike();

        Ok(Self {
            name: "iron_condor".to_string(),
            metrics: StrategyMetrics {
                net_cost,
                max_profit: credit,
                max_loss: put_width.max(call_width) - credit,
                break_evens: vec![
                    put_high.contract.strike() - credit,
                    call_low.contract.strike() + credit,
                ],
                greeks: portfolio_greeks(&legs),
            },
            legs,
        })
    }
}

fn require_kind(analysis: &OptionAnalysis, expected: OptionKind) -> Result<(), RiskError> {
    let found = analysis.contract.kind();
    if found != expected {
        return Err(RiskError::UnexpectedKind { expected, found });
    }
    Ok(())
}

fn require_same_expiry(a: &OptionAnalysis, b: &OptionAnalysis) -> Result<(), RiskError> {
    if a.contract.expiry() != b.contract.expiry() {
        return Err(RiskError::MismatchedExpiries {
            first: a.contract.expiry(),
            second: b.contract.expiry(),
        });
    }
    Ok(())
}

fn require_ascending(lower: &OptionAnalysis, upper: &OptionAnalysis) -> Result<(), RiskError> {
    if lower.contract.strike() >= upper.contract.strike() {
        return Err(RiskError::InvalidStrikeOrder {
            lower: lower.contract.strike(),
            upper: upper.contract.strike(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{DateTime, Duration, Utc};
    use desk_core::types::OptionContract;
    use desk_pricing::ImpliedVol;

    fn leg(
        contract_id: &str,
        kind: OptionKind,
        strike: f64,
        price: f64,
        expiry: DateTime<Utc>,
    ) -> OptionAnalysis {
        leg_with_greeks(contract_id, kind, strike, price, expiry, Greeks::default())
    }

    fn leg_with_greeks(
        contract_id: &str,
        kind: OptionKind,
        strike: f64,
        price: f64,
        expiry: DateTime<Utc>,
        greeks: Greeks,
    ) -> OptionAnalysis {
        let contract =
            OptionContract::new(contract_id, "BTC", strike, expiry, kind, price).unwrap();
        OptionAnalysis {
            contract,
            implied_volatility: ImpliedVol {
                volatility: 0.5,
                iterations: 0,
                converged: true,
            },
            theoretical_price: price,
            intrinsic_value: 0.0,
            extrinsic_value: price,
            greeks,
        }
    }

    // ==========================================================
    // Bull Call Spread Tests
    // ==========================================================

    #[test]
    fn test_bull_call_spread_metrics() {
        let expiry = Utc::now() + Duration::days(30);
        let lower = leg("C100", OptionKind::Call, 100.0, 10.0, expiry);
        let upper = leg("C110", OptionKind::Call, 110.0, 6.0, expiry);

        let strategy = Strategy::bull_call_spread(&lower, &upper).unwrap();

        assert_eq!(strategy.name, "bull_call_spread");
        assert_eq!(strategy.legs.len(), 2);
        assert_eq!(strategy.legs[0].quantity, 1.0);
        assert_eq!(strategy.legs[1].quantity, -1.0);
        assert_relative_eq!(strategy.metrics.net_cost, 4.0, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_profit, 6.0, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_loss, 4.0, epsilon = 1e-12);
        assert_eq!(strategy.metrics.break_evens, vec![104.0]);
    }

    #[test]
    fn test_bull_call_spread_aggregates_greeks() {
        let expiry = Utc::now() + Duration::days(30);
        let lower = leg_with_greeks(
            "C100",
            OptionKind::Call,
            100.0,
            10.0,
            expiry,
            Greeks::new(0.6, 0.02, -5.0, 30.0),
        );
        let upper = leg_with_greeks(
            "C110",
            OptionKind::Call,
            110.0,
            6.0,
            expiry,
            Greeks::new(0.3, 0.015, -4.0, 25.0),
        );

        let strategy = Strategy::bull_call_spread(&lower, &upper).unwrap();

        assert_relative_eq!(strategy.metrics.greeks.delta, 0.3, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.greeks.vega, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bull_call_spread_rejects_puts() {
        let expiry = Utc::now() + Duration::days(30);
        let put = leg("P100", OptionKind::Put, 100.0, 10.0, expiry);
        let call = leg("C110", OptionKind::Call, 110.0, 6.0, expiry);

        assert!(matches!(
            Strategy::bull_call_spread(&put, &call),
            Err(RiskError::UnexpectedKind {
                expected: OptionKind::Call,
                found: OptionKind::Put,
            })
        ));
    }

    #[test]
    fn test_bull_call_spread_rejects_mismatched_expiries() {
        let lower = leg(
            "C100",
            OptionKind::Call,
            100.0,
            10.0,
            Utc::now() + Duration::days(30),
        );
        let upper = leg(
            "C110",
            OptionKind::Call,
            110.0,
            6.0,
            Utc::now() + Duration::days(60),
        );

        assert!(matches!(
            Strategy::bull_call_spread(&lower, &upper),
            Err(RiskError::MismatchedExpiries { .. })
        ));
    }

    #[test]
    fn test_bull_call_spread_rejects_unordered_strikes() {
        let expiry = Utc::now() + Duration::days(30);
        let lower = leg("C110", OptionKind::Call, 110.0, 6.0, expiry);
        let upper = leg("C100", OptionKind::Call, 100.0, 10.0, expiry);

        match Strategy::bull_call_spread(&lower, &upper) {
            Err(RiskError::InvalidStrikeOrder { lower, upper }) => {
                assert_eq!(lower, 110.0);
                assert_eq!(upper, 100.0);
            }
            other => panic!("expected strike-order error, got {other:?}"),
        }

        // Equal strikes are no spread at all
        let same = leg("C100B", OptionKind::Call, 100.0, 10.0, expiry);
        assert!(Strategy::bull_call_spread(&upper, &same).is_err());
    }

    // ==========================================================
    // Long Butterfly Tests
    // ==========================================================

    #[test]
    fn test_long_butterfly_metrics() {
        let expiry = Utc::now() + Duration::days(30);
        let low = leg("C90", OptionKind::Call, 90.0, 14.0, expiry);
        let mid = leg("C100", OptionKind::Call, 100.0, 8.0, expiry);
        let high = leg("C110", OptionKind::Call, 110.0, 4.0, expiry);

        let strategy = Strategy::long_butterfly(&low, &mid, &high).unwrap();

        assert_eq!(strategy.name, "long_butterfly");
        let quantities: Vec<f64> = strategy.legs.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![1.0, -2.0, 1.0]);
        assert_relative_eq!(strategy.metrics.net_cost, 2.0, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_profit, 8.0, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_loss, 2.0, epsilon = 1e-12);
        assert_eq!(strategy.metrics.break_evens, vec![92.0, 108.0]);
    }

    #[test]
    fn test_long_butterfly_rejects_unordered_strikes() {
        let expiry = Utc::now() + Duration::days(30);
        let low = leg("C90", OptionKind::Call, 90.0, 14.0, expiry);
        let mid = leg("C90B", OptionKind::Call, 90.0, 14.0, expiry);
        let high = leg("C110", OptionKind::Call, 110.0, 4.0, expiry);

        assert!(matches!(
            Strategy::long_butterfly(&low, &mid, &high),
            Err(RiskError::InvalidStrikeOrder { .. })
        ));
    }

    // ==========================================================
    // Iron Condor Tests
    // ==========================================================

    #[test]
    fn test_iron_condor_metrics() {
        let expiry = Utc::now() + Duration::days(30);
        let put_low = leg("P80", OptionKind::Put, 80.0, 2.0, expiry);
        let put_high = leg("P90", OptionKind::Put, 90.0, 4.0, expiry);
        let call_low = leg("C110", OptionKind::Call, 110.0, 5.0, expiry);
        let call_high = leg("C120", OptionKind::Call, 120.0, 2.5, expiry);

        let strategy = Strategy::iron_condor(&put_low, &put_high, &call_low, &call_high).unwrap();

        assert_eq!(strategy.name, "iron_condor");
        let quantities: Vec<f64> = strategy.legs.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![1.0, -1.0, -1.0, 1.0]);
        // Credit received: 4 + 5 - 2 - 2.5 = 4.5
        assert_relative_eq!(strategy.metrics.net_cost, -4.5, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_profit, 4.5, epsilon = 1e-12);
        assert_relative_eq!(strategy.metrics.max_loss, 5.5, epsilon = 1e-12);
        assert_eq!(strategy.metrics.break_evens, vec![85.5, 114.5]);
    }

    #[test]
    fn test_iron_condor_allows_touching_short_strikes() {
        let expiry = Utc::now() + Duration::days(30);
        let put_low = leg("P80", OptionKind::Put, 80.0, 2.0, expiry);
        let put_high = leg("P100", OptionKind::Put, 100.0, 6.0, expiry);
        let call_low = leg("C100", OptionKind::Call, 100.0, 6.0, expiry);
        let call_high = leg("C120", OptionKind::Call, 120.0, 2.0, expiry);

        // Shorts at the same strike make an iron butterfly
        assert!(Strategy::iron_condor(&put_low, &put_high, &call_low, &call_high).is_ok());
    }

    #[test]
    fn test_iron_condor_rejects_overlapping_bodies() {
        let expiry = Utc::now() + Duration::days(30);
        let put_low = leg("P80", OptionKind::Put, 80.0, 2.0, expiry);
        let put_high = leg("P110", OptionKind::Put, 110.0, 8.0, expiry);
        let call_low = leg("C100", OptionKind::Call, 100.0, 6.0, expiry);
        let call_high = leg("C120", OptionKind::Call, 120.0, 2.0, expiry);

        match Strategy::iron_condor(&put_low, &put_high, &call_low, &call_high) {
            Err(RiskError::InvalidStrikeOrder { lower, upper }) => {
                assert_eq!(lower, 110.0);
                assert_eq!(upper, 100.0);
            }
            other => panic!("expected strike-order error, got {other:?}"),
        }
    }

    #[test]
    fn test_iron_condor_rejects_wrong_kinds() {
        let expiry = Utc::now() + Duration::days(30);
        let call_in_put_slot = leg("C80", OptionKind::Call, 80.0, 2.0, expiry);
        let put_high = leg("P90", OptionKind::Put, 90.0, 4.0, expiry);
        let call_low = leg("C110", OptionKind::Call, 110.0, 5.0, expiry);
        let call_high = leg("C120", OptionKind::Call, 120.0, 2.5, expiry);

        assert!(matches!(
            Strategy::iron_condor(&call_in_put_slot, &put_high, &call_low, &call_high),
            Err(RiskError::UnexpectedKind {
                expected: OptionKind::Put,
                found: OptionKind::Call,
            })
        ));
    }
}
