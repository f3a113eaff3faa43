//! Greedy portfolio construction against a delta target.
//!
//! The optimizer builds an allocation one contract at a time: each
//! round it adds the candidate that brings portfolio delta closest to
//! the target while respecting the budget and optional vega/theta
//! constraints, and stops as soon as no candidate improves the gap.
//!
//! Greedy selection is not globally optimal, but it is deterministic,
//! runs in `O(rounds · candidates)`, and never leaves the feasible
//! region, which is what the desk needs for intraday rebalancing.

use desk_core::types::{Greeks, OptionContract};
use desk_pricing::OptionAnalysis;

use crate::error::RiskError;

/// Rounds allowed before the optimizer gives up on closing the gap.
pub const DEFAULT_MAX_ROUNDS: usize = 1000;

/// Improvements smaller than this are treated as ties.
const GAP_EPSILON: f64 = 1e-12;

/// A contract eligible for allocation, with its per-unit greeks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The contract to (possibly) allocate.
    pub contract: OptionContract,
    /// Greeks for one unit of the contract.
    pub greeks: Greeks,
}

impl Candidate {
    /// Builds a candidate from a completed option analysis.
    pub fn from_analysis(analysis: &OptionAnalysis) -> Self {
        Self {
            contract: analysis.contract.clone(),
            greeks: analysis.greeks,
        }
    }
}

/// Allocation targets and limits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConstraints {
    /// Portfolio delta the allocation steers towards.
    pub target_delta: f64,
    /// Maximum total premium spend.
    pub budget: f64,
    /// Cap on absolute portfolio vega. Unlimited by default.
    pub max_vega: f64,
    /// Floor on portfolio theta; candidates that would push decay
    /// below this are rejected. Unlimited by default.
    pub min_theta: f64,
}

impl OptimizerConstraints {
    /// Creates constraints with a delta target and premium budget.
    ///
    /// # Errors
    /// Returns `RiskError::InvalidBudget` if the budget is non-positive
    /// or non-finite.
    pub fn new(target_delta: f64, budget: f64) -> Result<Self, RiskError> {
        if budget <= 0.0 || !budget.is_finite() {
            return Err(RiskError::InvalidBudget { budget });
        }

        Ok(Self {
            target_delta,
            budget,
            max_vega: f64::INFINITY,
            min_theta: f64::NEG_INFINITY,
        })
    }

    /// Caps absolute portfolio vega.
    #[must_use]
    pub fn with_max_vega(mut self, max_vega: f64) -> Self {
        self.max_vega = max_vega;
        self
    }

    /// Floors portfolio theta (limits total time decay).
    #[must_use]
    pub fn with_min_theta(mut self, min_theta: f64) -> Self {
        self.min_theta = min_theta;
        self
    }
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Units allocated per candidate, parallel to the input slice.
    pub quantities: Vec<u64>,
    /// Total premium spent.
    pub total_cost: f64,
    /// Aggregate greeks of the allocation.
    pub portfolio_greeks: Greeks,
    /// Remaining distance to the delta target.
    pub delta_gap: f64,
    /// Number of units added before stopping.
    pub rounds: usize,
}

/// Greedy delta-targeting allocator.
#[derive(Debug, Clone)]
pub struct PortfolioOptimizer {
    constraints: OptimizerConstraints,
    max_rounds: usize,
}

impl PortfolioOptimizer {
    /// Creates an optimizer with the default round cap.
    pub fn new(constraints: OptimizerConstraints) -> Self {
        Self {
            constraints,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Overrides the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Returns the configured constraints.
    #[inline]
    pub fn constraints(&self) -> &OptimizerConstraints {
        &self.constraints
    }

    /// Builds an allocation over the candidate set.
    ///
    /// Each round adds one unit of the feasible candidate that most
    /// reduces `|target_delta - portfolio_delta|`; ties go to the
    /// lowest cost per unit of absolute delta. Stops when no candidate
    /// strictly improves the gap, or after `max_rounds` units.
    pub fn optimize(&self, candidates: &[Candidate]) -> Allocation {
        let mut quantities = vec![0u64; candidates.len()];
        let mut total_cost = 0.0;
        let mut greeks = Greeks::default();
        let mut gap = (self.constraints.target_delta - greeks.delta).abs();
        let mut rounds = 0;

        while rounds < self.max_rounds {
            let mut best: Option<(usize, f64)> = None;

            for (index, candidate) in candidates.iter().enumerate() {
                let price = candidate.contract.current_price();
                if total_cost + price > self.constraints.budget {
                    continue;
                }
                if (greeks.vega + candidate.greeks.vega).abs() > self.constraints.max_vega {
                    continue;
                }
                if greeks.theta + candidate.greeks.theta < self.constraints.min_theta {
                    continue;
                }

                let gap_after =
                    (self.constraints.target_delta - (greeks.delta + candidate.greeks.delta)).abs();

                best = match best {
                    None => Some((index, gap_after)),
                    Some((best_index, best_gap)) => {
                        let cheaper =
                            unit_cost(candidate) < unit_cost(&candidates[best_index]);
                        if gap_after < best_gap - GAP_EPSILON
                            || ((gap_after - best_gap).abs() <= GAP_EPSILON && cheaper)
                        {
                            Some((index, gap_after))
                        } else {
                            Some((best_index, best_gap))
                        }
                    }
                };
            }

            match best {
                Some((index, gap_after)) if gap_after < gap - GAP_EPSILON => {
                    quantities[index] += 1;
                    total_cost += candidates[index].contract.current_price();
                    greeks = greeks + candidates[index].greeks;
                    gap = gap_after;
                    rounds += 1;
                }
                _ => break,
            }
        }

        Allocation {
            quantities,
            total_cost,
            portfolio_greeks: greeks,
            delta_gap: gap,
            rounds,
        }
    }
}

/// Premium paid per unit of absolute delta; infinite for delta-flat
/// candidates so they lose every tie.
fn unit_cost(candidate: &Candidate) -> f64 {
    let delta = candidate.greeks.delta.abs();
    if delta > 0.0 {
        candidate.contract.current_price() / delta
    } else {
        f64::INFINITY
    }
}
