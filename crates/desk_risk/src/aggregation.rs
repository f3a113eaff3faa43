//! Linear greeks aggregation across positions.
//!
//! Greeks are first-order sensitivities, so a linear portfolio's greeks
//! are the quantity-weighted sum of its positions' greeks, with no
//! cross terms. Large books aggregate in parallel with Rayon; small ones stay
//! sequential to avoid the fork-join overhead.

use rayon::prelude::*;

use desk_core::types::Greeks;

use crate::position::Position;

/// Book size at which aggregation switches to Rayon.
pub const SEQUENTIAL_CUTOFF: usize = 64;

/// Aggregates portfolio greeks, choosing sequential or parallel
/// execution by book size.
///
/// # Examples
/// ```
/// use desk_core::types::Greeks;
/// use desk_risk::aggregation::portfolio_greeks;
///
/// let totals = portfolio_greeks(&[]);
/// assert_eq!(totals, Greeks::default());
/// ```
pub fn portfolio_greeks(positions: &[Position]) -> Greeks {
    if positions.len() < SEQUENTIAL_CUTOFF {
        portfolio_greeks_sequential(positions)
    } else {
        portfolio_greeks_parallel(positions)
    }
}

/// Forces sequential aggregation regardless of book size.
///
/// Useful for comparison benchmarking.
pub fn portfolio_greeks_sequential(positions: &[Position]) -> Greeks {
    positions.iter().map(Position::weighted_greeks).sum()
}

/// Forces parallel aggregation regardless of book size.
///
/// Useful for benchmarking or when the caller knows the book is large.
pub fn portfolio_greeks_parallel(positions: &[Position]) -> Greeks {
    positions
        .par_iter()
        .map(Position::weighted_greeks)
        .reduce(Greeks::default, |a, b| a + b)
}
