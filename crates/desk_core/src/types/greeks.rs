//! Option sensitivity (Greeks) value type.
//!
//! `Greeks` is a fixed-field bundle of the four computed sensitivities plus
//! rho, which the pricing layer leaves at zero. `GreekKind` provides an
//! enumerable field list so callers can iterate all sensitivities generically
//! (stress aggregation, reporting) without giving up field access.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Identifies one field of [`Greeks`].
///
/// # Examples
/// ```
/// use desk_core::types::{GreekKind, Greeks};
///
/// let greeks = Greeks::new(0.5, 0.01, -4.2, 11.0);
/// for kind in GreekKind::ALL {
///     assert!(greeks.get(kind).is_finite());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreekKind {
    /// Sensitivity to the underlying spot price.
    Delta,
    /// Curvature with respect to the spot price.
    Gamma,
    /// Time decay rate.
    Theta,
    /// Sensitivity to volatility.
    Vega,
    /// Sensitivity to the risk-free rate.
    Rho,
}

impl GreekKind {
    /// All Greek fields, in reporting order.
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
    ];

    /// Lowercase name of the field.
    pub fn name(self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Theta => "theta",
            GreekKind::Vega => "vega",
            GreekKind::Rho => "rho",
        }
    }
}

/// First- and second-order option sensitivities.
///
/// Produced fresh per pricing call and never mutated in place. Under a
/// linear portfolio the fields are additive, so positions combine by
/// [`Greeks::scale`] and summation.
///
/// # Examples
/// ```
/// use desk_core::types::Greeks;
///
/// let leg = Greeks::new(0.55, 0.002, -12.0, 40.0);
/// let short_two = leg.scale(-2.0);
/// assert_eq!(short_two.delta, -1.1);
///
/// let book: Greeks = [leg, short_two].into_iter().sum();
/// assert!((book.delta - -0.55).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Sensitivity to spot (∈ [0, 1] for calls, [-1, 0] for puts).
    pub delta: f64,
    /// Spot curvature (non-negative).
    pub gamma: f64,
    /// Time decay rate (signed).
    pub theta: f64,
    /// Volatility sensitivity (non-negative).
    pub vega: f64,
    /// Rate sensitivity. Not computed by the pricing layer; defaults to 0.
    pub rho: f64,
}

impl Greeks {
    /// Creates a Greeks bundle with rho left at zero.
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho: 0.0,
        }
    }

    /// Sets rho on an otherwise-built bundle.
    #[must_use]
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Returns the field identified by `kind`.
    #[inline]
    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Theta => self.theta,
            GreekKind::Vega => self.vega,
            GreekKind::Rho => self.rho,
        }
    }

    /// Scales every field by a signed position quantity.
    #[must_use]
    pub fn scale(&self, quantity: f64) -> Self {
        Self {
            delta: self.delta * quantity,
            gamma: self.gamma * quantity,
            theta: self.theta * quantity,
            vega: self.vega * quantity,
            rho: self.rho * quantity,
        }
    }
}

impl Add for Greeks {
    type Output = Greeks;

    fn add(self, rhs: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

impl AddAssign for Greeks {
    fn add_assign(&mut self, rhs: Greeks) {
        *self = *self + rhs;
    }
}

impl Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::default(), Add::add)
    }
}
