//! Implied volatility solving via Newton-Raphson.
//!
//! Inverts the Black-Scholes formula for volatility given an observed
//! option price. The solve is best-effort: hard-to-invert quotes produce
//! a diagnostic result with `converged = false` rather than an error, so
//! a single stale quote cannot take down a whole chain analysis.

use desk_core::types::OptionKind;

use crate::black_scholes::{BlackScholes, VOL_FLOOR};
use crate::error::PricingError;

/// Starting volatility guess for the Newton iteration.
const INITIAL_GUESS: f64 = 0.5;

/// Below this vega the Newton step is numerically meaningless.
const VEGA_CUTOFF: f64 = 1e-12;

/// Configuration for the implied volatility solver.
///
/// # Example
///
/// ```
/// use desk_pricing::implied::SolverConfig;
///
/// // Use default configuration
/// let config = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-5);
/// assert_eq!(config.max_iterations, 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-8,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance on the price error.
    ///
    /// The solver stops when `|price(σ) - target| < tolerance`.
    pub tolerance: f64,

    /// Maximum number of Newton updates before giving up.
    ///
    /// Hitting the cap returns the last guess with `converged = false`.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-5
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance on price (must be positive)
    /// * `max_iterations` - Maximum update count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-8) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 500,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-3) and fewer iterations (25),
    /// enough for screening whole chains.
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 25,
        }
    }
}

/// Diagnostic result of an implied volatility solve.
///
/// Carries the solved volatility together with how the solver got there,
/// so callers can distinguish a clean inversion from a bailout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVol {
    /// The solved (or best-effort) volatility
    pub volatility: f64,
    /// Number of Newton updates applied before termination
    pub iterations: usize,
    /// Whether the price error fell below the configured tolerance
    pub converged: bool,
}

/// Newton-Raphson implied volatility solver.
///
/// Starting from a fixed initial guess, repeatedly applies
/// σ ← σ - (price(σ) - target) / vega(σ) until the price error drops
/// below tolerance or the iteration cap is reached.
///
/// Termination is best-effort by design:
/// - vega ≈ 0 returns the current guess immediately (deep ITM/OTM quotes
///   carry no volatility information)
/// - an update driving σ non-positive returns [`VOL_FLOOR`]
/// - hitting the iteration cap returns the last guess
///
/// All three bailouts set `converged = false` on the result; only input
/// validation produces an error.
///
/// # Examples
/// ```
/// use desk_pricing::implied::ImpliedVolSolver;
/// use desk_pricing::black_scholes::BlackScholes;
/// use desk_core::types::OptionKind;
///
/// let solver = ImpliedVolSolver::new(0.05);
///
/// // Price an option at a known volatility, then invert it back
/// let model = BlackScholes::new(100.0, 0.05, 0.3)?;
/// let price = model.price_call(105.0, 0.5);
///
/// let result = solver.solve(price, 100.0, 105.0, 0.5, OptionKind::Call)?;
/// assert!(result.converged);
/// assert!((result.volatility - 0.3).abs() < 1e-3);
/// # Ok::<(), desk_pricing::PricingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    /// Risk-free interest rate (r)
    rate: f64,
    /// Convergence settings
    config: SolverConfig,
}

impl ImpliedVolSolver {
    /// Creates a solver with the default configuration.
    ///
    /// # Arguments
    /// * `rate` - Risk-free interest rate (annualised)
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            config: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solves for the volatility that reprices an observed quote.
    ///
    /// # Arguments
    /// * `target_price` - Observed option price to invert
    /// * `spot` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T, must be positive)
    /// * `kind` - Call or put
    ///
    /// # Returns
    /// An [`ImpliedVol`] diagnostic. Non-convergence is reported through
    /// the `converged` flag, not as an error.
    ///
    /// # Errors
    /// - `PricingError::InvalidTargetPrice` if the target is non-positive
    ///   or non-finite
    /// - `PricingError::InvalidSpot` if spot is non-positive or non-finite
    /// - `PricingError::InvalidStrike` if strike is non-positive or
    ///   non-finite
    /// - `PricingError::InvalidExpiry` if expiry is non-positive or
    ///   non-finite
    pub fn solve(
        &self,
        target_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        kind: OptionKind,
    ) -> Result<ImpliedVol, PricingError> {
        if target_price <= 0.0 || !target_price.is_finite() {
            return Err(PricingError::InvalidTargetPrice {
                price: target_price,
            });
        }
        if spot <= 0.0 || !spot.is_finite() {
            return Err(PricingError::InvalidSpot { spot });
        }
        if strike <= 0.0 || !strike.is_finite() {
            return Err(PricingError::InvalidStrike { strike });
        }
        if expiry <= 0.0 || !expiry.is_finite() {
            return Err(PricingError::InvalidExpiry { expiry });
        }

        let mut vol = INITIAL_GUESS;

        for iteration in 0..self.config.max_iterations {
            let model = BlackScholes::new(spot, self.rate, vol)?;
            let price = model.price(kind, strike, expiry);
            let diff = price - target_price;

            if diff.abs() < self.config.tolerance {
                return Ok(ImpliedVol {
                    volatility: vol,
                    iterations: iteration,
                    converged: true,
                });
            }

            let vega = model.vega(strike, expiry);
            if vega.abs() < VEGA_CUTOFF {
                // The price is insensitive to volatility here; a Newton
                // step would blow up, so report the current guess
                return Ok(ImpliedVol {
                    volatility: vol,
                    iterations: iteration,
                    converged: false,
                });
            }

            let next = vol - diff / vega;
            if next <= 0.0 {
                return Ok(ImpliedVol {
                    volatility: VOL_FLOOR,
                    iterations: iteration + 1,
                    converged: false,
                });
            }

            vol = next;
        }

        Ok(ImpliedVol {
            volatility: vol,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}
