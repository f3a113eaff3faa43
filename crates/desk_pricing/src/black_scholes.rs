//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use desk_core::math::distributions::{norm_cdf, norm_pdf};
use desk_core::types::{Greeks, OptionKind};

use crate::error::PricingError;

/// Smallest volatility admitted into the formulas.
///
/// Quotes occasionally arrive with zero or negative volatility; the model
/// clamps anything below this floor up to it instead of rejecting the
/// input, so downstream divisions by σ√T stay well-defined.
pub const VOL_FLOOR: f64 = 1e-4;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and greeks calculations for European
/// options under lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use desk_pricing::black_scholes::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ), clamped to [`VOL_FLOOR`]
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Risk-free interest rate (annualised; negative rates allowed)
    /// * `volatility` - Volatility; values at or below [`VOL_FLOOR`]
    ///   (including NaN) are clamped up to the floor rather than rejected
    ///
    /// # Errors
    /// - `PricingError::InvalidSpot` if spot is non-positive or non-finite
    ///
    /// # Examples
    /// ```
    /// use desk_pricing::black_scholes::{BlackScholes, VOL_FLOOR};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert_eq!(bs.volatility(), 0.2);
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Non-positive volatility is floored, not rejected
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
    /// assert_eq!(bs.volatility(), VOL_FLOOR);
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        let zero = T::zero();

        if spot <= zero || !spot.is_finite() {
            return Err(PricingError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        let floor = T::from(VOL_FLOOR).unwrap();
        let volatility = if volatility > floor { volatility } else { floor };

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility after clamping.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values for limiting cases.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry ≈ 0 case
        if expiry <= epsilon {
            // At expiry, if S > K, d1 → +∞, otherwise d1 → -∞
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d2 term.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        let sqrt_t = expiry.sqrt();
        self.d1(strike, expiry) - self.volatility * sqrt_t
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The theoretical call option price.
    ///
    /// # Examples
    /// ```
    /// use desk_pricing::black_scholes::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    ///
    /// // ATM call should have positive value
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The theoretical put option price.
    ///
    /// # Examples
    /// ```
    /// use desk_pricing::black_scholes::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    ///
    /// // ATM put should have positive value
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices an option of the given kind.
    ///
    /// Dispatches to [`price_call`](Self::price_call) or
    /// [`price_put`](Self::price_put).
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    #[inline]
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The delta sensitivity.
    #[inline]
    pub fn delta(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let one = T::one();
            let zero = T::zero();
            if kind.is_call() {
                return if self.spot > strike { one } else { zero };
            } else {
                return if self.spot < strike { -one } else { zero };
            }
        }

        let d1 = self.d1(strike, expiry);
        let n_d1 = norm_cdf(d1);

        if kind.is_call() {
            n_d1
        } else {
            n_d1 - T::one()
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    ///
    /// Gamma is the same for both calls and puts.
    ///
    /// # Arguments
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The gamma sensitivity (always non-negative).
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Gamma = φ(d₁) / (S·σ·√T)
        norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁)
    ///
    /// Vega is the same for both calls and puts.
    ///
    /// # Arguments
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The vega sensitivity (always non-negative).
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Vega = S·√T·φ(d₁)
        self.spot * sqrt_t * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Note: This returns the rate of change with respect to time,
    /// which is typically negative (time decay).
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The theta sensitivity (usually negative).
    #[inline]
    pub fn theta(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let two = T::from(2.0).unwrap();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let term1 = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        if kind.is_call() {
            // Call Theta = term1 - r·K·e^(-rT)·N(d₂)
            term1 - self.rate * strike * discount * norm_cdf(d2)
        } else {
            // Put Theta = term1 + r·K·e^(-rT)·N(-d₂)
            term1 + self.rate * strike * discount * norm_cdf(-d2)
        }
    }
}

impl BlackScholes<f64> {
    /// Computes the full greeks block for an option.
    ///
    /// Delta, gamma, theta, and vega come from the closed-form
    /// sensitivities above; rho is left at zero since the desk does not
    /// hedge rate risk on these books.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration in years
    ///
    /// # Examples
    /// ```
    /// use desk_pricing::black_scholes::BlackScholes;
    /// use desk_core::types::OptionKind;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(OptionKind::Call, 100.0, 1.0);
    ///
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// assert!(greeks.theta < 0.0);
    /// assert!(greeks.vega > 0.0);
    /// assert_eq!(greeks.rho, 0.0);
    /// ```
    pub fn greeks(&self, kind: OptionKind, strike: f64, expiry: f64) -> Greeks {
        Greeks::new(
            self.delta(kind, strike, expiry),
            self.gamma(strike, expiry),
            self.theta(kind, strike, expiry),
            self.vega(strike, expiry),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2);
        assert!(bs.is_ok());

        let bs = bs.unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot_negative() {
        let result = BlackScholes::new(-100.0_f64, 0.05, 0.2);
        assert!(result.is_err());
        match result.unwrap_err() {
            PricingError::InvalidSpot { spot } => {
                assert_eq!(spot, -100.0);
            }
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_new_invalid_spot_zero() {
        let result = BlackScholes::new(0.0_f64, 0.05, 0.2);
        assert!(result.is_err());
        match result.unwrap_err() {
            PricingError::InvalidSpot { .. } => {}
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_new_invalid_spot_nan() {
        assert!(BlackScholes::new(f64::NAN, 0.05, 0.2).is_err());
        assert!(BlackScholes::new(f64::INFINITY, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_new_volatility_zero_is_floored() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        assert_eq!(bs.volatility(), VOL_FLOOR);
    }

    #[test]
    fn test_new_volatility_negative_is_floored() {
        let bs = BlackScholes::new(100.0_f64, 0.05, -0.3).unwrap();
        assert_eq!(bs.volatility(), VOL_FLOOR);
    }

    #[test]
    fn test_new_volatility_nan_is_floored() {
        let bs = BlackScholes::new(100.0_f64, 0.05, f64::NAN).unwrap();
        assert_eq!(bs.volatility(), VOL_FLOOR);
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2);
        assert!(bs.is_ok());
    }

    // ==========================================================
    // d1 / d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm_reference() {
        // S=K=100, r=0.05, σ=0.2, T=1:
        // d1 = (0 + (0.05 + 0.02)·1) / 0.2 = 0.35, d2 = 0.35 - 0.2 = 0.15
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.35, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_at_expiry_limits() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(90.0, 0.0) > 50.0); // ITM call → +large
        assert!(bs.d1(110.0, 0.0) < -50.0); // OTM call → -large
        assert_eq!(bs.d1(100.0, 0.0), 0.0); // ATM → 0
    }

    // ==========================================================
    // Pricing Tests
    // ==========================================================

    #[test]
    fn test_price_call_reference_value() {
        // Textbook value: S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_price_put_reference_value() {
        // Textbook value: S=100, K=100, r=0.05, σ=0.2, T=1 → P ≈ 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(105.0_f64, 0.03, 0.25).unwrap();
        let strike = 110.0;
        let expiry = 0.75;

        let call = bs.price_call(strike, expiry);
        let put = bs.price_put(strike, expiry);
        let forward = 105.0 - strike * (-0.03_f64 * expiry).exp();

        assert_relative_eq!(call - put, forward, epsilon = 1e-9);
    }

    #[test]
    fn test_price_otm_call_short_dated() {
        // S=29000, K=30000, r=0.05, σ=0.5, T=30/365: value is positive
        // but well below both spot and strike
        let bs = BlackScholes::new(29_000.0_f64, 0.05, 0.5).unwrap();
        let call = bs.price_call(30_000.0, 30.0 / 365.0);

        assert!(call > 0.0);
        assert!(call < 29_000.0);

        // Parity pins the put to the call
        let put = bs.price_put(30_000.0, 30.0 / 365.0);
        let forward = 29_000.0 - 30_000.0 * (-0.05_f64 * 30.0 / 365.0).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-8);
    }

    #[test]
    fn test_price_at_expiry_is_intrinsic() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        assert_eq!(bs.price_call(90.0, 0.0), 10.0);
        assert_eq!(bs.price_call(110.0, 0.0), 0.0);
        assert_eq!(bs.price_put(110.0, 0.0), 10.0);
        assert_eq!(bs.price_put(90.0, 0.0), 0.0);
    }

    #[test]
    fn test_price_dispatch_matches_direct_calls() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(
            bs.price(OptionKind::Call, 95.0, 0.5),
            bs.price_call(95.0, 0.5)
        );
        assert_eq!(bs.price(OptionKind::Put, 95.0, 0.5), bs.price_put(95.0, 0.5));
    }

    #[test]
    fn test_price_call_decreasing_in_strike() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let mut last = f64::INFINITY;
        for strike in [60.0, 80.0, 100.0, 120.0, 140.0] {
            let price = bs.price_call(strike, 1.0);
            assert!(price < last);
            last = price;
        }
    }

    #[test]
    fn test_floored_volatility_prices_stay_finite() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        let call = bs.price_call(100.0, 1.0);
        assert!(call.is_finite());
        // With σ ≈ 0 the call collapses to discounted forward intrinsic
        assert_relative_eq!(
            call,
            100.0 - 100.0 * (-0.05_f64).exp(),
            epsilon = 1e-6
        );
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        let call_delta = bs.delta(OptionKind::Call, 100.0, 1.0);
        assert!(call_delta > 0.0 && call_delta < 1.0);

        let put_delta = bs.delta(OptionKind::Put, 100.0, 1.0);
        assert!(put_delta > -1.0 && put_delta < 0.0);

        // Call and put delta differ by exactly 1
        assert_relative_eq!(call_delta - put_delta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_deep_itm_otm() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        assert!(bs.delta(OptionKind::Call, 50.0, 0.25) > 0.99);
        assert!(bs.delta(OptionKind::Call, 200.0, 0.25) < 0.01);
    }

    #[test]
    fn test_delta_at_expiry() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        assert_eq!(bs.delta(OptionKind::Call, 90.0, 0.0), 1.0);
        assert_eq!(bs.delta(OptionKind::Call, 110.0, 0.0), 0.0);
        assert_eq!(bs.delta(OptionKind::Put, 110.0, 0.0), -1.0);
        assert_eq!(bs.delta(OptionKind::Put, 90.0, 0.0), 0.0);
    }

    #[test]
    fn test_gamma_positive_and_peaks_atm() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        let gamma_atm = bs.gamma(100.0, 1.0);
        let gamma_itm = bs.gamma(70.0, 1.0);
        let gamma_otm = bs.gamma(140.0, 1.0);

        assert!(gamma_atm > 0.0);
        assert!(gamma_atm > gamma_itm);
        assert!(gamma_atm > gamma_otm);
    }

    #[test]
    fn test_vega_positive() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.vega(100.0, 1.0) > 0.0);
        // Longer expiry means more vega at the money
        assert!(bs.vega(100.0, 2.0) > bs.vega(100.0, 0.5));
    }

    #[test]
    fn test_theta_negative_for_atm_call() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.theta(OptionKind::Call, 100.0, 1.0) < 0.0);
    }

    #[test]
    fn test_greeks_zero_at_expiry() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.gamma(100.0, 0.0), 0.0);
        assert_eq!(bs.vega(100.0, 0.0), 0.0);
        assert_eq!(bs.theta(OptionKind::Call, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_greeks_short_dated_otm_call() {
        // S=29000, K=30000, σ=0.5, T=30/365
        let bs = BlackScholes::new(29_000.0_f64, 0.05, 0.5).unwrap();
        let expiry = 30.0 / 365.0;

        let delta = bs.delta(OptionKind::Call, 30_000.0, expiry);
        assert!(delta > 0.0 && delta < 0.5); // OTM call sits below 0.5

        assert!(bs.gamma(30_000.0, expiry) > 0.0);
        assert!(bs.vega(30_000.0, expiry) > 0.0);
        assert!(bs.theta(OptionKind::Call, 30_000.0, expiry) < 0.0);
    }

    // ==========================================================
    // Greeks Assembly Tests
    // ==========================================================

    #[test]
    fn test_greeks_matches_individual_sensitivities() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let greeks = bs.greeks(OptionKind::Put, 95.0, 0.5);

        assert_eq!(greeks.delta, bs.delta(OptionKind::Put, 95.0, 0.5));
        assert_eq!(greeks.gamma, bs.gamma(95.0, 0.5));
        assert_eq!(greeks.theta, bs.theta(OptionKind::Put, 95.0, 0.5));
        assert_eq!(greeks.vega, bs.vega(95.0, 0.5));
        assert_eq!(greeks.rho, 0.0);
    }

    #[test]
    fn test_greeks_call_put_share_gamma_and_vega() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let call = bs.greeks(OptionKind::Call, 100.0, 1.0);
        let put = bs.greeks(OptionKind::Put, 100.0, 1.0);

        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }
}
