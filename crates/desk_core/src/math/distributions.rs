//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, the Φ and φ terms of the
//! Black-Scholes closed form. Both are generic over `T: Float` so the
//! analytical layer can be instantiated with `f64` or `f32`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial, maximum absolute error 1.5e-7 for all x.
///
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);

    // Horner evaluation of the quintic
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    let two = T::from(2.0).unwrap();
    if x < zero {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = P(X <= x) for X ~ N(0, 1), computed as (1/2)·erfc(-x/√2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability in [0, 1], accurate to at least 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use desk_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1/√(2π))·e^(-x²/2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value, always non-negative.
///
/// # Examples
/// ```
/// use desk_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1/√(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
