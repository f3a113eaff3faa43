//! Descriptive statistics over `f64` slices.
//!
//! Small helpers shared by the VaR calculation and the backtest performance
//! metrics. All of them return `None` when the input carries too few points
//! to define the quantity, leaving the fallback policy to the caller.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n − 1 denominator). `None` below two points.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Empirical percentile with linear interpolation between order statistics.
///
/// `pct` is in percent, 0..=100; the rank is `pct/100 · (n − 1)` and the
/// result interpolates between the two bracketing sorted values. Returns
/// `None` for an empty slice or a `pct` outside the range.
///
/// # Examples
/// ```
/// use desk_core::math::stats::percentile;
///
/// let values = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&values, 50.0), Some(2.5));
/// assert_eq!(percentile(&values, 0.0), Some(1.0));
/// assert_eq!(percentile(&values, 100.0), Some(4.0));
/// ```
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=100.0).contains(&pct) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Pearson correlation coefficient between two equally-long series.
///
/// `None` when the lengths differ, fewer than two points are supplied, or
/// either series has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mx = mean(x)?;
    let my = mean(y)?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // mean / sample_std
    // ==========================================================

    #[test]
    fn test_mean_known_value() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_known_value() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is 32/7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(
            sample_std(&values).unwrap(),
            (32.0_f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sample_std_single_point_is_none() {
        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(sample_std(&[]), None);
    }

    #[test]
    fn test_sample_std_constant_is_zero() {
        assert_relative_eq!(sample_std(&[3.0, 3.0, 3.0]).unwrap(), 0.0, epsilon = 1e-12);
    }

    // ==========================================================
    // percentile
    // ==========================================================

    #[test]
    fn test_percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        // rank at 25% of (n-1) = 0.75 → 1 + 0.75*(2-1)
        assert_relative_eq!(percentile(&values, 25.0).unwrap(), 1.75, epsilon = 1e-12);
        assert_relative_eq!(percentile(&values, 50.0).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_endpoints() {
        let values = [9.0, 7.0, 5.0];
        assert_eq!(percentile(&values, 0.0), Some(5.0));
        assert_eq!(percentile(&values, 100.0), Some(9.0));
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let values = [0.03, -0.05, 0.01, -0.02, 0.0];
        assert_relative_eq!(
            percentile(&values, 5.0).unwrap(),
            -0.044,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_percentile_empty_or_out_of_range() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[1.0], -1.0), None);
        assert_eq!(percentile(&[1.0], 100.5), None);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[42.0], 37.0), Some(42.0));
    }

    // ==========================================================
    // pearson
    // ==========================================================

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(pearson(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert_relative_eq!(pearson(&x, &y).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_degenerate_inputs() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        // Zero variance on one side
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
    }

    // ==========================================================
    // Properties
    // ==========================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_percentile_within_sample_range(
            values in prop::collection::vec(-1e6_f64..1e6, 1..100),
            pct in 0.0_f64..100.0,
        ) {
            let p = percentile(&values, pct).unwrap();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(p >= min - 1e-9);
            prop_assert!(p <= max + 1e-9);
        }

        #[test]
        fn prop_percentile_monotone_in_pct(
            values in prop::collection::vec(-1e6_f64..1e6, 2..100),
            lo in 0.0_f64..50.0,
            hi in 50.0_f64..100.0,
        ) {
            let p_lo = percentile(&values, lo).unwrap();
            let p_hi = percentile(&values, hi).unwrap();
            prop_assert!(p_lo <= p_hi + 1e-9);
        }

        #[test]
        fn prop_pearson_bounded(
            pairs in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 2..50),
        ) {
            let x: Vec<f64> = pairs.iter().map(|(a, _)| *a).collect();
            let y: Vec<f64> = pairs.iter().map(|(_, b)| *b).collect();
            if let Some(r) = pearson(&x, &y) {
                prop_assert!(r >= -1.0 - 1e-9);
                prop_assert!(r <= 1.0 + 1e-9);
            }
        }
    }
}
