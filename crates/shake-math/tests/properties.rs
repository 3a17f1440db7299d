//! Property-based tests for shake-math numerical functions.
//!
//! Uses proptest to verify mathematical properties hold across many random inputs.

use proptest::prelude::*;
use shake_math::{erf, erfc, lognormal_cdf, lognormal_sf, mean, std_normal_cdf, std_normal_sf};

/// Tolerance for floating point comparisons.
///
/// The erf approximation (Abramowitz & Stegun 7.1.26) carries ~1.5e-7 error,
/// so identities built on it get a matching budget.
const TOL: f64 = 1e-6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// erf is odd: erf(-x) = -erf(x).
    #[test]
    fn erf_is_odd(x in -10.0..10.0f64) {
        prop_assert!((erf(-x) + erf(x)).abs() <= TOL);
    }

    /// erf stays inside [-1, 1].
    #[test]
    fn erf_bounded(x in -1e6..1e6f64) {
        let y = erf(x);
        prop_assert!((-1.0..=1.0).contains(&y), "erf({x}) = {y}");
    }

    /// erf + erfc = 1.
    #[test]
    fn erf_erfc_complement(x in -10.0..10.0f64) {
        prop_assert!((erf(x) + erfc(x) - 1.0).abs() <= TOL);
    }

    /// Phi is monotone non-decreasing.
    #[test]
    fn cdf_monotone(a in -8.0..8.0f64, b in -8.0..8.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(std_normal_cdf(lo) <= std_normal_cdf(hi) + TOL);
    }

    /// Phi(z) + SF(z) = 1.
    #[test]
    fn cdf_sf_complement(z in -8.0..8.0f64) {
        prop_assert!((std_normal_cdf(z) + std_normal_sf(z) - 1.0).abs() <= TOL);
    }

    /// Lognormal CDF lies in [0, 1] for any level, including non-positive ones.
    #[test]
    fn lognormal_cdf_bounded(
        x in -10.0..1e3f64,
        mu in -5.0..5.0f64,
        sigma in 0.0..3.0f64,
    ) {
        let cdf = lognormal_cdf(x, mu, sigma);
        prop_assert!((0.0..=1.0).contains(&cdf), "cdf({x},{mu},{sigma}) = {cdf}");
    }

    /// Lognormal CDF is monotone non-decreasing in the level.
    #[test]
    fn lognormal_cdf_monotone(
        a in 1e-6..100.0f64,
        b in 1e-6..100.0f64,
        mu in -5.0..5.0f64,
        sigma in 1e-3..3.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(lognormal_cdf(lo, mu, sigma) <= lognormal_cdf(hi, mu, sigma) + TOL);
    }

    /// Survival is the complement of the CDF.
    #[test]
    fn lognormal_sf_complement(
        x in 1e-6..100.0f64,
        mu in -5.0..5.0f64,
        sigma in 0.0..3.0f64,
    ) {
        let total = lognormal_cdf(x, mu, sigma) + lognormal_sf(x, mu, sigma);
        prop_assert!((total - 1.0).abs() <= TOL);
    }

    /// Mean lies between min and max of its inputs.
    #[test]
    fn mean_within_range(values in prop::collection::vec(-1e6..1e6f64, 1..32)) {
        let m = mean(&values);
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= lo - 1e-6 && m <= hi + 1e-6, "mean {m} outside [{lo}, {hi}]");
    }
}
