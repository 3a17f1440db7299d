//! Lognormal CDF and survival in natural-log space.

use super::normal::erf;

/// Lognormal CDF at `x` with log-space mean `mu` and stddev `sigma`.
///
/// `x` is floored at the smallest positive double before taking the log, so
/// zero and negative levels evaluate at the extreme left tail instead of
/// producing -inf. A zero `sigma` degenerates to a step at exp(mu).
/// Negative or NaN `sigma` yields NaN.
pub fn lognormal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if x.is_nan() || mu.is_nan() || !(sigma >= 0.0) {
        return f64::NAN;
    }
    let x = x.max(f64::MIN_POSITIVE);
    if sigma == 0.0 {
        return if x >= mu.exp() { 1.0 } else { 0.0 };
    }
    let z = (x.ln() - mu) / (sigma * std::f64::consts::SQRT_2);
    0.5 * (1.0 + erf(z))
}

/// Lognormal survival function 1 - CDF, clamped to [0, 1].
pub fn lognormal_sf(x: f64, mu: f64, sigma: f64) -> f64 {
    let cdf = lognormal_cdf(x, mu, sigma);
    if cdf.is_nan() {
        return f64::NAN;
    }
    (1.0 - cdf).clamp(0.0, 1.0)
}
