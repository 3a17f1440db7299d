//! Error function and standard-normal CDF.

const SQRT_2: f64 = std::f64::consts::SQRT_2;

// Abramowitz & Stegun 7.1.26 rational approximation, |error| <= 1.5e-7.
const AS_P: f64 = 0.327_591_1;
#[allow(clippy::excessive_precision)] // These are published numerical constants
const AS_COEFFS: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Error function erf(x).
///
/// Odd in x; saturates to +/-1 for large |x|. NaN in, NaN out.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return -1.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    // exp(-x^2) underflows to 0 past ~26.6, where erf is 1 to machine precision.
    let t = 1.0 / (1.0 + AS_P * x);
    let mut poly = 0.0;
    for c in AS_COEFFS.iter().rev() {
        poly = poly * t + c;
    }
    poly *= t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Complementary error function erfc(x) = 1 - erf(x).
pub fn erfc(x: f64) -> f64 {
    1.0 - erf(x)
}

/// Standard-normal cumulative distribution function Phi(z).
pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Standard-normal survival function 1 - Phi(z).
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}
