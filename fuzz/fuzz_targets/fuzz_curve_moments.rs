//! Fuzz target for the moment-to-curve step.
//!
//! Any finite moments and levels must produce probabilities in [0, 1]; no
//! input may panic or divide by zero.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shake_core::curve_from_moments;

fuzz_target!(|input: (f64, f64, Vec<f64>, f64)| {
    let (mu, sigma, imls, rate) = input;
    let curve = curve_from_moments(mu, sigma, &imls, rate);
    assert_eq!(curve.imls.len(), curve.poe.len());
    if mu.is_finite() && sigma.is_finite() && sigma >= 0.0 && rate.is_finite() && rate >= 0.0 {
        for (x, p) in curve.imls.iter().zip(&curve.poe) {
            if x.is_finite() {
                assert!((0.0..=1.0).contains(p), "poe {p} for iml {x}");
            }
        }
    }
});
