//! Simplified lognormal hazard-curve integration.
//!
//! Per-distance logic-tree estimates are averaged arithmetically into one
//! effective (mu, sigma) pair, a coarse stand-in for true distance
//! integration. Exceedance at each intensity level comes from the lognormal
//! survival function, annualized under a homogeneous Poisson process.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shake_common::{Error, Result};
use shake_gmm::Registry;
use shake_math::{lognormal_sf, mean};

use crate::combine::{combine, LogicTreeEntry, SharedScenario};

/// Effective moments and rate behind a curve.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CurveMeta {
    pub mu_ln: f64,
    pub sigma_ln: f64,
    pub annual_rate: f64,
}

/// Intensity levels paired index-wise with annual exceedance probabilities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HazardCurve {
    pub imls: Vec<f64>,
    pub poe: Vec<f64>,
    pub meta: CurveMeta,
}

/// Build a curve from effective moments.
///
/// Pointwise over `imls`, in caller-supplied order: levels are floored at
/// the smallest positive double before the log, zero sigma degenerates to a
/// step at exp(mu), and every probability lands in [0, 1].
pub fn curve_from_moments(mu_ln: f64, sigma_ln: f64, imls: &[f64], annual_rate: f64) -> HazardCurve {
    let poe = imls
        .iter()
        .map(|&x| {
            let p_exceed = lognormal_sf(x, mu_ln, sigma_ln);
            1.0 - (-annual_rate * p_exceed).exp()
        })
        .collect();
    HazardCurve {
        imls: imls.to_vec(),
        poe,
        meta: CurveMeta {
            mu_ln,
            sigma_ln,
            annual_rate,
        },
    }
}

/// Full pipeline: logic tree → per-distance combine → moment average → curve.
#[allow(clippy::too_many_arguments)]
pub fn hazard_curve(
    registry: &Registry,
    logic: &[LogicTreeEntry],
    scenario: &SharedScenario,
    rrup: &[f64],
    imls: &[f64],
    annual_rate: f64,
    fallback_sigma_ln: f64,
) -> Result<HazardCurve> {
    if imls.is_empty() {
        return Err(Error::EmptyInput { what: "imls" });
    }
    if rrup.is_empty() {
        return Err(Error::EmptyInput { what: "rrup" });
    }

    // Per-distance evaluations are independent; results stay zipped to their
    // input distances by construction.
    let mut mus = Vec::with_capacity(rrup.len());
    let mut sigmas = Vec::with_capacity(rrup.len());
    for &r in rrup {
        let estimate = combine(registry, logic, scenario, r, fallback_sigma_ln)?;
        mus.push(estimate.mu);
        sigmas.push(estimate.sigma);
    }

    let mu_eff = mean(&mus);
    let sigma_eff = mean(&sigmas);
    debug!(
        distances = rrup.len(),
        levels = imls.len(),
        mu_eff,
        sigma_eff,
        annual_rate,
        "built hazard curve"
    );
    Ok(curve_from_moments(mu_eff, sigma_eff, imls, annual_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::DEFAULT_HYPO_DEPTH_KM;
    use crate::test_models::test_registry;

    fn scenario() -> SharedScenario {
        SharedScenario {
            imt: "PGA".to_string(),
            mag: 6.0,
            vs30: 760.0,
            z1pt0: None,
            z2pt5: None,
            hypo_depth_km: DEFAULT_HYPO_DEPTH_KM,
        }
    }

    fn tree(code: &str) -> Vec<LogicTreeEntry> {
        vec![LogicTreeEntry {
            code: code.to_string(),
            weight: 1.0,
        }]
    }

    #[test]
    fn empty_imls_rejected() {
        let err = hazard_curve(
            &test_registry(),
            &tree("FixedModel"),
            &scenario(),
            &[10.0],
            &[],
            0.01,
            0.6,
        )
        .unwrap_err();
        match err {
            Error::EmptyInput { what } => assert_eq!(what, "imls"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn empty_rrup_rejected() {
        let err = hazard_curve(
            &test_registry(),
            &tree("FixedModel"),
            &scenario(),
            &[],
            &[0.1],
            0.01,
            0.6,
        )
        .unwrap_err();
        match err {
            Error::EmptyInput { what } => assert_eq!(what, "rrup"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn empty_logic_tree_rejected() {
        let err = hazard_curve(
            &test_registry(),
            &[],
            &scenario(),
            &[10.0],
            &[0.1],
            0.01,
            0.6,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyLogicTree));
    }

    #[test]
    fn probabilities_descend_and_stay_in_unit_interval() {
        let imls = [0.01, 0.1, 0.5, 1.0];
        let curve = hazard_curve(
            &test_registry(),
            &tree("FixedModel"),
            &scenario(),
            &[10.0, 50.0],
            &imls,
            0.01,
            0.6,
        )
        .unwrap();
        assert_eq!(curve.imls, imls);
        assert_eq!(curve.poe.len(), 4);
        for pair in curve.poe.windows(2) {
            assert!(pair[0] >= pair[1], "poe not non-increasing: {:?}", curve.poe);
        }
        for p in &curve.poe {
            assert!((0.0..=1.0).contains(p));
        }
    }

    #[test]
    fn moments_average_across_distances() {
        let registry = test_registry();
        let near = combine(&registry, &tree("FixedModel"), &scenario(), 10.0, 0.6).unwrap();
        let far = combine(&registry, &tree("FixedModel"), &scenario(), 50.0, 0.6).unwrap();
        let curve = hazard_curve(
            &registry,
            &tree("FixedModel"),
            &scenario(),
            &[10.0, 50.0],
            &[0.1],
            0.01,
            0.6,
        )
        .unwrap();
        assert!((curve.meta.mu_ln - 0.5 * (near.mu + far.mu)).abs() < 1e-12);
        assert!((curve.meta.sigma_ln - 0.5 * (near.sigma + far.sigma)).abs() < 1e-12);
        assert_eq!(curve.meta.annual_rate, 0.01);
    }

    #[test]
    fn zero_sigma_combiner_yields_clean_step() {
        // ZeroSigmaModel forces sigma_eff = 0; the curve must degenerate to a
        // step at exp(mu_eff) without numeric exceptions.
        let registry = test_registry();
        let estimate = combine(&registry, &tree("ZeroSigmaModel"), &scenario(), 10.0, 0.6).unwrap();
        assert_eq!(estimate.sigma, 0.0);
        let median = estimate.mu.exp();

        let imls = [median * 0.5, median, median * 2.0];
        let curve = hazard_curve(
            &registry,
            &tree("ZeroSigmaModel"),
            &scenario(),
            &[10.0],
            &imls,
            0.01,
            0.6,
        )
        .unwrap();
        let saturated = 1.0 - (-0.01f64).exp();
        assert!((curve.poe[0] - saturated).abs() < 1e-12);
        assert_eq!(curve.poe[1], 0.0);
        assert_eq!(curve.poe[2], 0.0);
        assert!(curve.poe.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn nonpositive_levels_are_floored_not_fatal() {
        let curve = hazard_curve(
            &test_registry(),
            &tree("FixedModel"),
            &scenario(),
            &[10.0],
            &[0.0, -1.0, 0.1],
            0.01,
            0.6,
        )
        .unwrap();
        assert!(curve.poe.iter().all(|p| p.is_finite()));
        // Floored levels sit at the extreme left tail: exceedance saturates.
        let saturated = 1.0 - (-0.01f64).exp();
        assert!((curve.poe[0] - saturated).abs() < 1e-9);
        assert!((curve.poe[1] - saturated).abs() < 1e-9);
    }

    #[test]
    fn caller_supplied_order_is_preserved() {
        // The integrator evaluates pointwise and never sorts.
        let imls = [0.5, 0.01, 1.0];
        let curve = hazard_curve(
            &test_registry(),
            &tree("FixedModel"),
            &scenario(),
            &[10.0],
            &imls,
            0.01,
            0.6,
        )
        .unwrap();
        assert_eq!(curve.imls, imls);
        assert!(curve.poe[1] >= curve.poe[0]);
        assert!(curve.poe[0] >= curve.poe[2]);
    }
}
