//! Logic-tree combination of weighted GMPEs.
//!
//! Combines member (mu, sigma) estimates under one shared scenario into a
//! single pair, with explicit normalized weights for auditability.
//!
//! The variance formula is `sigma_w = sqrt(Σ w_i·sigma_i²)`: a weighted
//! average of member variances that ignores between-model epistemic spread.
//! That matches the curve outputs this engine replaces and is kept verbatim;
//! it is a documented simplification, not a bug to fix.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shake_common::{Error, Result};
use shake_gmm::Registry;

use crate::evaluate::{evaluate, ScenarioInput, DEFAULT_HYPO_DEPTH_KM};

fn default_weight() -> f64 {
    1.0
}

/// One weighted member of a logic tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LogicTreeEntry {
    pub code: String,
    /// Relative weight; entries need not pre-sum to 1.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Scenario parameters shared by every member of the tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SharedScenario {
    pub imt: String,
    pub mag: f64,
    pub vs30: f64,
    #[serde(default)]
    pub z1pt0: Option<f64>,
    #[serde(default)]
    pub z2pt5: Option<f64>,
    #[serde(default = "default_hypo_depth")]
    pub hypo_depth_km: f64,
}

fn default_hypo_depth() -> f64 {
    DEFAULT_HYPO_DEPTH_KM
}

/// Normalized weight actually applied to one member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModelWeight {
    pub code: String,
    pub weight: f64,
}

/// Weighted (mu, sigma) in ln space.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CombinedEstimate {
    pub mu: f64,
    pub sigma: f64,
    pub normalized_weights: Vec<ModelWeight>,
}

/// Combine logic-tree members at one rupture distance.
///
/// `fallback_sigma_ln` stands in for members that return no stddevs, since
/// logic-tree members may expose partial stddev sets.
pub fn combine(
    registry: &Registry,
    entries: &[LogicTreeEntry],
    scenario: &SharedScenario,
    rrup: f64,
    fallback_sigma_ln: f64,
) -> Result<CombinedEstimate> {
    if entries.is_empty() {
        return Err(Error::EmptyLogicTree);
    }

    let mut mus = Vec::with_capacity(entries.len());
    let mut sigmas = Vec::with_capacity(entries.len());
    for entry in entries {
        let result = evaluate(
            registry,
            &ScenarioInput {
                code: entry.code.clone(),
                imt: scenario.imt.clone(),
                mag: scenario.mag,
                rrup,
                vs30: scenario.vs30,
                z1pt0: scenario.z1pt0,
                z2pt5: scenario.z2pt5,
                hypo_depth_km: scenario.hypo_depth_km,
            },
        )?;
        mus.push(result.mean);
        sigmas.push(result.stddevs.first().copied().unwrap_or(fallback_sigma_ln));
    }

    let weight_sum: f64 = entries.iter().map(|e| e.weight).sum();
    if !(weight_sum > 0.0) || !weight_sum.is_finite() {
        return Err(Error::ZeroWeightSum { sum: weight_sum });
    }

    let mut mu = 0.0;
    let mut var = 0.0;
    let mut normalized_weights = Vec::with_capacity(entries.len());
    for ((entry, m), s) in entries.iter().zip(&mus).zip(&sigmas) {
        let w = entry.weight / weight_sum;
        mu += w * m;
        var += w * s * s;
        normalized_weights.push(ModelWeight {
            code: entry.code.clone(),
            weight: w,
        });
    }
    let sigma = var.sqrt();

    debug!(members = entries.len(), rrup, mu, sigma, "combined logic tree");
    Ok(CombinedEstimate {
        mu,
        sigma,
        normalized_weights,
    })
}
