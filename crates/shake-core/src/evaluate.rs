//! Single-scenario GMPE evaluation.
//!
//! Resolves one model, synthesizes the distance measures it declares (only
//! `rrup` today), builds a single-site point-rupture scenario, and returns
//! the mean of ln(intensity) with the total standard deviation. Pure and
//! deterministic; a failed evaluation is a request error, never retried.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shake_common::{Error, Result};
use shake_gmm::{DistanceContext, Imt, Registry, RuptureContext, SiteContext, StdDevType};

/// Default hypocentral depth (km) of the synthesized point rupture.
pub const DEFAULT_HYPO_DEPTH_KM: f64 = 10.0;

fn default_hypo_depth() -> f64 {
    DEFAULT_HYPO_DEPTH_KM
}

/// One evaluation request. Transient; constructed per call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioInput {
    /// Exact model code, e.g. `SadighEtAl1997`.
    pub code: String,
    /// Intensity measure type, e.g. `PGA` or `SA(0.2)`.
    pub imt: String,
    /// Moment magnitude.
    pub mag: f64,
    /// Rupture distance (km).
    pub rrup: f64,
    /// Site vs30 (m/s).
    pub vs30: f64,
    #[serde(default)]
    pub z1pt0: Option<f64>,
    #[serde(default)]
    pub z2pt5: Option<f64>,
    /// Hypocentral depth (km).
    #[serde(default = "default_hypo_depth")]
    pub hypo_depth_km: f64,
}

/// Mean of ln(intensity) plus the requested stddev components.
///
/// `stddevs` is non-empty whenever evaluation succeeds; index 0 is the
/// total component.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    pub mean: f64,
    pub stddevs: Vec<f64>,
}

/// Evaluate one model for one scenario.
pub fn evaluate(registry: &Registry, scenario: &ScenarioInput) -> Result<EvaluationResult> {
    let model = registry.resolve(&scenario.code)?;
    let imt = Imt::parse(&scenario.imt)?;

    let declared = registry.required_parameters(&scenario.code)?;
    let mut distances = DistanceContext::default();
    let mut missing: Vec<String> = Vec::new();
    for measure in &declared.distances {
        match measure.as_str() {
            "rrup" => distances.rrup = Some(scenario.rrup),
            other => missing.push(other.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(Error::UnsupportedParameters {
            code: scenario.code.clone(),
            missing,
        });
    }

    let site = SiteContext {
        vs30: scenario.vs30,
        vs30_measured: false,
        z1pt0: scenario.z1pt0,
        z2pt5: scenario.z2pt5,
    };
    let rupture = RuptureContext {
        mag: scenario.mag,
        hypo_depth_km: scenario.hypo_depth_km,
        region: model.tectonic_region(),
    };

    let (mean, stddevs) =
        model.mean_and_stddevs(&site, &rupture, &distances, &imt, &[StdDevType::Total])?;
    debug!(code = %scenario.code, imt = %imt, mean, "evaluated ground-motion model");
    Ok(EvaluationResult { mean, stddevs })
}
