//! Facade over the hazard core.
//!
//! The four operations callers get: model listing, parameter introspection,
//! single-scenario evaluation, and hazard-curve construction. The HTTP layer
//! (out of scope here) maps every request-category error to a bad-request
//! response carrying the specific message.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use shake_common::{EngineConfig, Result};
use shake_gmm::{GmmDescriptor, Registry, RequiredParams};

use crate::combine::{LogicTreeEntry, SharedScenario};
use crate::curve::{hazard_curve, HazardCurve};
use crate::evaluate::{evaluate, EvaluationResult, ScenarioInput};
use crate::mechanism::{list_mechanisms, Mechanism};

/// One hazard-curve request.
///
/// `imls` and `annual_rate` are optional; defaults come from the engine
/// config (a 20-point 0.01-1.0 g grid and 0.01/yr).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HazardCurveRequest {
    pub logic: Vec<LogicTreeEntry>,
    pub imt: String,
    pub mag: f64,
    pub rrup: Vec<f64>,
    pub vs30: f64,
    #[serde(default)]
    pub imls: Option<Vec<f64>>,
    #[serde(default)]
    pub z1pt0: Option<f64>,
    #[serde(default)]
    pub z2pt5: Option<f64>,
    #[serde(default)]
    pub annual_rate: Option<f64>,
}

/// The configured hazard engine.
pub struct HazardEngine {
    config: EngineConfig,
    registry: &'static Registry,
}

impl HazardEngine {
    pub fn new(config: EngineConfig) -> HazardEngine {
        HazardEngine {
            config,
            registry: Registry::global(),
        }
    }

    pub fn with_defaults() -> HazardEngine {
        HazardEngine::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// List model descriptors, optionally filtered by mechanism substring.
    pub fn list_models(&self, mechanism: Option<&str>) -> Vec<GmmDescriptor> {
        self.registry.list(mechanism)
    }

    /// Declared parameter requirements of one model.
    pub fn required_parameters(&self, code: &str) -> Result<RequiredParams> {
        self.registry.required_parameters(code)
    }

    /// The static mechanism catalog.
    pub fn mechanisms(&self) -> &'static [Mechanism] {
        list_mechanisms()
    }

    /// Evaluate one model for one scenario.
    pub fn evaluate(&self, scenario: &ScenarioInput) -> Result<EvaluationResult> {
        evaluate(self.registry, scenario)
    }

    /// Build a hazard curve for a weighted logic tree.
    pub fn hazard_curve(&self, request: &HazardCurveRequest) -> Result<HazardCurve> {
        let scenario = SharedScenario {
            imt: request.imt.clone(),
            mag: request.mag,
            vs30: request.vs30,
            z1pt0: request.z1pt0,
            z2pt5: request.z2pt5,
            hypo_depth_km: self.config.hypo_depth_km,
        };
        let imls = request
            .imls
            .as_deref()
            .unwrap_or(&self.config.default_imls);
        let annual_rate = request
            .annual_rate
            .unwrap_or(self.config.default_annual_rate);
        hazard_curve(
            self.registry,
            &request.logic,
            &scenario,
            &request.rrup,
            imls,
            annual_rate,
            self.config.fallback_sigma_ln,
        )
    }
}
