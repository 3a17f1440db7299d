//! Shake Core Library
//!
//! This library provides the probabilistic seismic hazard core:
//! - Single-scenario GMPE evaluation (mean and stddev of ln intensity)
//! - Logic-tree combination of weighted GMPEs
//! - Simplified lognormal hazard-curve integration
//! - Mechanism catalog and model parameter introspection
//!
//! All operations are synchronous, pure functions over their inputs; the
//! only process-wide state is the model registry in `shake-gmm`. The binary
//! entry point is in `main.rs`.

pub mod api;
pub mod combine;
pub mod curve;
pub mod evaluate;
pub mod logging;
pub mod mechanism;
pub mod schema;

#[cfg(test)]
pub mod test_models;

pub use api::{HazardCurveRequest, HazardEngine};
pub use combine::{combine, CombinedEstimate, LogicTreeEntry, SharedScenario};
pub use curve::{curve_from_moments, hazard_curve, CurveMeta, HazardCurve};
pub use evaluate::{evaluate, EvaluationResult, ScenarioInput};
pub use mechanism::{list_mechanisms, Mechanism};
