//! JSON Schema generation for agent-facing output types.
//!
//! Schemas let agents validate shake output and generate consuming code.
//!
//! ```bash
//! # List available schema types
//! shake schema --list
//!
//! # Generate schema for a specific type
//! shake schema HazardCurve
//!
//! # Generate all schemas
//! shake schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::api::HazardCurveRequest;
pub use crate::combine::{CombinedEstimate, LogicTreeEntry};
pub use crate::curve::{CurveMeta, HazardCurve};
pub use crate::evaluate::{EvaluationResult, ScenarioInput};
pub use shake_gmm::{GmmDescriptor, RequiredParams};

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("GmmDescriptor", "Ground-motion model metadata"),
        ("RequiredParams", "Declared parameter requirements of a model"),
        ("ScenarioInput", "Single-scenario evaluation request"),
        ("EvaluationResult", "Mean ln(intensity) and stddevs"),
        ("LogicTreeEntry", "One weighted logic-tree member"),
        ("CombinedEstimate", "Weighted (mu, sigma) with normalized weights"),
        ("HazardCurveRequest", "Hazard-curve request"),
        ("HazardCurve", "Intensity levels with annual exceedance probabilities"),
        ("CurveMeta", "Effective moments and rate behind a curve"),
    ]
}

/// Generate the schema for one type name, if known.
pub fn schema_by_name(name: &str) -> Option<Value> {
    let schema = match name {
        "GmmDescriptor" => schema_for!(GmmDescriptor),
        "RequiredParams" => schema_for!(RequiredParams),
        "ScenarioInput" => schema_for!(ScenarioInput),
        "EvaluationResult" => schema_for!(EvaluationResult),
        "LogicTreeEntry" => schema_for!(LogicTreeEntry),
        "CombinedEstimate" => schema_for!(CombinedEstimate),
        "HazardCurveRequest" => schema_for!(HazardCurveRequest),
        "HazardCurve" => schema_for!(HazardCurve),
        "CurveMeta" => schema_for!(CurveMeta),
        _ => return None,
    };
    serde_json::to_value(schema).ok()
}

/// Generate every schema, keyed by type name.
pub fn all_schemas() -> BTreeMap<&'static str, Value> {
    available_schemas()
        .into_iter()
        .filter_map(|(name, _)| schema_by_name(name).map(|s| (name, s)))
        .collect()
}
