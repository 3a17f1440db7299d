//! Fuzz target for hazard-curve requests.
//!
//! Arbitrary request JSON must either build a curve or return a structured
//! error; the engine must never panic on caller input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shake_core::{HazardCurveRequest, HazardEngine};

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = serde_json::from_slice::<HazardCurveRequest>(data) {
        let engine = HazardEngine::with_defaults();
        let _ = engine.hazard_curve(&request);
    }
});
