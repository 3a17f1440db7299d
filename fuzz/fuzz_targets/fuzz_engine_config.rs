//! Fuzz target for engine configuration parsing.
//!
//! Arbitrary JSON must parse or error, and anything that parses must
//! validate without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shake_common::EngineConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<EngineConfig>(data) {
        let _ = config.validate();
    }
});
