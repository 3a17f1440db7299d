//! Fuzz target for intensity-measure-type parsing.
//!
//! Arbitrary strings must parse or fail cleanly, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shake_gmm::Imt;

fuzz_target!(|data: &str| {
    if let Ok(imt) = Imt::parse(data) {
        // A successful parse must survive a display round trip.
        let shown = imt.to_string();
        assert!(Imt::parse(&shown).is_ok());
    }
});
