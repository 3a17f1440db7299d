//! Stub ground-motion models for unit tests.
//!
//! These cover behaviors no built-in model exhibits: partial stddev sets and
//! degenerate zero sigma.

use std::sync::Arc;

use shake_common::Result;
use shake_gmm::{
    DistanceContext, GroundMotionModel, Imt, ParamRequirements, Registry, RuptureContext,
    SiteContext, StdDevType, TectonicRegion,
};

const REQUIREMENTS: ParamRequirements = ParamRequirements {
    sites: &["vs30"],
    rupture: &["mag"],
    distances: &["rrup"],
};

fn stub_mean(rupture: &RuptureContext, distances: &DistanceContext) -> f64 {
    let rrup = distances.rrup.unwrap_or(1.0);
    -2.0 + 0.4 * rupture.mag - 0.8 * (rrup + 1.0).ln()
}

macro_rules! stub_model {
    ($name:ident, $code:literal, $stddevs:expr) => {
        pub struct $name;

        impl GroundMotionModel for $name {
            fn code(&self) -> &'static str {
                $code
            }
            fn description(&self) -> &'static str {
                concat!("test stub ", $code)
            }
            fn tectonic_region(&self) -> TectonicRegion {
                TectonicRegion::ActiveShallowCrust
            }
            fn requirements(&self) -> Option<ParamRequirements> {
                Some(REQUIREMENTS)
            }
            fn mean_and_stddevs(
                &self,
                _site: &SiteContext,
                rupture: &RuptureContext,
                distances: &DistanceContext,
                _imt: &Imt,
                _stddev_types: &[StdDevType],
            ) -> Result<(f64, Vec<f64>)> {
                Ok((stub_mean(rupture, distances), $stddevs))
            }
        }
    };
}

stub_model!(FixedModel, "FixedModel", vec![0.5]);
stub_model!(NoStddevModel, "NoStddevModel", Vec::new());
stub_model!(ZeroSigmaModel, "ZeroSigmaModel", vec![0.0]);

/// Registry over the stub set only.
pub fn test_registry() -> Registry {
    Registry::new(vec![
        Arc::new(FixedModel),
        Arc::new(NoStddevModel),
        Arc::new(ZeroSigmaModel),
    ])
}
