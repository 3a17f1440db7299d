//! Youngs et al. (1997) for subduction zones (rock).
//!
//! ```text
//! ln Sa = 0.2418 + 1.414·M + c1 + c2·(10 - M)^3
//!         + c3·ln(rrup + 1.7818·exp(0.554·M))
//!         + 0.00607·H + 0.3846·Zt
//! ```
//!
//! `H` is hypocentral depth in km; `Zt` is 0 for interface and 1 for
//! in-slab events. Total sigma is 1.45 - 0.1·M with magnitude capped at 8.
//! A generic soil amplification is applied below 360 m/s in place of the
//! paper's separate soil coefficient set.

use crate::imt::Imt;
use crate::model::{
    DistanceContext, GroundMotionModel, ParamRequirements, RuptureContext, SiteContext, StdDevType,
};
use crate::region::TectonicRegion;
use shake_common::{Error, Result};

const SOIL_VS30: f64 = 360.0;

/// Per-period coefficients (rock).
struct Coeffs {
    period: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    soil_amp: f64,
}

const TABLE: [Coeffs; 4] = [
    Coeffs { period: 0.0, c1: 0.000, c2: 0.0000, c3: -2.552, soil_amp: 0.14 },
    Coeffs { period: 0.2, c1: 0.722, c2: -0.0027, c3: -2.528, soil_amp: 0.17 },
    Coeffs { period: 1.0, c1: -1.149, c2: -0.0048, c3: -2.234, soil_amp: 0.31 },
    Coeffs { period: 2.0, c1: -2.634, c2: -0.0033, c3: -2.036, soil_amp: 0.37 },
];

fn coeffs_for(imt: &Imt) -> Option<&'static Coeffs> {
    TABLE.iter().find(|c| (c.period - imt.period()).abs() < 1e-9)
}

const REQUIREMENTS: ParamRequirements = ParamRequirements {
    sites: &["vs30"],
    rupture: &["mag", "hypo_depth"],
    distances: &["rrup"],
};

fn mean_and_stddevs(
    code: &'static str,
    zt: f64,
    site: &SiteContext,
    rupture: &RuptureContext,
    distances: &DistanceContext,
    imt: &Imt,
    stddev_types: &[StdDevType],
) -> Result<(f64, Vec<f64>)> {
    let rrup = distances.rrup.ok_or_else(|| Error::UnsupportedParameters {
        code: code.to_string(),
        missing: vec!["rrup".to_string()],
    })?;
    let c = coeffs_for(imt).ok_or_else(|| Error::UnsupportedImt {
        code: code.to_string(),
        imt: imt.to_string(),
    })?;

    let mag = rupture.mag;
    let mut mean = 0.2418 + 1.414 * mag + c.c1
        + c.c2 * (10.0 - mag).max(0.0).powi(3)
        + c.c3 * (rrup + 1.7818 * (0.554 * mag).exp()).ln()
        + 0.00607 * rupture.hypo_depth_km
        + 0.3846 * zt;
    if site.vs30 < SOIL_VS30 {
        mean += c.soil_amp;
    }

    let sigma = 1.45 - 0.1 * mag.min(8.0);
    let stddevs = stddev_types.iter().map(|_| sigma).collect();
    Ok((mean, stddevs))
}

pub struct YoungsEtAl1997SInter;

impl GroundMotionModel for YoungsEtAl1997SInter {
    fn code(&self) -> &'static str {
        "YoungsEtAl1997SInter"
    }

    fn description(&self) -> &'static str {
        "Youngs et al. (1997) strong ground motion attenuation relationship for subduction interface earthquakes"
    }

    fn tectonic_region(&self) -> TectonicRegion {
        TectonicRegion::SubductionInterface
    }

    fn requirements(&self) -> Option<ParamRequirements> {
        Some(REQUIREMENTS)
    }

    fn mean_and_stddevs(
        &self,
        site: &SiteContext,
        rupture: &RuptureContext,
        distances: &DistanceContext,
        imt: &Imt,
        stddev_types: &[StdDevType],
    ) -> Result<(f64, Vec<f64>)> {
        mean_and_stddevs(self.code(), 0.0, site, rupture, distances, imt, stddev_types)
    }
}

pub struct YoungsEtAl1997SSlab;

impl GroundMotionModel for YoungsEtAl1997SSlab {
    fn code(&self) -> &'static str {
        "YoungsEtAl1997SSlab"
    }

    fn description(&self) -> &'static str {
        "Youngs et al. (1997) strong ground motion attenuation relationship for subduction in-slab (Benioff) earthquakes"
    }

    fn tectonic_region(&self) -> TectonicRegion {
        TectonicRegion::SubductionIntraSlab
    }

    fn requirements(&self) -> Option<ParamRequirements> {
        Some(REQUIREMENTS)
    }

    fn mean_and_stddevs(
        &self,
        site: &SiteContext,
        rupture: &RuptureContext,
        distances: &DistanceContext,
        imt: &Imt,
        stddev_types: &[StdDevType],
    ) -> Result<(f64, Vec<f64>)> {
        mean_and_stddevs(self.code(), 1.0, site, rupture, distances, imt, stddev_types)
    }
}
