//! Abrahamson & Silva (1997) for active shallow crust.
//!
//! Rock-site form of the base model:
//!
//! ```text
//! ln Sa = a1 + slope·(M - c1) + a12·(8.5 - M)^n + [a3 + a13·(M - c1)]·ln R
//! R     = sqrt(rrup^2 + c4^2)
//! ```
//!
//! with `slope = a2` below c1 and `a4` above. A linear vs30 term relative to
//! 760 m/s stands in for the paper's nonlinear soil response. Hanging-wall
//! and style-of-faulting terms are out of scope for the point-rupture
//! pipeline here.

use crate::imt::Imt;
use crate::model::{
    DistanceContext, GroundMotionModel, ParamRequirements, RuptureContext, SiteContext, StdDevType,
};
use crate::region::TectonicRegion;
use shake_common::{Error, Result};

const C1: f64 = 6.4;
const C4: f64 = 5.6;
const A2: f64 = 0.512;
const A4: f64 = -0.144;
const A13: f64 = 0.17;
const N: f64 = 2.0;
const B6: f64 = 0.135;
const VS30_REF: f64 = 760.0;
const SITE_SLOPE: f64 = -0.36;

/// Per-period coefficients (rock).
struct Coeffs {
    period: f64,
    a1: f64,
    a3: f64,
    a12: f64,
    b5: f64,
}

const TABLE: [Coeffs; 6] = [
    Coeffs { period: 0.0, a1: 1.640, a3: -1.145, a12: 0.0000, b5: 0.70 },
    Coeffs { period: 0.1, a1: 2.160, a3: -1.290, a12: 0.0280, b5: 0.74 },
    Coeffs { period: 0.2, a1: 2.406, a3: -1.200, a12: 0.0143, b5: 0.75 },
    Coeffs { period: 0.5, a1: 1.615, a3: -1.025, a12: -0.0112, b5: 0.75 },
    Coeffs { period: 1.0, a1: 0.828, a3: -0.898, a12: -0.0248, b5: 0.74 },
    Coeffs { period: 2.0, a1: -0.150, a3: -0.725, a12: -0.0357, b5: 0.72 },
];

fn coeffs_for(imt: &Imt) -> Option<&'static Coeffs> {
    TABLE.iter().find(|c| (c.period - imt.period()).abs() < 1e-9)
}

pub struct AbrahamsonSilva1997;

impl GroundMotionModel for AbrahamsonSilva1997 {
    fn code(&self) -> &'static str {
        "AbrahamsonSilva1997"
    }

    fn description(&self) -> &'static str {
        "Abrahamson & Silva (1997) empirical response spectral attenuation relation for shallow crustal earthquakes"
    }

    fn tectonic_region(&self) -> TectonicRegion {
        TectonicRegion::ActiveShallowCrust
    }

    fn requirements(&self) -> Option<ParamRequirements> {
        Some(ParamRequirements {
            sites: &["vs30"],
            rupture: &["mag"],
            distances: &["rrup"],
        })
    }

    fn mean_and_stddevs(
        &self,
        site: &SiteContext,
        rupture: &RuptureContext,
        distances: &DistanceContext,
        imt: &Imt,
        stddev_types: &[StdDevType],
    ) -> Result<(f64, Vec<f64>)> {
        let rrup = distances.rrup.ok_or_else(|| Error::UnsupportedParameters {
            code: self.code().to_string(),
            missing: vec!["rrup".to_string()],
        })?;
        let c = coeffs_for(imt).ok_or_else(|| Error::UnsupportedImt {
            code: self.code().to_string(),
            imt: imt.to_string(),
        })?;

        let mag = rupture.mag;
        let r = (rrup * rrup + C4 * C4).sqrt();
        let slope = if mag <= C1 { A2 } else { A4 };
        let mut mean = c.a1
            + slope * (mag - C1)
            + c.a12 * (8.5 - mag).max(0.0).powf(N)
            + (c.a3 + A13 * (mag - C1)) * r.ln();
        mean += SITE_SLOPE * (site.vs30 / VS30_REF).ln();

        let sigma = total_sigma(c.b5, mag);
        let stddevs = stddev_types
            .iter()
            .map(|t| match t {
                StdDevType::Total => sigma,
                // The published intra/inter split is not carried; report the
                // total for either component when asked.
                StdDevType::InterEvent | StdDevType::IntraEvent => sigma,
            })
            .collect();
        Ok((mean, stddevs))
    }
}

/// Magnitude-dependent total sigma: b5 flat below M5, linear taper to M7.
fn total_sigma(b5: f64, mag: f64) -> f64 {
    if mag <= 5.0 {
        b5
    } else if mag < 7.0 {
        b5 - B6 * (mag - 5.0)
    } else {
        b5 - 2.0 * B6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (SiteContext, RuptureContext, DistanceContext) {
        (
            SiteContext { vs30: 760.0, vs30_measured: false, z1pt0: None, z2pt5: None },
            RuptureContext {
                mag: 6.0,
                hypo_depth_km: 10.0,
                region: TectonicRegion::ActiveShallowCrust,
            },
            DistanceContext { rrup: Some(20.0), ..Default::default() },
        )
    }

    #[test]
    fn pga_mean_is_finite_and_sane() {
        let (site, rup, dx) = scenario();
        let (mean, stds) = AbrahamsonSilva1997
            .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
            .unwrap();
        assert!(mean.is_finite());
        // ln(PGA in g) for M6 at 20 km should land well below zero.
        assert!(mean < 0.0, "mean={mean}");
        assert_eq!(stds.len(), 1);
        assert!(stds[0] > 0.0);
    }

    #[test]
    fn mean_decays_with_distance() {
        let (site, rup, _) = scenario();
        let at = |rrup: f64| {
            let dx = DistanceContext { rrup: Some(rrup), ..Default::default() };
            AbrahamsonSilva1997
                .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
                .unwrap()
                .0
        };
        assert!(at(10.0) > at(50.0));
        assert!(at(50.0) > at(200.0));
    }

    #[test]
    fn mean_grows_with_magnitude() {
        let (site, _, dx) = scenario();
        let at = |mag: f64| {
            let rup = RuptureContext {
                mag,
                hypo_depth_km: 10.0,
                region: TectonicRegion::ActiveShallowCrust,
            };
            AbrahamsonSilva1997
                .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
                .unwrap()
                .0
        };
        assert!(at(7.0) > at(5.0));
    }

    #[test]
    fn softer_site_amplifies() {
        let (_, rup, dx) = scenario();
        let at = |vs30: f64| {
            let site = SiteContext { vs30, vs30_measured: false, z1pt0: None, z2pt5: None };
            AbrahamsonSilva1997
                .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
                .unwrap()
                .0
        };
        assert!(at(300.0) > at(760.0));
    }

    #[test]
    fn untabulated_period_is_rejected() {
        let (site, rup, dx) = scenario();
        let err = AbrahamsonSilva1997
            .mean_and_stddevs(&site, &rup, &dx, &Imt::Sa(0.33), &[StdDevType::Total])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedImt { .. }));
    }

    #[test]
    fn missing_rrup_is_rejected() {
        let (site, rup, _) = scenario();
        let err = AbrahamsonSilva1997
            .mean_and_stddevs(
                &site,
                &rup,
                &DistanceContext::default(),
                &Imt::Pga,
                &[StdDevType::Total],
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedParameters { .. }));
    }
}
