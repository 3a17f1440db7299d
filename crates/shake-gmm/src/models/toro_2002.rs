//! Toro et al. (2002) for stable continental regions (hard rock).
//!
//! ```text
//! ln Y = c1 + c2·(M - 6) + c3·(M - 6)^2 - c4·ln Rm
//!        - (c5 - c4)·max(ln(Rm / 100), 0) - c6·Rm
//! Rm   = sqrt(rjb^2 + c7^2)
//! ```
//!
//! The published form is defined on the Joyner-Boore distance, which the
//! single-point evaluator cannot synthesize. The model is registered anyway
//! so listings cover stable continental crust; evaluating it reports the
//! missing distance measure explicitly.

use crate::imt::Imt;
use crate::model::{
    DistanceContext, GroundMotionModel, ParamRequirements, RuptureContext, SiteContext, StdDevType,
};
use crate::region::TectonicRegion;
use shake_common::{Error, Result};

/// Per-period coefficients (mid-continent, hard rock).
struct Coeffs {
    period: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    c4: f64,
    c5: f64,
    c6: f64,
    c7: f64,
    sigma: f64,
}

const TABLE: [Coeffs; 3] = [
    Coeffs {
        period: 0.0,
        c1: 2.20, c2: 0.81, c3: 0.00, c4: 1.27, c5: 1.16, c6: 0.0021, c7: 9.3,
        sigma: 0.75,
    },
    Coeffs {
        period: 0.2,
        c1: 2.25, c2: 0.85, c3: 0.00, c4: 1.15, c5: 1.01, c6: 0.0016, c7: 8.8,
        sigma: 0.78,
    },
    Coeffs {
        period: 1.0,
        c1: 0.10, c2: 1.42, c3: -0.20, c4: 0.90, c5: 0.88, c6: 0.0006, c7: 6.8,
        sigma: 0.80,
    },
];

fn coeffs_for(imt: &Imt) -> Option<&'static Coeffs> {
    TABLE.iter().find(|c| (c.period - imt.period()).abs() < 1e-9)
}

pub struct ToroEtAl2002;

impl GroundMotionModel for ToroEtAl2002 {
    fn code(&self) -> &'static str {
        "ToroEtAl2002"
    }

    fn description(&self) -> &'static str {
        "Toro et al. (2002) ground motion model for central and eastern North America (mid-continent hard rock)"
    }

    fn tectonic_region(&self) -> TectonicRegion {
        TectonicRegion::StableContinental
    }

    fn requirements(&self) -> Option<ParamRequirements> {
        Some(ParamRequirements {
            sites: &[],
            rupture: &["mag"],
            distances: &["rjb"],
        })
    }

    fn mean_and_stddevs(
        &self,
        _site: &SiteContext,
        rupture: &RuptureContext,
        distances: &DistanceContext,
        imt: &Imt,
        stddev_types: &[StdDevType],
    ) -> Result<(f64, Vec<f64>)> {
        let rjb = distances.rjb.ok_or_else(|| Error::UnsupportedParameters {
            code: self.code().to_string(),
            missing: vec!["rjb".to_string()],
        })?;
        let c = coeffs_for(imt).ok_or_else(|| Error::UnsupportedImt {
            code: self.code().to_string(),
            imt: imt.to_string(),
        })?;

        let dm = rupture.mag - 6.0;
        let rm = (rjb * rjb + c.c7 * c.c7).sqrt();
        let mean = c.c1 + c.c2 * dm + c.c3 * dm * dm
            - c.c4 * rm.ln()
            - (c.c5 - c.c4) * (rm / 100.0).ln().max(0.0)
            - c.c6 * rm;

        let stddevs = stddev_types.iter().map(|_| c.sigma).collect();
        Ok((mean, stddevs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_when_rjb_is_supplied() {
        let site = SiteContext { vs30: 2000.0, vs30_measured: false, z1pt0: None, z2pt5: None };
        let rup = RuptureContext {
            mag: 6.0,
            hypo_depth_km: 10.0,
            region: TectonicRegion::StableContinental,
        };
        let dx = DistanceContext { rjb: Some(40.0), ..Default::default() };
        let (mean, stds) = ToroEtAl2002
            .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
            .unwrap();
        assert!(mean.is_finite());
        assert!((stds[0] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rrup_only_context_is_rejected() {
        let site = SiteContext { vs30: 2000.0, vs30_measured: false, z1pt0: None, z2pt5: None };
        let rup = RuptureContext {
            mag: 6.0,
            hypo_depth_km: 10.0,
            region: TectonicRegion::StableContinental,
        };
        let dx = DistanceContext { rrup: Some(40.0), ..Default::default() };
        let err = ToroEtAl2002
            .mean_and_stddevs(&site, &rup, &dx, &Imt::Pga, &[StdDevType::Total])
            .unwrap_err();
        match err {
            Error::UnsupportedParameters { missing, .. } => assert_eq!(missing, vec!["rjb"]),
            other => panic!("unexpected error {other}"),
        }
    }
}
