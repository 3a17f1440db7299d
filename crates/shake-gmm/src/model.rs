//! The ground-motion model trait and its evaluation contexts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::imt::Imt;
use crate::region::TectonicRegion;
use shake_common::Result;

/// Standard deviation components a model can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdDevType {
    /// Total (aleatory) standard deviation.
    Total,
    /// Between-event component.
    InterEvent,
    /// Within-event component.
    IntraEvent,
}

/// Declared parameter requirements of a model.
///
/// Identifiers follow the conventional short names: site parameters like
/// `vs30`/`z1pt0`, rupture parameters like `mag`, distance measures like
/// `rrup`/`rjb`.
#[derive(Debug, Clone, Copy)]
pub struct ParamRequirements {
    pub sites: &'static [&'static str],
    pub rupture: &'static [&'static str],
    pub distances: &'static [&'static str],
}

/// Site conditions at the single evaluation point.
#[derive(Debug, Clone, Copy)]
pub struct SiteContext {
    /// Average shear-wave velocity in the top 30 m (m/s).
    pub vs30: f64,
    /// Whether vs30 was measured rather than inferred.
    pub vs30_measured: bool,
    /// Depth to the 1.0 km/s velocity horizon (km), if known.
    pub z1pt0: Option<f64>,
    /// Depth to the 2.5 km/s velocity horizon (km), if known.
    pub z2pt5: Option<f64>,
}

/// The synthesized point rupture.
#[derive(Debug, Clone, Copy)]
pub struct RuptureContext {
    /// Moment magnitude.
    pub mag: f64,
    /// Hypocentral depth (km).
    pub hypo_depth_km: f64,
    /// Tectonic region of the generating model.
    pub region: TectonicRegion,
}

/// Distance measures available for one evaluation.
///
/// Only measures the evaluator can synthesize are ever populated; a model
/// reads the measures it declared and errors if one is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceContext {
    /// Closest distance to the rupture surface (km).
    pub rrup: Option<f64>,
    /// Joyner-Boore distance (km).
    pub rjb: Option<f64>,
}

/// One ground-motion prediction equation.
///
/// Implementations are stateless and registered in
/// `models::builtin_models()`.
pub trait GroundMotionModel: Send + Sync {
    /// Unique model code, used for exact resolution.
    fn code(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// Tectonic region the model is defined for.
    fn tectonic_region(&self) -> TectonicRegion;

    /// Declared parameter requirements.
    ///
    /// `None` means the implementation does not expose its requirements;
    /// the registry normalizes that to empty sets rather than failing.
    fn requirements(&self) -> Option<ParamRequirements>;

    /// Mean of ln(intensity) and the requested stddev components.
    ///
    /// The mean is in natural-log space of the intensity measure (g for
    /// PGA/SA). On success the stddev list is index-aligned with
    /// `stddev_types` and non-empty whenever `stddev_types` is.
    fn mean_and_stddevs(
        &self,
        site: &SiteContext,
        rupture: &RuptureContext,
        distances: &DistanceContext,
        imt: &Imt,
        stddev_types: &[StdDevType],
    ) -> Result<(f64, Vec<f64>)>;
}

impl std::fmt::Debug for dyn GroundMotionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroundMotionModel").field("code", &self.code()).finish()
    }
}

/// Serializable model metadata, as listed by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GmmDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tectonic_region: String,
    pub year: Option<u16>,
    pub req_site_params: Vec<String>,
    pub req_rupture_params: Vec<String>,
    pub req_distances: Vec<String>,
}
