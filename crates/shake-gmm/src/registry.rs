//! Static model registry with exact-code resolution.
//!
//! Populated once from `models::builtin_models()` behind a `OnceLock`; the
//! map doubles as the read-through cache (lookups are repeated, the set is
//! size-bounded, and there is no invalidation). Races on first access are
//! benign: every initializer produces the same table.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{GmmDescriptor, GroundMotionModel};
use crate::models::builtin_models;
use shake_common::{Error, Result};

static GLOBAL: OnceLock<Registry> = OnceLock::new();
static YEAR_RE: OnceLock<Regex> = OnceLock::new();

fn year_regex() -> &'static Regex {
    // Publication years live in the model code or its description.
    YEAR_RE.get_or_init(|| Regex::new(r"(19|20)\d{2}").expect("static regex"))
}

/// Declared parameter requirements in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RequiredParams {
    pub sites: Vec<String>,
    pub rupture: Vec<String>,
    pub distances: Vec<String>,
}

/// Process-wide table of registered ground-motion models.
pub struct Registry {
    by_code: BTreeMap<&'static str, Arc<dyn GroundMotionModel>>,
}

impl Registry {
    /// Build a registry over an explicit model set (tests use this).
    pub fn new(models: Vec<Arc<dyn GroundMotionModel>>) -> Registry {
        let mut by_code = BTreeMap::new();
        for model in models {
            by_code.insert(model.code(), model);
        }
        Registry { by_code }
    }

    /// The shared registry over the built-in model set.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(builtin_models()))
    }

    /// Resolve a model by exact code.
    pub fn resolve(&self, code: &str) -> Result<Arc<dyn GroundMotionModel>> {
        self.by_code
            .get(code)
            .cloned()
            .ok_or_else(|| Error::NotFound { code: code.to_string() })
    }

    /// List descriptors, optionally filtered by a case-insensitive substring
    /// of the tectonic-region label, sorted by (tectonic_region, code).
    pub fn list(&self, mechanism: Option<&str>) -> Vec<GmmDescriptor> {
        let needle = mechanism.map(str::to_lowercase);
        let mut out: Vec<GmmDescriptor> = self
            .by_code
            .values()
            .map(|m| self.describe(m.as_ref()))
            .filter(|d| match &needle {
                Some(n) => d.tectonic_region.to_lowercase().contains(n),
                None => true,
            })
            .collect();
        out.sort_by(|a, b| {
            (a.tectonic_region.as_str(), a.id.as_str())
                .cmp(&(b.tectonic_region.as_str(), b.id.as_str()))
        });
        out
    }

    /// Declared parameter requirements for one model.
    pub fn required_parameters(&self, code: &str) -> Result<RequiredParams> {
        let model = self.resolve(code)?;
        Ok(self.requirements_of(model.as_ref()))
    }

    fn requirements_of(&self, model: &dyn GroundMotionModel) -> RequiredParams {
        match model.requirements() {
            Some(req) => RequiredParams {
                sites: req.sites.iter().map(|s| s.to_string()).collect(),
                rupture: req.rupture.iter().map(|s| s.to_string()).collect(),
                distances: req.distances.iter().map(|s| s.to_string()).collect(),
            },
            None => {
                // Incomplete implementation; expose empty sets instead of
                // failing the whole listing.
                warn!(code = model.code(), "model does not declare parameter requirements");
                RequiredParams {
                    sites: Vec::new(),
                    rupture: Vec::new(),
                    distances: Vec::new(),
                }
            }
        }
    }

    fn describe(&self, model: &dyn GroundMotionModel) -> GmmDescriptor {
        let req = self.requirements_of(model);
        let year = year_regex()
            .find(model.code())
            .or_else(|| year_regex().find(model.description()))
            .and_then(|m| m.as_str().parse::<u16>().ok());
        GmmDescriptor {
            id: model.code().to_string(),
            name: model.code().to_string(),
            description: model.description().to_string(),
            tectonic_region: model.tectonic_region().label().to_string(),
            year,
            req_site_params: req.sites,
            req_rupture_params: req.rupture,
            req_distances: req.distances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imt::Imt;
    use crate::model::{
        DistanceContext, ParamRequirements, RuptureContext, SiteContext, StdDevType,
    };
    use crate::region::TectonicRegion;

    #[test]
    fn global_lists_all_builtins_sorted() {
        let listed = Registry::global().list(None);
        assert_eq!(listed.len(), 5);
        let keys: Vec<(String, String)> = listed
            .iter()
            .map(|d| (d.tectonic_region.clone(), d.id.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn mechanism_filter_is_case_insensitive_substring() {
        let subduction = Registry::global().list(Some("subduction"));
        assert_eq!(subduction.len(), 2);
        assert!(subduction.iter().all(|d| d.tectonic_region.contains("Subduction")));

        let slab = Registry::global().list(Some("intraslab"));
        assert_eq!(slab.len(), 1);
        assert_eq!(slab[0].id, "YoungsEtAl1997SSlab");
    }

    #[test]
    fn resolve_unknown_code_is_not_found() {
        let err = Registry::global().resolve("NonexistentModel123").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn year_extracted_from_code() {
        let listed = Registry::global().list(None);
        let sadigh = listed.iter().find(|d| d.id == "SadighEtAl1997").unwrap();
        assert_eq!(sadigh.year, Some(1997));
    }

    #[test]
    fn required_parameters_pass_through() {
        let req = Registry::global().required_parameters("ToroEtAl2002").unwrap();
        assert!(req.sites.is_empty());
        assert_eq!(req.rupture, vec!["mag"]);
        assert_eq!(req.distances, vec!["rjb"]);
    }

    /// A model that declares nothing, standing in for an incomplete
    /// implementation whose requirement attributes cannot be read.
    struct Undeclared;

    impl GroundMotionModel for Undeclared {
        fn code(&self) -> &'static str {
            "Undeclared"
        }
        fn description(&self) -> &'static str {
            "test model without declared requirements"
        }
        fn tectonic_region(&self) -> TectonicRegion {
            TectonicRegion::Unknown
        }
        fn requirements(&self) -> Option<ParamRequirements> {
            None
        }
        fn mean_and_stddevs(
            &self,
            _site: &SiteContext,
            _rupture: &RuptureContext,
            _distances: &DistanceContext,
            _imt: &Imt,
            stddev_types: &[StdDevType],
        ) -> shake_common::Result<(f64, Vec<f64>)> {
            Ok((0.0, stddev_types.iter().map(|_| 0.5).collect()))
        }
    }

    #[test]
    fn undeclared_requirements_fall_back_to_empty_sets() {
        let registry = Registry::new(vec![Arc::new(Undeclared)]);
        let req = registry.required_parameters("Undeclared").unwrap();
        assert!(req.sites.is_empty());
        assert!(req.rupture.is_empty());
        assert!(req.distances.is_empty());

        // The scan itself never aborts on such a model.
        let listed = registry.list(None);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].tectonic_region, "Unknown");
        assert_eq!(listed[0].year, None);
    }
}
