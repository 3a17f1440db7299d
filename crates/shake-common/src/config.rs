//! Engine configuration loading and validation.
//!
//! Resolution order follows CLI → env (`SHAKE_CONFIG`) → built-in defaults.
//! The file format is JSON with every field optional, so a partial override
//! file only has to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Environment variable naming an engine config file.
pub const CONFIG_ENV_VAR: &str = "SHAKE_CONFIG";

/// Tunable constants of the hazard pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stand-in total sigma (ln units) when a model returns no stddevs.
    pub fallback_sigma_ln: f64,

    /// Poisson occurrence rate used when the caller does not supply one.
    pub default_annual_rate: f64,

    /// Hypocentral depth (km) of the synthesized point rupture.
    pub hypo_depth_km: f64,

    /// Intensity-measure levels used when the caller supplies none.
    pub default_imls: Vec<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            fallback_sigma_ln: 0.6,
            default_annual_rate: 0.01,
            hypo_depth_km: 10.0,
            default_imls: default_iml_grid(),
        }
    }
}

/// 20 evenly spaced levels from 0.01 g to 1.0 g.
fn default_iml_grid() -> Vec<f64> {
    let n = 20usize;
    let (lo, hi) = (0.01, 1.0);
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

impl EngineConfig {
    /// Semantic validation beyond what serde enforces.
    pub fn validate(&self) -> Result<()> {
        if !(self.fallback_sigma_ln > 0.0) || !self.fallback_sigma_ln.is_finite() {
            return Err(Error::Config(format!(
                "fallback_sigma_ln must be positive and finite, got {}",
                self.fallback_sigma_ln
            )));
        }
        if !(self.default_annual_rate > 0.0) || !self.default_annual_rate.is_finite() {
            return Err(Error::Config(format!(
                "default_annual_rate must be positive and finite, got {}",
                self.default_annual_rate
            )));
        }
        if !self.hypo_depth_km.is_finite() || self.hypo_depth_km < 0.0 {
            return Err(Error::Config(format!(
                "hypo_depth_km must be non-negative and finite, got {}",
                self.hypo_depth_km
            )));
        }
        if self.default_imls.is_empty() {
            return Err(Error::Config("default_imls must not be empty".into()));
        }
        if self.default_imls.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::Config(
                "default_imls must be strictly ascending".into(),
            ));
        }
        if self.default_imls.iter().any(|x| !(*x > 0.0) || !x.is_finite()) {
            return Err(Error::Config(
                "default_imls must contain only positive finite values".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// Resolve the engine config: explicit path, then `SHAKE_CONFIG`, then defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = path {
        return EngineConfig::from_file(path);
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if !env_path.is_empty() {
            return EngineConfig::from_file(Path::new(&env_path));
        }
    }
    Ok(EngineConfig::default())
}
