//! Ground-motion model library for shake.
//!
//! This crate provides:
//! - Intensity-measure-type parsing (`Imt`)
//! - Tectonic region classification (`TectonicRegion`)
//! - The `GroundMotionModel` trait and evaluation contexts
//! - Built-in model implementations with published coefficient tables
//! - A process-wide static registry with exact-code resolution
//!
//! Models are registered explicitly in `models::builtin_models()`; there is
//! no runtime discovery. The registry is populated once behind a `OnceLock`
//! and is read-only thereafter.

pub mod imt;
pub mod model;
pub mod models;
pub mod region;
pub mod registry;

pub use imt::Imt;
pub use model::{
    DistanceContext, GmmDescriptor, GroundMotionModel, ParamRequirements, RuptureContext,
    SiteContext, StdDevType,
};
pub use region::TectonicRegion;
pub use registry::{Registry, RequiredParams};
