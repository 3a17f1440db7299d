//! Core math modules.

pub mod lognormal;
pub mod normal;
pub mod stats;
