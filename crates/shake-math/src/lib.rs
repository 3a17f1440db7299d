//! Shake math utilities.

pub mod math;

pub use math::lognormal::*;
pub use math::normal::*;
pub use math::stats::*;
