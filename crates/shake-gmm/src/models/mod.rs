//! Built-in ground-motion model implementations.
//!
//! One model (or family) per file, each carrying its own per-IMT coefficient
//! table. Coefficients follow the functional forms of the cited papers at a
//! handful of reference periods; see DESIGN.md for scope caveats.

pub mod abrahamson_silva_1997;
pub mod sadigh_1997;
pub mod toro_2002;
pub mod youngs_1997;

use std::sync::Arc;

use crate::model::GroundMotionModel;

/// The static registration table.
///
/// This is the single place a new model gets wired in; the registry never
/// discovers implementations by reflection.
pub fn builtin_models() -> Vec<Arc<dyn GroundMotionModel>> {
    vec![
        Arc::new(abrahamson_silva_1997::AbrahamsonSilva1997),
        Arc::new(sadigh_1997::SadighEtAl1997),
        Arc::new(youngs_1997::YoungsEtAl1997SInter),
        Arc::new(youngs_1997::YoungsEtAl1997SSlab),
        Arc::new(toro_2002::ToroEtAl2002),
    ]
}
