//! Static mechanism catalog.

use serde::Serialize;

/// One tectonic mechanism with its display label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Mechanism {
    pub id: &'static str,
    pub label: &'static str,
}

/// The five supported mechanisms, in catalog order.
pub const MECHANISMS: [Mechanism; 5] = [
    Mechanism {
        id: "Active Shallow Crust",
        label: "Active Shallow Crust (Strike-Slip/Normal/Reverse)",
    },
    Mechanism {
        id: "Stable Continental Crust",
        label: "Stable Continental Crust",
    },
    Mechanism {
        id: "Subduction Interface",
        label: "Subduction Interface",
    },
    Mechanism {
        id: "Subduction IntraSlab",
        label: "Subduction IntraSlab (Benioff)",
    },
    Mechanism {
        id: "Background Source",
        label: "Background Source",
    },
];

/// Read-only view of the catalog.
pub fn list_mechanisms() -> &'static [Mechanism] {
    &MECHANISMS
}
