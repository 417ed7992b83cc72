//! Gravitational body registry.
//!
//! A fixed set of immutable body records keyed by [`BodyId`]. The
//! registry is read-only: records are `'static` and never mutated after
//! process start. Some bodies lack a documented rotation frame, which is
//! expressed explicitly via `Option` rather than silent absence.

use serde::{Deserialize, Serialize};

/// Stable identifier for a registered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// An immutable gravitational body record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GravitationalBody {
    /// Display name.
    pub name: &'static str,
    /// Gravitational parameter μ = GM (km³/s²).
    pub mu: f64,
    /// Mean radius (km).
    pub radius: f64,
    /// Body-fixed rotation frame name, where one is documented.
    pub rotation_frame: Option<&'static str>,
}

const SUN: GravitationalBody = GravitationalBody {
    name: "Sun",
    mu: 1.32712440018e11,
    radius: 695_700.0,
    rotation_frame: None,
};

const MERCURY: GravitationalBody = GravitationalBody {
    name: "Mercury",
    mu: 2.2032e4,
    radius: 2439.7,
    rotation_frame: Some("IAU_MERCURY"),
};

const VENUS: GravitationalBody = GravitationalBody {
    name: "Venus",
    mu: 3.24859e5,
    radius: 6051.8,
    rotation_frame: Some("IAU_VENUS"),
};

const EARTH: GravitationalBody = GravitationalBody {
    name: "Earth",
    mu: 398600.4418,
    radius: 6378.137,
    rotation_frame: Some("IAU_EARTH"),
};

const MOON: GravitationalBody = GravitationalBody {
    name: "Moon",
    mu: 4902.800066,
    radius: 1737.4,
    rotation_frame: Some("IAU_MOON"),
};

const MARS: GravitationalBody = GravitationalBody {
    name: "Mars",
    mu: 4.282837e4,
    radius: 3389.5,
    rotation_frame: Some("IAU_MARS"),
};

const JUPITER: GravitationalBody = GravitationalBody {
    name: "Jupiter",
    mu: 1.26686534e8,
    radius: 69_911.0,
    rotation_frame: None,
};

const SATURN: GravitationalBody = GravitationalBody {
    name: "Saturn",
    mu: 3.7931187e7,
    radius: 58_232.0,
    rotation_frame: None,
};

const URANUS: GravitationalBody = GravitationalBody {
    name: "Uranus",
    mu: 5.793939e6,
    radius: 25_362.0,
    rotation_frame: None,
};

const NEPTUNE: GravitationalBody = GravitationalBody {
    name: "Neptune",
    mu: 6.836529e6,
    radius: 24_622.0,
    rotation_frame: None,
};

/// Look up a body record by identifier.
pub fn body(id: BodyId) -> &'static GravitationalBody {
    match id {
        BodyId::Sun => &SUN,
        BodyId::Mercury => &MERCURY,
        BodyId::Venus => &VENUS,
        BodyId::Earth => &EARTH,
        BodyId::Moon => &MOON,
        BodyId::Mars => &MARS,
        BodyId::Jupiter => &JUPITER,
        BodyId::Saturn => &SATURN,
        BodyId::Uranus => &URANUS,
        BodyId::Neptune => &NEPTUNE,
    }
}
