//! Cartesian spacecraft state.

use serde::{Deserialize, Serialize};
use crate::vec3;

/// Cartesian state vector in an inertial frame.
///
/// A plain value type: integrator steps construct a fresh state per
/// step rather than mutating a shared one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StateVector {
    /// Position (km): [x, y, z]
    pub r: [f64; 3],
    /// Velocity (km/s): [vx, vy, vz]
    pub v: [f64; 3],
    /// Epoch (seconds since reference)
    pub epoch: f64,
}

impl StateVector {
    /// Construct from position/velocity components at a given epoch.
    pub fn new(r: [f64; 3], v: [f64; 3], epoch: f64) -> Self {
        StateVector { r, v, epoch }
    }

    /// Position magnitude (km).
    pub fn r_mag(&self) -> f64 {
        vec3::norm(&self.r)
    }

    /// Velocity magnitude (km/s).
    pub fn v_mag(&self) -> f64 {
        vec3::norm(&self.v)
    }

    /// Specific orbital energy (km²/s²) about a center with parameter μ.
    pub fn energy(&self, mu: f64) -> f64 {
        self.v_mag().powi(2) / 2.0 - mu / self.r_mag()
    }

    /// Semi-major axis from vis-viva (km).
    pub fn sma(&self, mu: f64) -> f64 {
        -mu / (2.0 * self.energy(mu))
    }

    /// Flatten into the 6-vector layout used by the integrator.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.r[0], self.r[1], self.r[2],
            self.v[0], self.v[1], self.v[2],
        ]
    }

    /// Rebuild from the integrator's 6-vector layout.
    pub fn from_array(y: &[f64; 6], epoch: f64) -> Self {
        StateVector {
            r: [y[0], y[1], y[2]],
            v: [y[3], y[4], y[5]],
            epoch,
        }
    }
}
