//! Classical orbital elements and conversion to Cartesian state.
//!
//! The converter normalizes its inputs (angle unit, eccentricity sign)
//! and hands the actual conic-to-Cartesian geometry to the standard
//! perifocal construction with a 3-1-3 rotation.

use serde::{Deserialize, Serialize};

use crate::constants::DEG2RAD;
use crate::state::StateVector;

/// Unit of the angular element fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// Classical (osculating) Keplerian orbital elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (km)
    pub a: f64,
    /// Eccentricity (dimensionless; stored sign is discarded on use)
    pub e: f64,
    /// Inclination
    pub i: f64,
    /// Right ascension of ascending node
    pub raan: f64,
    /// Argument of periapsis
    pub aop: f64,
    /// True anomaly
    pub nu: f64,
    /// Unit of the angular fields above
    pub unit: AngleUnit,
}

impl OrbitalElements {
    /// Convert to a Cartesian state about a center with parameter μ.
    ///
    /// Angles are converted to radians when the unit flag says degrees,
    /// eccentricity is forced to its non-negative magnitude, and the
    /// periapsis radius is derived as |a·(1−e)| before the conic
    /// geometry is evaluated. The resulting epoch is 0.
    pub fn to_state(&self, mu: f64) -> StateVector {
        let k = match self.unit {
            AngleUnit::Degrees => DEG2RAD,
            AngleUnit::Radians => 1.0,
        };
        let e = self.e.abs();
        let rp = (self.a * (1.0 - e)).abs();
        conic_to_cartesian(rp, e, self.i * k, self.raan * k, self.aop * k, self.nu * k, mu)
    }
}

/// Conic-to-Cartesian geometry: perifocal construction rotated into the
/// inertial frame (3-1-3 rotation by RAAN, inclination, AOP).
///
/// Parameterized by periapsis radius so parabolic inputs (e = 1) stay
/// well defined.
pub fn conic_to_cartesian(
    rp: f64,
    e: f64,
    i: f64,
    raan: f64,
    aop: f64,
    nu: f64,
    mu: f64,
) -> StateVector {
    // Semi-latus rectum from the periapsis radius.
    let p = rp * (1.0 + e);
    let r_pf = p / (1.0 + e * nu.cos());

    let r_pqw = [r_pf * nu.cos(), r_pf * nu.sin(), 0.0];
    let v_factor = (mu / p).sqrt();
    let v_pqw = [v_factor * (-nu.sin()), v_factor * (e + nu.cos()), 0.0];

    let cos_raan = raan.cos();
    let sin_raan = raan.sin();
    let cos_aop = aop.cos();
    let sin_aop = aop.sin();
    let cos_i = i.cos();
    let sin_i = i.sin();

    let rot = [
        [
            cos_raan * cos_aop - sin_raan * sin_aop * cos_i,
            -cos_raan * sin_aop - sin_raan * cos_aop * cos_i,
            sin_raan * sin_i,
        ],
        [
            sin_raan * cos_aop + cos_raan * sin_aop * cos_i,
            -sin_raan * sin_aop + cos_raan * cos_aop * cos_i,
            -cos_raan * sin_i,
        ],
        [sin_aop * sin_i, cos_aop * sin_i, cos_i],
    ];

    let mut r = [0.0; 3];
    let mut v = [0.0; 3];
    for j in 0..3 {
        for k in 0..3 {
            r[j] += rot[j][k] * r_pqw[k];
            v[j] += rot[j][k] * v_pqw[k];
        }
    }

    StateVector { r, v, epoch: 0.0 }
}

/// Solve Kepler's equation M = E − e·sin(E) for the eccentric anomaly.
pub fn mean_to_eccentric_anomaly(m: f64, e: f64, tol: f64, max_iter: usize) -> f64 {
    // Newton-Raphson; start at pi for highly eccentric orbits.
    let mut ea = if e < 0.8 { m } else { std::f64::consts::PI };

    for _ in 0..max_iter {
        let f = ea - e * ea.sin() - m;
        let fp = 1.0 - e * ea.cos();
        let delta = f / fp;
        ea -= delta;
        if delta.abs() < tol {
            break;
        }
    }
    ea
}

/// Convert mean anomaly to true anomaly.
pub fn mean_to_true_anomaly(m: f64, e: f64, tol: f64, max_iter: usize) -> f64 {
    let ea = mean_to_eccentric_anomaly(m, e, tol, max_iter);
    2.0 * ((1.0 + e).sqrt() * (ea / 2.0).sin()).atan2((1.0 - e).sqrt() * (ea / 2.0).cos())
}

/// Convert true anomaly to mean anomaly (closed form, elliptic only).
pub fn true_to_mean_anomaly(nu: f64, e: f64) -> f64 {
    let ea = 2.0 * ((1.0 - e).sqrt() * (nu / 2.0).sin()).atan2((1.0 + e).sqrt() * (nu / 2.0).cos());
    ea - e * ea.sin()
}
