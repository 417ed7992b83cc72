//! Boundary-state sources for transfer design.
//!
//! The core never manages ephemeris kernels or sessions; it consumes an
//! [`EphemerisSource`] purely as a supplier of position/velocity states
//! at requested times. [`ElementsEphemeris`] is a reference
//! implementation backed by a per-body orbital element table around one
//! central body, propagated analytically via Kepler's equation.

use std::collections::HashMap;
use thiserror::Error;

use crate::bodies::{body, BodyId};
use crate::elements::{mean_to_true_anomaly, true_to_mean_anomaly, OrbitalElements};
use crate::state::StateVector;

/// Inertial reference frame tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Ecliptic and equinox of J2000.
    EclipJ2000,
    /// Earth mean equator and equinox of J2000.
    J2000,
}

/// Ephemeris lookup errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("no ephemeris entry for body {0:?}")]
    UnknownBody(BodyId),

    #[error("observer {requested:?} not supported, source is centered on {center:?}")]
    UnsupportedObserver { requested: BodyId, center: BodyId },

    #[error("frame {requested:?} not supported, source provides {available:?}")]
    UnsupportedFrame { requested: Frame, available: Frame },
}

/// A source of body states at requested times.
///
/// Implementations return one state per requested time, in order, in
/// the requested frame relative to the observer. Kernel loading and
/// session management are the implementation's concern, not the core's.
pub trait EphemerisSource {
    fn states_at(
        &self,
        target: BodyId,
        times: &[f64],
        frame: Frame,
        observer: BodyId,
    ) -> Result<Vec<StateVector>, EphemerisError>;
}

/// Element-table ephemeris around a single central body.
///
/// Each entry holds the body's osculating elements at a reference
/// epoch; states are produced by advancing the mean anomaly at the
/// two-body mean motion and solving Kepler's equation. Adequate for
/// transfer studies and tests; not a substitute for a real kernel.
pub struct ElementsEphemeris {
    center: BodyId,
    frame: Frame,
    entries: HashMap<BodyId, (OrbitalElements, f64)>,
}

impl ElementsEphemeris {
    pub fn new(center: BodyId, frame: Frame) -> Self {
        ElementsEphemeris {
            center,
            frame,
            entries: HashMap::new(),
        }
    }

    /// Register a body's elements at a reference epoch (seconds).
    pub fn with_body(mut self, id: BodyId, elements: OrbitalElements, epoch: f64) -> Self {
        self.entries.insert(id, (elements, epoch));
        self
    }

    fn state_at(&self, elements: &OrbitalElements, epoch: f64, t: f64) -> StateVector {
        let mu = body(self.center).mu;
        let e = elements.e.abs();
        let n = (mu / elements.a.powi(3)).sqrt();

        // Advance the mean anomaly, then recover true anomaly.
        let radians = canonical(elements);
        let m0 = true_to_mean_anomaly(radians.nu, e);
        let m = m0 + n * (t - epoch);
        let nu = mean_to_true_anomaly(m, e, 1e-12, 50);

        let mut sv = OrbitalElements { nu, ..radians }.to_state(mu);
        sv.epoch = t;
        sv
    }
}

/// Elements with all angular fields in radians.
fn canonical(elements: &OrbitalElements) -> OrbitalElements {
    use crate::constants::DEG2RAD;
    use crate::elements::AngleUnit;

    match elements.unit {
        AngleUnit::Radians => *elements,
        AngleUnit::Degrees => OrbitalElements {
            i: elements.i * DEG2RAD,
            raan: elements.raan * DEG2RAD,
            aop: elements.aop * DEG2RAD,
            nu: elements.nu * DEG2RAD,
            unit: AngleUnit::Radians,
            ..*elements
        },
    }
}

impl EphemerisSource for ElementsEphemeris {
    fn states_at(
        &self,
        target: BodyId,
        times: &[f64],
        frame: Frame,
        observer: BodyId,
    ) -> Result<Vec<StateVector>, EphemerisError> {
        if observer != self.center {
            return Err(EphemerisError::UnsupportedObserver {
                requested: observer,
                center: self.center,
            });
        }
        if frame != self.frame {
            return Err(EphemerisError::UnsupportedFrame {
                requested: frame,
                available: self.frame,
            });
        }
        let (elements, epoch) = self
            .entries
            .get(&target)
            .ok_or(EphemerisError::UnknownBody(target))?;

        Ok(times
            .iter()
            .map(|&t| self.state_at(elements, *epoch, t))
            .collect())
    }
}
