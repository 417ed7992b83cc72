//! Two-body dynamics and trajectory propagation.
//!
//! The equations of motion are integrated in Cartesian coordinates as
//! a 6-vector [x, y, z, vx, vy, vz]: velocity components pass through
//! into the position slots of the derivative, and the acceleration is
//! the point-mass term −μ·r/‖r‖³.

use thiserror::Error;

use crate::integrator::{propagate_fixed, rk4_step};
use crate::state::StateVector;

/// Dynamics evaluation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DynamicsError {
    #[error("zero-norm position encountered during force evaluation")]
    SingularState,

    #[error("state became non-finite at t = {t} s")]
    NonFiniteState { t: f64 },
}

/// Two-body state derivative: dy/dt = [v, −μ·r/‖r‖³].
///
/// Fails with [`DynamicsError::SingularState`] if the position has zero
/// norm; this aborts the remaining trajectory.
pub fn two_body_derivative(_t: f64, y: &[f64; 6], mu: f64) -> Result<[f64; 6], DynamicsError> {
    let r_mag = (y[0].powi(2) + y[1].powi(2) + y[2].powi(2)).sqrt();
    if r_mag == 0.0 {
        return Err(DynamicsError::SingularState);
    }
    let r_mag3 = r_mag.powi(3);

    Ok([
        y[3],
        y[4],
        y[5],
        -mu * y[0] / r_mag3,
        -mu * y[1] / r_mag3,
        -mu * y[2] / r_mag3,
    ])
}

/// Propagate a state under two-body dynamics with a fixed step.
///
/// Applies RK4 across a pre-built time grid: `duration / step` whole
/// steps, followed by one shortened step when the duration is not an
/// exact multiple. The returned series starts at the initial state and
/// carries epochs forward from `initial.epoch`.
///
/// # Errors
///
/// Propagates [`DynamicsError`] out of the force evaluation; the series
/// is abandoned at the failing step.
pub fn propagate_two_body(
    initial: &StateVector,
    mu: f64,
    duration: f64,
    step: f64,
) -> Result<Vec<StateVector>, DynamicsError> {
    let f = |t: f64, y: &[f64; 6]| two_body_derivative(t, y, mu);
    let series = propagate_fixed(f, initial.to_array(), initial.epoch, duration, step)?;

    let states = series
        .into_iter()
        .map(|(t, y)| {
            if y.iter().all(|c| c.is_finite()) {
                Ok(StateVector::from_array(&y, t))
            } else {
                Err(DynamicsError::NonFiniteState { t })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(states)
}

/// Take a single RK4 step under two-body dynamics.
pub fn step_two_body(
    state: &StateVector,
    mu: f64,
    h: f64,
) -> Result<StateVector, DynamicsError> {
    let mut f = |t: f64, y: &[f64; 6]| two_body_derivative(t, y, mu);
    let y = rk4_step(&mut f, state.epoch, &state.to_array(), h)?;
    Ok(StateVector::from_array(&y, state.epoch + h))
}

/// Propagate many independent trajectories in parallel.
///
/// Each entry is a fully independent run over caller-owned inputs; the
/// output order matches the input order.
pub fn propagate_batch(
    initials: &[StateVector],
    mu: f64,
    duration: f64,
    step: f64,
) -> Vec<Result<Vec<StateVector>, DynamicsError>> {
    use rayon::prelude::*;

    initials
        .par_iter()
        .map(|sv| propagate_two_body(sv, mu, duration, step))
        .collect()
}
