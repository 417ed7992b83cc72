//! Universal-variable Lambert boundary-value solver.
//!
//! Given two position vectors and a transfer duration, finds the two
//! velocity vectors of the connecting conic arc by bisecting the
//! universal parameter ψ of the time-of-flight equation (Gauss-style
//! formulation with Stumpff functions C2, C3).
//!
//! The solver holds no state across calls: the bracket, ψ, and the
//! Stumpff values live in a loop-local record, so a solve is fully
//! reentrant and independent solves may run in parallel.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::bodies::{body, BodyId};
use crate::stumpff::{c2, c3};
use crate::vec3;

/// Transfer direction about the orbit normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Prograde transfer (direction multiplier +1).
    Prograde,
    /// Retrograde transfer (direction multiplier -1).
    Retrograde,
}

impl Direction {
    /// The transfer-direction multiplier tm.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Prograde => 1.0,
            Direction::Retrograde => -1.0,
        }
    }
}

/// Lambert solver errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LambertError {
    #[error("boundary vectors imply a singular ~180° transfer (A = 0)")]
    DegenerateGeometry,

    #[error("bisection did not converge within {steps} steps (tolerance {tol} s)")]
    Convergence { steps: usize, tol: f64 },

    #[error("gravitational parameter must be positive, got {0}")]
    NonPositiveMu(f64),

    #[error("boundary position vector has zero norm")]
    ZeroPosition,

    #[error("transfer duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}

/// Solver configuration.
///
/// All fields have defaults; callers override a subset via struct
/// update syntax:
///
/// ```
/// use talos::lambert::LambertConfig;
/// let config = LambertConfig {
///     tol: 1e-4,
///     ..LambertConfig::default()
/// };
/// ```
///
/// The configuration is never mutated during a solve; only a local
/// working copy of the ψ bracket changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LambertConfig {
    /// Transfer direction (prograde/retrograde).
    pub direction: Direction,
    /// Gravitational parameter of the central body (km³/s²).
    pub mu: f64,
    /// Convergence tolerance on the transfer time (s).
    pub tol: f64,
    /// Maximum bisection iterations.
    pub max_steps: usize,
    /// Initial universal parameter ψ.
    pub psi_init: f64,
    /// Lower bracket bound for ψ.
    pub psi_lower: f64,
    /// Upper bracket bound for ψ.
    pub psi_upper: f64,
}

impl Default for LambertConfig {
    fn default() -> Self {
        LambertConfig {
            direction: Direction::Prograde,
            mu: body(BodyId::Sun).mu,
            tol: 1e-6,
            max_steps: 200,
            psi_init: 0.0,
            psi_lower: -4.0 * PI * PI,
            psi_upper: 4.0 * PI * PI,
        }
    }
}

impl LambertConfig {
    /// Defaults with the gravitational parameter of a registered body.
    pub fn for_body(id: BodyId) -> Self {
        LambertConfig {
            mu: body(id).mu,
            ..LambertConfig::default()
        }
    }
}

/// A converged Lambert solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambertSolution {
    /// Velocity at the initial position (km/s).
    pub v0: [f64; 3],
    /// Velocity at the final position (km/s).
    pub v1: [f64; 3],
    /// Converged universal parameter ψ.
    pub psi: f64,
    /// Bisection iterations used.
    pub iterations: usize,
}

/// Loop-local iteration record: the ψ bracket and the Stumpff values
/// for the current ψ. Strictly local to one solve call.
struct Bracket {
    psi: f64,
    psi_lower: f64,
    psi_upper: f64,
    c2: f64,
    c3: f64,
}

/// Solve the Lambert boundary-value problem.
///
/// Given positions `r0`, `r1` (km) and a transfer duration `dt` (s),
/// returns the velocities of the conic arc connecting them under the
/// configured gravitational parameter.
///
/// # Errors
///
/// * [`LambertError::DegenerateGeometry`] if the boundary vectors are
///   anti-parallel (~180° transfer), where this formulation is
///   singular. Never silently returns a zero velocity pair.
/// * [`LambertError::Convergence`] if the iteration budget ran out
///   before the time-of-flight residual dropped below tolerance.
/// * Input validation failures for non-positive μ or duration and
///   zero-norm boundary vectors.
pub fn solve(
    r0: &[f64; 3],
    r1: &[f64; 3],
    dt: f64,
    config: &LambertConfig,
) -> Result<LambertSolution, LambertError> {
    if config.mu <= 0.0 {
        return Err(LambertError::NonPositiveMu(config.mu));
    }
    if dt <= 0.0 {
        return Err(LambertError::NonPositiveDuration(dt));
    }

    let r0n = vec3::norm(r0);
    let r1n = vec3::norm(r1);
    if r0n == 0.0 || r1n == 0.0 {
        return Err(LambertError::ZeroPosition);
    }

    // Swept-angle cosine and the geometry parameter A.
    let gamma = vec3::dot(r0, r1) / (r0n * r1n);
    let a = config.direction.sign() * (r0n * r1n * (1.0 + gamma)).sqrt();
    if a == 0.0 {
        return Err(LambertError::DegenerateGeometry);
    }

    let sqrt_mu = config.mu.sqrt();

    let mut st = Bracket {
        psi: config.psi_init,
        psi_lower: config.psi_lower,
        psi_upper: config.psi_upper,
        c2: 0.5,
        c3: 1.0 / 6.0,
    };

    let mut converged: Option<(f64, usize)> = None;
    let mut bracket_ordered = true;

    for step in 0..config.max_steps {
        let mut b = r0n + r1n + a * (st.psi * st.c3 - 1.0) / st.c2.sqrt();

        // Branch correction: a straightforward bracket can land on a
        // non-physical negative B. Widening the lower bound by a full π
        // and negating B selects the correct geometric branch; the
        // condition may recur across iterations.
        if a > 0.0 && b < 0.0 {
            st.psi_lower += PI;
            b = -b;
        }

        let chi3 = (b / st.c2).sqrt().powi(3);
        let dt_trial = (chi3 * st.c3 + a * b.sqrt()) / sqrt_mu;

        if (dt - dt_trial).abs() < config.tol {
            converged = Some((b, step));
            break;
        }

        if dt_trial <= dt {
            st.psi_lower = st.psi;
        } else {
            st.psi_upper = st.psi;
        }

        st.psi = (st.psi_lower + st.psi_upper) / 2.0;
        st.c2 = c2(st.psi);
        st.c3 = c3(st.psi);

        if st.psi_upper < st.psi_lower {
            bracket_ordered = false;
        }
    }

    let (b, iterations) = converged.ok_or(LambertError::Convergence {
        steps: config.max_steps,
        tol: config.tol,
    })?;

    // A convergent bisection must keep psi_lower <= psi_upper on every
    // iteration. Repeated branch corrections can reorder the bounds, but
    // only on runs that go on to exhaust the step budget.
    debug_assert!(
        bracket_ordered,
        "psi bracket inverted during a convergent solve"
    );

    // Lagrange coefficient recovery.
    let f = 1.0 - b / r0n;
    let g = a * (b / config.mu).sqrt();
    let g_dot = 1.0 - b / r1n;

    let v0 = vec3::scale(&vec3::add_scaled(r1, r0, -f), 1.0 / g);
    let v1 = vec3::scale(&vec3::add_scaled(&vec3::scale(r1, g_dot), r0, -1.0), 1.0 / g);

    Ok(LambertSolution {
        v0,
        v1,
        psi: st.psi,
        iterations,
    })
}

/// Solve a sweep of candidate transfer times in parallel.
///
/// Each entry is an independent solve with no shared state; results
/// preserve the input order. Useful for porkchop-style scans over a
/// departure/arrival grid.
pub fn solve_series(
    r0: &[f64; 3],
    r1: &[f64; 3],
    tofs: &[f64],
    config: &LambertConfig,
) -> Vec<Result<LambertSolution, LambertError>> {
    use rayon::prelude::*;

    tofs.par_iter()
        .map(|&dt| solve(r0, r1, dt, config))
        .collect()
}
