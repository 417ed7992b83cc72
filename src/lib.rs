//! # TALOS
//!
//! **T**ransfer **A**nalysis, **L**ambert solving & **O**rbit **S**imulation
//!
//! A toolkit for two-body transfer design and trajectory propagation.
//! Provides a universal-variable Lambert boundary-value solver, a generic
//! fixed-step RK4 integrator with a two-body force model, classical
//! orbital element conversion, and a small gravitational body registry.
//!
//! The core is purely synchronous and side-effect free: a Lambert solve
//! and a propagation run are independent calls over caller-owned inputs,
//! so independent trajectories can be computed in parallel with no
//! coordination (batch entry points using rayon are provided).

pub mod constants;
pub mod vec3;
pub mod bodies;
pub mod state;
pub mod stumpff;
pub mod lambert;
pub mod twobody;
pub mod integrator;
pub mod elements;
pub mod ephemeris;

pub use bodies::{body, BodyId, GravitationalBody};
pub use elements::{AngleUnit, OrbitalElements};
pub use ephemeris::{ElementsEphemeris, EphemerisError, EphemerisSource, Frame};
pub use lambert::{solve, solve_series, Direction, LambertConfig, LambertError, LambertSolution};
pub use state::StateVector;
pub use twobody::{propagate_batch, propagate_two_body, two_body_derivative, DynamicsError};
