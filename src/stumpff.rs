//! Stumpff functions C2(ψ) and C3(ψ) for the universal-variable
//! time-of-flight equation.
//!
//! Both are even functions of ψ with analytic limits at ψ = 0
//! (C2 → 1/2, C3 → 1/6), but the closed forms divide by |ψ| and
//! |ψ|^(3/2). Inside a band around zero the limiting values are
//! returned instead of the raw formulas; this is a correctness
//! requirement, not an optimization.

/// Band around ψ = 0 inside which the limiting values are used.
///
/// At |ψ| = 1e-6 the closed forms lose ~1e-10 of relative accuracy to
/// cancellation, so both branches agree to well inside the solver
/// tolerance at the switchover.
pub const PSI_NEAR_ZERO: f64 = 1e-6;

/// C2(ψ) = (1 − cos√|ψ|) / |ψ|, with C2(0) = 1/2.
pub fn c2(psi: f64) -> f64 {
    let a = psi.abs();
    if a < PSI_NEAR_ZERO {
        return 0.5;
    }
    (1.0 - a.sqrt().cos()) / a
}

/// C3(ψ) = (√|ψ| − sin√|ψ|) / |ψ|^(3/2), with C3(0) = 1/6.
pub fn c3(psi: f64) -> f64 {
    let a = psi.abs();
    if a < PSI_NEAR_ZERO {
        return 1.0 / 6.0;
    }
    let s = a.sqrt();
    (s - s.sin()) / (a * s)
}
