//! Generic fixed-step Runge-Kutta 4 integration.
//!
//! [`rk4_step`] is generic over the state dimension and any fallible
//! derivative function `f(t, y) -> dy`; trajectory drivers apply it
//! across a pre-built time grid with a constant, caller-chosen step.
//! Local truncation error is O(h⁵); there is no adaptive control.

/// Single classical RK4 step from `y` at time `t` with step `h`.
///
/// y_next = y + h/6·(k1 + 2k2 + 2k3 + k4)
///
/// Any error from the derivative function aborts the step.
pub fn rk4_step<const N: usize, F, E>(
    f: &mut F,
    t: f64,
    y: &[f64; N],
    h: f64,
) -> Result<[f64; N], E>
where
    F: FnMut(f64, &[f64; N]) -> Result<[f64; N], E>,
{
    let k1 = f(t, y)?;

    let mut y2 = [0.0; N];
    for i in 0..N {
        y2[i] = y[i] + 0.5 * h * k1[i];
    }
    let k2 = f(t + 0.5 * h, &y2)?;

    let mut y3 = [0.0; N];
    for i in 0..N {
        y3[i] = y[i] + 0.5 * h * k2[i];
    }
    let k3 = f(t + 0.5 * h, &y3)?;

    let mut y4 = [0.0; N];
    for i in 0..N {
        y4[i] = y[i] + h * k3[i];
    }
    let k4 = f(t + h, &y4)?;

    let mut y_next = [0.0; N];
    for i in 0..N {
        y_next[i] = y[i] + h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    Ok(y_next)
}

/// Fixed-step propagation across a pre-built time grid.
///
/// Takes `duration / step` whole steps from `t0`, then one shortened
/// step to land exactly on `t0 + duration` when the duration is not an
/// exact multiple of the step. Each step depends only on the preceding
/// state. Returns the (time, state) series including the initial entry.
pub fn propagate_fixed<const N: usize, F, E>(
    mut f: F,
    y0: [f64; N],
    t0: f64,
    duration: f64,
    step: f64,
) -> Result<Vec<(f64, [f64; N])>, E>
where
    F: FnMut(f64, &[f64; N]) -> Result<[f64; N], E>,
{
    let n_whole = (duration / step).floor() as usize;
    let remainder = duration - n_whole as f64 * step;

    let mut series = Vec::with_capacity(n_whole + 2);
    series.push((t0, y0));

    let mut t = t0;
    let mut y = y0;

    for _ in 0..n_whole {
        y = rk4_step(&mut f, t, &y, step)?;
        t += step;
        series.push((t, y));
    }

    if remainder > 1e-12 * step.abs().max(1.0) {
        y = rk4_step(&mut f, t, &y, remainder)?;
        series.push((t0 + duration, y));
    }

    Ok(series)
}
