//! CFL time step control.

/// Relative tolerance used to decide that the clock has reached the end time.
pub const TIME_TOLERANCE: f64 = 1e-12;

/// CFL-limited time step for linear advection: dt = C * dx / |a|.
///
/// Infinite for a zero velocity; configuration validation rejects that case
/// before a run starts.
pub fn compute_dt(dx: f64, a: f64, courant: f64) -> f64 {
    courant * dx / a.abs()
}

/// Shorten `dt` so the step does not overshoot `t_end`.
pub fn clamp_dt(dt: f64, t: f64, t_end: f64) -> f64 {
    dt.min(t_end - t).max(0.0)
}

/// Whether `t` has reached `t_end` within [`TIME_TOLERANCE`].
pub fn reached_end(t: f64, t_end: f64) -> bool {
    t >= t_end - TIME_TOLERANCE * t_end.abs().max(1.0)
}

/// Snap `t` onto `t_end` when it is within [`TIME_TOLERANCE`] of it.
///
/// Removes the round-off left by accumulating `t += dt` so the final state
/// is reported exactly at the requested time.
pub fn snap_time(t: f64, t_end: f64) -> f64 {
    if (t - t_end).abs() <= TIME_TOLERANCE * t_end.abs().max(1.0) {
        t_end
    } else {
        t
    }
}
