//! Time integration and step size control.

mod integrator;
mod step_size;

pub use integrator::{IntegratorInfo, StageBuffers, TimeScheme, TwoStageRk};
pub use step_size::{TIME_TOLERANCE, clamp_dt, compute_dt, reached_end, snap_time};
