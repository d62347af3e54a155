//! Numerical flux functions.
//!
//! Only the scalar upwind flux is provided; it is exact for linear
//! advection given the reconstructed interface states.

mod upwind;

pub use upwind::{evaluate_upwind, upwind_flux};
