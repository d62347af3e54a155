//! # fv-rs
//!
//! A finite-volume library for the 1D linear advection equation
//! du/dt + a du/dx = 0 on a periodic domain.
//!
//! This crate provides the building blocks of the scheme:
//! - Uniform cell-centered grids with ghost padding
//! - Periodic ghost-cell boundaries
//! - Piecewise-constant and slope-limited piecewise-linear reconstruction
//!   (MC, SuperBee, TVD limiters)
//! - Upwind numerical flux
//! - A two-stage Runge-Kutta family (RK2, midpoint, Heun) with CFL stepping
//! - A simulation driver, JSON configuration, profile output and diagnostics

pub mod analysis;
pub mod boundary;
pub mod config;
pub mod error;
pub mod flux;
pub mod initial;
pub mod io;
pub mod mesh;
pub mod simulation;
pub mod solver;
pub mod time;

// Re-export main types for convenience
pub use analysis::{ComparisonMetrics, extrema, total_mass, total_variation};
pub use boundary::{GhostBoundary, Periodic1D, apply_periodic};
pub use config::AdvectionConfig;
pub use error::FvError;
pub use flux::{evaluate_upwind, upwind_flux};
pub use initial::InitialCondition;
pub use io::{OutputError, RunLabel, write_profile, write_profile_file};
pub use mesh::Grid1D;
pub use simulation::{Simulation, SimulationConfig, SimulationResult};
pub use solver::{
    AdvectionOperator, DtPolicy, Field1D, InterfaceStates, Reconstruction, ReconstructionOrder,
    Reconstructor, SlopeLimiter, maxmod, minmod,
};
pub use time::{IntegratorInfo, StageBuffers, TimeScheme, TwoStageRk, clamp_dt, compute_dt};
