//! Simulation driver.
//!
//! Ties together the grid, the advection operator and the two-stage
//! integrator into a run with diagnostics and callbacks.
//!
//! # Example
//! ```
//! use fv_rs::config::AdvectionConfig;
//! use fv_rs::simulation::Simulation;
//!
//! let config = AdvectionConfig { end_time: 0.1, ..AdvectionConfig::default() };
//! let mut sim = Simulation::from_config(&config).unwrap();
//! let result = sim.run().unwrap();
//! assert_eq!(result.final_time, 0.1);
//! ```

mod runner;

pub use runner::{Simulation, SimulationConfig, SimulationResult};
