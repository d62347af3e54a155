//! Run configuration.
//!
//! `AdvectionConfig` is read from JSON. Every key is optional and unknown
//! keys are rejected:
//!
//! ```json
//! {
//!   "interior_count": 128,
//!   "velocity": -0.5,
//!   "courant_number": 0.6,
//!   "reconstruction_order": "linear",
//!   "limiter": "superbee",
//!   "time_scheme": "heun",
//!   "end_time": 2.0,
//!   "initial_condition": "square-pulse"
//! }
//! ```
//!
//! `time_scheme` is optional; without it `time_integration_alpha` selects
//! the member of the two-stage family.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FvError;
use crate::initial::InitialCondition;
use crate::mesh::Grid1D;
use crate::solver::{Reconstruction, ReconstructionOrder, SlopeLimiter};
use crate::time::{TimeScheme, TwoStageRk};

fn default_interior_count() -> usize { 64 }
fn default_ghost_count() -> usize { 1 }
fn default_domain_min() -> f64 { 0.0 }
fn default_domain_max() -> f64 { 1.0 }
fn default_velocity() -> f64 { 1.0 }
fn default_courant() -> f64 { 0.8 }
fn default_alpha() -> f64 { 1.0 }
fn default_end_time() -> f64 { 1.0 }

/// Parameters of one advection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvectionConfig {
    /// Number of interior cells
    #[serde(default = "default_interior_count")]
    pub interior_count: usize,

    /// Ghost cells on each side
    #[serde(default = "default_ghost_count")]
    pub ghost_count: usize,

    /// Left end of the domain
    #[serde(default = "default_domain_min")]
    pub domain_min: f64,

    /// Right end of the domain
    #[serde(default = "default_domain_max")]
    pub domain_max: f64,

    /// Advection velocity (non-zero)
    #[serde(default = "default_velocity")]
    pub velocity: f64,

    /// Courant number C in dt = C dx / |a|
    #[serde(default = "default_courant")]
    pub courant_number: f64,

    /// Constant or linear reconstruction
    #[serde(default)]
    pub reconstruction_order: ReconstructionOrder,

    /// Slope limiter (linear reconstruction only)
    #[serde(default)]
    pub limiter: SlopeLimiter,

    /// Named two-stage preset; overrides `time_integration_alpha` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_scheme: Option<TimeScheme>,

    /// Two-stage Runge-Kutta coefficient
    #[serde(default = "default_alpha")]
    pub time_integration_alpha: f64,

    /// Simulation end time
    #[serde(default = "default_end_time")]
    pub end_time: f64,

    /// Initial profile
    #[serde(default)]
    pub initial_condition: InitialCondition,
}

impl Default for AdvectionConfig {
    fn default() -> Self {
        Self {
            interior_count: default_interior_count(),
            ghost_count: default_ghost_count(),
            domain_min: default_domain_min(),
            domain_max: default_domain_max(),
            velocity: default_velocity(),
            courant_number: default_courant(),
            reconstruction_order: ReconstructionOrder::default(),
            limiter: SlopeLimiter::default(),
            time_scheme: None,
            time_integration_alpha: default_alpha(),
            end_time: default_end_time(),
            initial_condition: InitialCondition::default(),
        }
    }
}

impl AdvectionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, FvError> {
        let config: AdvectionConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FvError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, FvError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save as a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FvError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Check every value before a run starts.
    ///
    /// A Courant number above 1 is accepted; see [`Self::warnings`].
    pub fn validate(&self) -> Result<(), FvError> {
        if self.interior_count == 0 {
            return Err(FvError::invalid_config("interior_count", "must be positive"));
        }
        if self.ghost_count == 0 || self.ghost_count > self.interior_count {
            return Err(FvError::invalid_config(
                "ghost_count",
                format!(
                    "must be between 1 and interior_count ({}), got {}",
                    self.interior_count, self.ghost_count
                ),
            ));
        }
        if !self.domain_min.is_finite() || !self.domain_max.is_finite() {
            return Err(FvError::invalid_config("domain", "bounds must be finite"));
        }
        if self.domain_max <= self.domain_min {
            return Err(FvError::invalid_config(
                "domain",
                format!(
                    "domain_max ({}) must be greater than domain_min ({})",
                    self.domain_max, self.domain_min
                ),
            ));
        }
        if !self.velocity.is_finite() || self.velocity == 0.0 {
            return Err(FvError::invalid_config(
                "velocity",
                format!("must be finite and non-zero, got {}", self.velocity),
            ));
        }
        if !self.courant_number.is_finite() || self.courant_number <= 0.0 {
            return Err(FvError::invalid_config(
                "courant_number",
                format!("must be finite and positive, got {}", self.courant_number),
            ));
        }
        if self.time_scheme.is_none() {
            TwoStageRk::new(self.time_integration_alpha)?;
        }
        if !self.end_time.is_finite() || self.end_time < 0.0 {
            return Err(FvError::invalid_config(
                "end_time",
                format!("must be finite and non-negative, got {}", self.end_time),
            ));
        }
        Ok(())
    }

    /// Non-fatal problems with otherwise valid values.
    ///
    /// A Courant number above 1 makes the explicit upwind update unstable; the
    /// run is expected to stop with `NumericalInstability`.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.courant_number > 1.0 {
            warnings.push(format!(
                "Courant number {} above 1: explicit upwind stepping is unstable",
                self.courant_number
            ));
        }
        warnings
    }

    /// Effective Runge-Kutta coefficient.
    pub fn alpha(&self) -> f64 {
        self.time_scheme
            .map_or(self.time_integration_alpha, TimeScheme::alpha)
    }

    /// Time integrator described by this configuration.
    pub fn integrator(&self) -> Result<TwoStageRk, FvError> {
        match self.time_scheme {
            Some(scheme) => Ok(TwoStageRk::from_scheme(scheme)),
            None => TwoStageRk::new(self.time_integration_alpha),
        }
    }

    /// Reconstruction scheme described by this configuration.
    pub fn reconstruction(&self) -> Reconstruction {
        Reconstruction::from_parts(self.reconstruction_order, self.limiter)
    }

    /// Grid described by this configuration.
    pub fn grid(&self) -> Result<Grid1D, FvError> {
        Grid1D::uniform(
            self.domain_min,
            self.domain_max,
            self.interior_count,
            self.ghost_count,
        )
    }

    /// Time for the profile to cross the domain once.
    pub fn crossing_time(&self) -> f64 {
        (self.domain_max - self.domain_min) / self.velocity.abs()
    }
}
