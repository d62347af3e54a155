//! Error types for configuration and time stepping.

use thiserror::Error;

/// Errors produced while configuring or running an advection simulation.
#[derive(Debug, Error)]
pub enum FvError {
    /// A configuration value is out of range or not recognized.
    ///
    /// Detected before the time loop starts.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending option
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A non-finite value appeared in the field after a step.
    #[error("non-finite value {value} in cell {cell} after step {step} (t = {time:.6e})")]
    NumericalInstability {
        /// Step number (1-based) that produced the value
        step: usize,
        /// Simulation time after the step
        time: f64,
        /// Storage index of the first offending cell
        cell: usize,
        /// The offending value
        value: f64,
    },

    /// The run hit its configured step cap before reaching the end time.
    #[error("maximum step limit ({max_steps}) reached at t = {time:.6e}")]
    StepLimit {
        /// Configured cap
        max_steps: usize,
        /// Time reached when the cap was hit
        time: f64,
    },

    /// Malformed configuration document.
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FvError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this error was raised during setup rather than while stepping.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::Parse(_))
    }
}
