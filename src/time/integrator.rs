//! Two-stage explicit Runge-Kutta family.
//!
//! One parameter `alpha` selects the member:
//! ```text
//! k1      = L(u)
//! u_stage = u + alpha * dt * k1
//! k2      = L(u_stage)
//! u_new   = u + dt * ((1 - 1/(2 alpha)) * k1 + 1/(2 alpha) * k2)
//! ```
//! alpha = 1 is the classic RK2 (explicit trapezoid), alpha = 1/2 the
//! midpoint method and alpha = 2/3 Heun's (Ralston's) variant. Every member
//! is second order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::boundary::GhostBoundary;
use crate::error::FvError;
use crate::mesh::Grid1D;
use crate::solver::{AdvectionOperator, DtPolicy, Field1D};

// =============================================================================
// IntegratorInfo Trait
// =============================================================================

/// Descriptive information about a time integrator.
pub trait IntegratorInfo: Send + Sync {
    /// Human-readable name for labels and logging.
    fn name(&self) -> &'static str;

    /// Order of accuracy.
    fn order(&self) -> usize;

    /// Number of right-hand side evaluations per step.
    fn n_stages(&self) -> usize;

    /// Offsets from the step start at which the stages are evaluated.
    fn stage_times(&self, dt: f64) -> Vec<f64>;
}

// =============================================================================
// Named presets
// =============================================================================

/// Named members of the two-stage family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeScheme {
    /// alpha = 1
    #[default]
    Rk2,
    /// alpha = 1/2
    Midpoint,
    /// alpha = 2/3
    Heun,
}

impl TimeScheme {
    /// All presets.
    pub const ALL: [TimeScheme; 3] = [TimeScheme::Rk2, TimeScheme::Midpoint, TimeScheme::Heun];

    /// The alpha coefficient of this preset.
    pub fn alpha(self) -> f64 {
        match self {
            TimeScheme::Rk2 => 1.0,
            TimeScheme::Midpoint => 0.5,
            TimeScheme::Heun => 2.0 / 3.0,
        }
    }

    /// Short name used in labels and configuration.
    pub fn name(self) -> &'static str {
        match self {
            TimeScheme::Rk2 => "rk2",
            TimeScheme::Midpoint => "midpoint",
            TimeScheme::Heun => "heun",
        }
    }

    /// Preset with exactly this alpha, if any.
    pub fn from_alpha(alpha: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.alpha() == alpha)
    }
}

impl fmt::Display for TimeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeScheme {
    type Err = FvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rk2" => Ok(TimeScheme::Rk2),
            "midpoint" => Ok(TimeScheme::Midpoint),
            "heun" | "ralston" => Ok(TimeScheme::Heun),
            other => Err(FvError::invalid_config(
                "time_scheme",
                format!("unknown time scheme `{other}` (expected rk2, midpoint or heun)"),
            )),
        }
    }
}

impl TryFrom<String> for TimeScheme {
    type Error = FvError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeScheme> for String {
    fn from(scheme: TimeScheme) -> Self {
        scheme.name().to_string()
    }
}

// =============================================================================
// Stage storage
// =============================================================================

/// Scratch fields for one two-stage step, allocated once per run.
#[derive(Clone, Debug)]
pub struct StageBuffers {
    /// Intermediate state u + alpha * dt * k1
    pub stage: Field1D,
    /// First-stage derivative
    pub k1: Field1D,
    /// Second-stage derivative
    pub k2: Field1D,
}

impl StageBuffers {
    /// Buffers shaped like fields on `grid`.
    pub fn new(grid: &Grid1D) -> Self {
        Self {
            stage: Field1D::zeros(grid),
            k1: Field1D::zeros(grid),
            k2: Field1D::zeros(grid),
        }
    }
}

// =============================================================================
// Two-stage Runge-Kutta
// =============================================================================

/// Two-stage explicit Runge-Kutta method parameterized by `alpha`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoStageRk {
    alpha: f64,
}

impl TwoStageRk {
    /// Create a member of the family.
    ///
    /// # Errors
    /// `InvalidConfig` unless `alpha` is finite and strictly positive.
    pub fn new(alpha: f64) -> Result<Self, FvError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(FvError::invalid_config(
                "time_integration_alpha",
                format!("must be finite and positive, got {alpha}"),
            ));
        }
        Ok(Self { alpha })
    }

    /// Create a named preset.
    pub fn from_scheme(scheme: TimeScheme) -> Self {
        Self {
            alpha: scheme.alpha(),
        }
    }

    /// The alpha coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Weights (w1, w2) applied to k1 and k2 in the final combination.
    pub fn weights(&self) -> (f64, f64) {
        let w2 = 1.0 / (2.0 * self.alpha);
        (1.0 - w2, w2)
    }

    /// Advance `field` by one step and return the step size used.
    ///
    /// The step size is the CFL step clamped so that `t + dt <= t_end`.
    /// Ghost cells of `field` are valid on return.
    ///
    /// # Arguments
    /// * `field` - Solution, advanced in place
    /// * `op` - Spatial operator
    /// * `buffers` - Stage scratch storage
    /// * `t` - Current time
    /// * `t_end` - Target end time
    pub fn step<B: GhostBoundary>(
        &self,
        field: &mut Field1D,
        op: &mut AdvectionOperator<B>,
        buffers: &mut StageBuffers,
        t: f64,
        t_end: f64,
    ) -> f64 {
        op.apply_boundary(field);

        // Stage 1
        let dt = op.rhs(field, DtPolicy::Recompute { t, t_end }, &mut buffers.k1);
        if dt <= 0.0 {
            return 0.0;
        }

        // Stage 2 at u + alpha * dt * k1
        buffers.stage.copy_from(field);
        buffers.stage.axpy_interior(self.alpha * dt, &buffers.k1);
        op.apply_boundary(&mut buffers.stage);
        op.rhs(&buffers.stage, DtPolicy::Reuse(dt), &mut buffers.k2);

        let (w1, w2) = self.weights();
        field.axpy_interior(w1 * dt, &buffers.k1);
        field.axpy_interior(w2 * dt, &buffers.k2);
        op.apply_boundary(field);

        dt
    }
}

impl Default for TwoStageRk {
    fn default() -> Self {
        Self::from_scheme(TimeScheme::default())
    }
}

impl IntegratorInfo for TwoStageRk {
    fn name(&self) -> &'static str {
        TimeScheme::from_alpha(self.alpha).map_or("two-stage", TimeScheme::name)
    }

    fn order(&self) -> usize {
        2
    }

    fn n_stages(&self) -> usize {
        2
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        vec![0.0, self.alpha * dt]
    }
}
