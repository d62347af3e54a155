//! Simulation runner implementation.
//!
//! [`Simulation`] owns the grid, the field, the clock and every scratch
//! buffer, and advances the field with the two-stage integrator until the
//! end time is reached.

use std::time::Instant;

use crate::analysis::total_mass;
use crate::boundary::{GhostBoundary, Periodic1D};
use crate::config::AdvectionConfig;
use crate::error::FvError;
use crate::io::RunLabel;
use crate::mesh::Grid1D;
use crate::solver::{AdvectionOperator, Field1D};
use crate::time::{IntegratorInfo, StageBuffers, TwoStageRk, reached_end, snap_time};

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Run controls that do not affect the discretization.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Maximum number of time steps.
    pub max_steps: Option<usize>,
    /// Whether to check the field for NaN or infinity after each step.
    pub check_finite: bool,
    /// Steps between progress log events.
    pub log_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            check_finite: true,
            log_interval: 100,
        }
    }
}

// =============================================================================
// Simulation Result
// =============================================================================

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Final simulation time reached.
    pub final_time: f64,
    /// Total number of time steps taken.
    pub n_steps: usize,
    /// Minimum time step used.
    pub dt_min: f64,
    /// Maximum time step used.
    pub dt_max: f64,
    /// Total wall-clock time in seconds.
    pub wall_time: f64,
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// Time loop for 1D advection.
///
/// Invariant: ghost cells of the field are valid periodic images of its
/// interior whenever control returns to the caller.
#[derive(Clone, Debug)]
pub struct Simulation<B: GhostBoundary = Periodic1D> {
    grid: Grid1D,
    field: Field1D,
    operator: AdvectionOperator<B>,
    integrator: TwoStageRk,
    buffers: StageBuffers,
    t: f64,
    t_end: f64,
    dt: f64,
    n_steps: usize,
    config: SimulationConfig,
}

impl Simulation<Periodic1D> {
    /// Build a periodic run from a validated configuration.
    ///
    /// The field is seeded from the configured initial condition.
    pub fn from_config(config: &AdvectionConfig) -> Result<Self, FvError> {
        config.validate()?;
        for warning in config.warnings() {
            tracing::warn!("{warning}");
        }
        let grid = config.grid()?;
        let field = config.initial_condition.sample(&grid);
        let operator = AdvectionOperator::new(
            &grid,
            config.velocity,
            config.courant_number,
            config.reconstruction(),
        )?;
        let integrator = config.integrator()?;
        Self::new(grid, field, operator, integrator, config.end_time)
    }
}

impl<B: GhostBoundary> Simulation<B> {
    /// Create a run from its parts, starting at t = 0.
    ///
    /// # Errors
    /// `InvalidConfig` if `t_end` is negative or non-finite, or `field` or
    /// `operator` does not match `grid`.
    pub fn new(
        grid: Grid1D,
        mut field: Field1D,
        operator: AdvectionOperator<B>,
        integrator: TwoStageRk,
        t_end: f64,
    ) -> Result<Self, FvError> {
        if !t_end.is_finite() || t_end < 0.0 {
            return Err(FvError::invalid_config(
                "end_time",
                format!("must be finite and non-negative, got {t_end}"),
            ));
        }
        if field.len() != grid.n_total() || field.n_ghost != grid.n_ghost {
            return Err(FvError::invalid_config(
                "initial_condition",
                format!(
                    "field has {} values, grid has {} cells",
                    field.len(),
                    grid.n_total()
                ),
            ));
        }

        if !operator.matches_grid(&grid) {
            let (n_interior, n_ghost) = operator.shape();
            return Err(FvError::invalid_config(
                "grid",
                format!(
                    "operator built for {n_interior} cells, {n_ghost} ghosts, dx = {}; \
                     grid has {} cells, {} ghosts, dx = {}",
                    operator.dx(),
                    grid.n_interior,
                    grid.n_ghost,
                    grid.dx
                ),
            ));
        }

        operator.apply_boundary(&mut field);
        let buffers = StageBuffers::new(&grid);

        Ok(Self {
            grid,
            field,
            operator,
            integrator,
            buffers,
            t: 0.0,
            t_end,
            dt: 0.0,
            n_steps: 0,
            config: SimulationConfig::default(),
        })
    }

    /// Replace the run controls.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    /// Grid.
    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    /// Current field, ghosts valid.
    pub fn field(&self) -> &Field1D {
        &self.field
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// End time.
    pub fn end_time(&self) -> f64 {
        self.t_end
    }

    /// Step size of the most recent step (0 before the first).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Steps taken so far.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Spatial operator.
    pub fn operator(&self) -> &AdvectionOperator<B> {
        &self.operator
    }

    /// Time integrator.
    pub fn integrator(&self) -> &TwoStageRk {
        &self.integrator
    }

    /// Whether the clock has reached the end time.
    pub fn is_finished(&self) -> bool {
        reached_end(self.t, self.t_end)
    }

    /// Metadata for output.
    pub fn label(&self) -> RunLabel {
        let reconstruction = self.operator.reconstruction();
        RunLabel {
            reconstruction: reconstruction.order().name(),
            limiter: reconstruction.limiter_name(),
            integrator: self.integrator.name(),
            velocity: self.operator.velocity(),
            n_cells: self.grid.n_interior,
        }
    }

    /// Hand the grid, final field and time to the caller.
    pub fn into_parts(self) -> (Grid1D, Field1D, f64) {
        (self.grid, self.field, self.t)
    }

    /// Advance one time step and return its size.
    ///
    /// Returns 0 without touching the field once the end time is reached.
    ///
    /// # Errors
    /// `NumericalInstability` if finiteness checking is enabled and the step
    /// produced a NaN or infinity. The field is left as computed.
    pub fn step(&mut self) -> Result<f64, FvError> {
        if self.is_finished() {
            return Ok(0.0);
        }

        let dt = self.integrator.step(
            &mut self.field,
            &mut self.operator,
            &mut self.buffers,
            self.t,
            self.t_end,
        );
        self.t = snap_time(self.t + dt, self.t_end);
        self.dt = dt;
        self.n_steps += 1;

        if self.config.check_finite
            && let Some((cell, value)) = self.field.first_non_finite()
        {
            tracing::warn!(
                step = self.n_steps,
                time = self.t,
                cell,
                value,
                "non-finite value in field"
            );
            return Err(FvError::NumericalInstability {
                step: self.n_steps,
                time: self.t,
                cell,
                value,
            });
        }

        if self.config.log_interval > 0 && self.n_steps % self.config.log_interval == 0 {
            tracing::debug!(step = self.n_steps, t = self.t, dt, "step");
        }

        Ok(dt)
    }

    /// Run to the end time.
    pub fn run(&mut self) -> Result<SimulationResult, FvError> {
        self.run_with_callback(|_, _| {})
    }

    /// Run to the end time, calling `callback(field, t)` once before the
    /// first step and after every step.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SimulationResult, FvError>
    where
        F: FnMut(&Field1D, f64),
    {
        let start_wall = Instant::now();
        let steps_before = self.n_steps;
        let mass_start = total_mass(&self.field, self.grid.dx);
        let mut dt_min_used = f64::INFINITY;
        let mut dt_max_used: f64 = 0.0;

        let label = self.label();
        tracing::info!(
            reconstruction = label.reconstruction,
            limiter = label.limiter,
            integrator = label.integrator,
            cells = label.n_cells,
            velocity = label.velocity,
            dt = self.operator.stable_dt(),
            t_end = self.t_end,
            "starting run"
        );

        callback(&self.field, self.t);

        while !self.is_finished() {
            if let Some(max_steps) = self.config.max_steps
                && self.n_steps - steps_before >= max_steps
            {
                return Err(FvError::StepLimit {
                    max_steps,
                    time: self.t,
                });
            }

            let dt = self.step()?;
            dt_min_used = dt_min_used.min(dt);
            dt_max_used = dt_max_used.max(dt);

            callback(&self.field, self.t);
        }

        let wall_time = start_wall.elapsed().as_secs_f64();
        let n_steps = self.n_steps - steps_before;
        let mass_drift = total_mass(&self.field, self.grid.dx) - mass_start;

        tracing::info!(
            steps = n_steps,
            t = self.t,
            mass_drift,
            wall_time,
            "run complete"
        );

        Ok(SimulationResult {
            final_time: self.t,
            n_steps,
            dt_min: dt_min_used,
            dt_max: dt_max_used,
            wall_time,
        })
    }
}
