//! Spatial right-hand side for 1D finite-volume advection.
//!
//! For du/dt + a * du/dx = 0 the semi-discrete form on cell `i` is
//!
//! du_i/dt = (F_i - F_{i+1}) / dx
//!
//! where `F_i` is the upwind flux through the left edge of cell `i`,
//! evaluated from reconstructed interface states.

use super::Field1D;
use super::reconstruction::{Reconstruction, Reconstructor};
use crate::boundary::{GhostBoundary, Periodic1D};
use crate::error::FvError;
use crate::flux::evaluate_upwind;
use crate::mesh::Grid1D;
use crate::time::{clamp_dt, compute_dt};

/// How the operator obtains the time step used for time-centered
/// reconstruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DtPolicy {
    /// Compute the CFL step and clamp it so `t + dt <= t_end` (first stage).
    Recompute {
        /// Current simulation time
        t: f64,
        /// Target end time
        t_end: f64,
    },
    /// Reuse a step computed earlier in the same time step (later stages).
    Reuse(f64),
}

/// Reconstruction plus upwind flux, producing du/dt on the interior.
///
/// Holds the reconstruction and flux buffers so repeated evaluations do not
/// allocate.
#[derive(Clone, Debug)]
pub struct AdvectionOperator<B: GhostBoundary = Periodic1D> {
    dx: f64,
    n_interior: usize,
    n_ghost: usize,
    velocity: f64,
    courant: f64,
    reconstructor: Reconstructor,
    flux: Vec<f64>,
    boundary: B,
}

impl AdvectionOperator<Periodic1D> {
    /// Create a periodic advection operator on `grid`.
    pub fn new(
        grid: &Grid1D,
        velocity: f64,
        courant: f64,
        reconstruction: Reconstruction,
    ) -> Result<Self, FvError> {
        Self::with_boundary(grid, velocity, courant, reconstruction, Periodic1D)
    }
}

impl<B: GhostBoundary> AdvectionOperator<B> {
    /// Create an advection operator with an explicit ghost-cell rule.
    ///
    /// # Errors
    /// `InvalidConfig` if the velocity is zero or non-finite, or the Courant
    /// number is not a finite positive value.
    pub fn with_boundary(
        grid: &Grid1D,
        velocity: f64,
        courant: f64,
        reconstruction: Reconstruction,
        boundary: B,
    ) -> Result<Self, FvError> {
        if !velocity.is_finite() || velocity == 0.0 {
            return Err(FvError::invalid_config(
                "velocity",
                format!("must be finite and non-zero, got {velocity}"),
            ));
        }
        if !courant.is_finite() || courant <= 0.0 {
            return Err(FvError::invalid_config(
                "courant_number",
                format!("must be finite and positive, got {courant}"),
            ));
        }

        Ok(Self {
            dx: grid.dx,
            n_interior: grid.n_interior,
            n_ghost: grid.n_ghost,
            velocity,
            courant,
            reconstructor: Reconstructor::new(reconstruction, grid.n_interior, grid.n_ghost),
            flux: vec![0.0; grid.n_total()],
            boundary,
        })
    }

    /// Cell width.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Interior and ghost cell counts of the grid the operator was built on.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_interior, self.n_ghost)
    }

    /// Whether the operator was built on a grid equivalent to `grid`.
    pub fn matches_grid(&self, grid: &Grid1D) -> bool {
        self.shape() == (grid.n_interior, grid.n_ghost)
            && (self.dx - grid.dx).abs() <= 1e-12 * grid.dx.abs()
    }

    /// Advection velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Courant number used for the CFL step.
    pub fn courant(&self) -> f64 {
        self.courant
    }

    /// Active reconstruction scheme.
    pub fn reconstruction(&self) -> Reconstruction {
        self.reconstructor.scheme()
    }

    /// Ghost-cell rule.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Unclamped CFL step C * dx / |a|.
    pub fn stable_dt(&self) -> f64 {
        compute_dt(self.dx, self.velocity, self.courant)
    }

    /// Interface fluxes from the most recent evaluation.
    pub fn fluxes(&self) -> &[f64] {
        &self.flux
    }

    /// Refresh the ghost cells of `field`.
    pub fn apply_boundary(&self, field: &mut Field1D) {
        self.boundary.apply(field);
    }

    /// Evaluate du/dt into `out` and return the time step used.
    ///
    /// Ghost cells of `field` must be valid on entry. Only interior entries
    /// of `out` carry the result; its ghost entries are zeroed.
    ///
    /// # Arguments
    /// * `field` - Current cell values
    /// * `policy` - Whether to compute the step or reuse one
    /// * `out` - Destination for du/dt
    pub fn rhs(&mut self, field: &Field1D, policy: DtPolicy, out: &mut Field1D) -> f64 {
        let dt = match policy {
            DtPolicy::Recompute { t, t_end } => clamp_dt(self.stable_dt(), t, t_end),
            DtPolicy::Reuse(dt) => dt,
        };

        let states =
            self.reconstructor
                .reconstruct(field, self.dx, dt, self.velocity, &self.boundary);
        evaluate_upwind(states, self.velocity, &mut self.flux);

        let inv_dx = 1.0 / self.dx;
        let interior = out.interior_range();
        out.fill(0.0);
        for i in interior {
            out.data[i] = (self.flux[i] - self.flux[i + 1]) * inv_dx;
        }

        dt
    }
}
