//! Interface reconstruction from cell averages.
//!
//! Interface `i` sits at the left edge of cell `i`. Its left state comes
//! from cell `i - 1` and its right state from cell `i`. Only interfaces
//! `n_ghost..=n_ghost + n_interior` (those bounding the interior) are
//! written.
//!
//! Two orders are available:
//! - Constant (Godunov): states are the adjacent cell values.
//! - Linear: a limited slope per cell, projected to the cell edges. MC and
//!   SuperBee slopes are advanced to the half time step with the upwind
//!   Taylor expansion; TVD slopes are used as a purely spatial half-jump.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Field1D;
use super::limiters::{EdgeProjection, SlopeLimiter};
use crate::boundary::GhostBoundary;
use crate::error::FvError;

/// Reconstruction order as named in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReconstructionOrder {
    /// Piecewise constant (first order)
    #[default]
    Constant,
    /// Piecewise linear with a slope limiter (second order in space)
    Linear,
}

impl ReconstructionOrder {
    /// Short name used in labels and configuration.
    pub fn name(self) -> &'static str {
        match self {
            ReconstructionOrder::Constant => "constant",
            ReconstructionOrder::Linear => "linear",
        }
    }
}

impl fmt::Display for ReconstructionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReconstructionOrder {
    type Err = FvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" | "godunov" | "first" => Ok(ReconstructionOrder::Constant),
            "linear" | "muscl" | "second" => Ok(ReconstructionOrder::Linear),
            other => Err(FvError::invalid_config(
                "reconstruction_order",
                format!("unknown reconstruction order `{other}` (expected constant or linear)"),
            )),
        }
    }
}

impl TryFrom<String> for ReconstructionOrder {
    type Error = FvError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReconstructionOrder> for String {
    fn from(order: ReconstructionOrder) -> Self {
        order.name().to_string()
    }
}

/// Reconstruction scheme: order and, for linear, its limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reconstruction {
    /// Piecewise constant states
    #[default]
    Constant,
    /// Piecewise linear states with the given limiter
    Linear(SlopeLimiter),
}

impl Reconstruction {
    /// Combine an order with a limiter. The limiter is ignored for
    /// constant reconstruction.
    pub fn from_parts(order: ReconstructionOrder, limiter: SlopeLimiter) -> Self {
        match order {
            ReconstructionOrder::Constant => Reconstruction::Constant,
            ReconstructionOrder::Linear => Reconstruction::Linear(limiter),
        }
    }

    /// Reconstruction order of this scheme.
    pub fn order(self) -> ReconstructionOrder {
        match self {
            Reconstruction::Constant => ReconstructionOrder::Constant,
            Reconstruction::Linear(_) => ReconstructionOrder::Linear,
        }
    }

    /// Limiter in use, if any.
    pub fn limiter(self) -> Option<SlopeLimiter> {
        match self {
            Reconstruction::Constant => None,
            Reconstruction::Linear(limiter) => Some(limiter),
        }
    }

    /// Limiter name for labels ("none" for constant reconstruction).
    pub fn limiter_name(self) -> &'static str {
        self.limiter().map_or("none", SlopeLimiter::name)
    }
}

/// Left and right states at every interface.
#[derive(Clone, Debug)]
pub struct InterfaceStates {
    /// State just left of interface `i` (from cell `i - 1`)
    pub left: Vec<f64>,
    /// State just right of interface `i` (from cell `i`)
    pub right: Vec<f64>,
    /// Number of interior cells
    pub n_interior: usize,
    /// Number of ghost cells on each side
    pub n_ghost: usize,
}

impl InterfaceStates {
    /// Zero-initialized states for a field of the given shape.
    pub fn new(n_interior: usize, n_ghost: usize) -> Self {
        let n = n_interior + 2 * n_ghost;
        Self {
            left: vec![0.0; n],
            right: vec![0.0; n],
            n_interior,
            n_ghost,
        }
    }

    /// Interfaces bounding the interior (inclusive of both ends).
    pub fn interface_range(&self) -> std::ops::RangeInclusive<usize> {
        self.n_ghost..=self.n_ghost + self.n_interior
    }
}

/// Reconstructs interface states, reusing its slope and state buffers.
#[derive(Clone, Debug)]
pub struct Reconstructor {
    scheme: Reconstruction,
    slopes: Field1D,
    states: InterfaceStates,
}

impl Reconstructor {
    /// Create a reconstructor for fields with the given shape.
    pub fn new(scheme: Reconstruction, n_interior: usize, n_ghost: usize) -> Self {
        Self {
            scheme,
            slopes: Field1D::new(n_interior, n_ghost),
            states: InterfaceStates::new(n_interior, n_ghost),
        }
    }

    /// Active scheme.
    pub fn scheme(&self) -> Reconstruction {
        self.scheme
    }

    /// Slopes from the most recent linear reconstruction.
    pub fn slopes(&self) -> &Field1D {
        &self.slopes
    }

    /// Reconstruct interface states from `field`.
    ///
    /// Ghost cells of `field` must already hold valid boundary images.
    /// `boundary` fills the slopes of the outermost cells, whose own
    /// neighbors lie outside storage.
    ///
    /// # Arguments
    /// * `field` - Cell values with valid ghosts
    /// * `dx` - Cell width
    /// * `dt` - Time step (used by time-centered edge projection)
    /// * `velocity` - Advection velocity
    /// * `boundary` - Rule used to complete the slope field
    pub fn reconstruct<B>(
        &mut self,
        field: &Field1D,
        dx: f64,
        dt: f64,
        velocity: f64,
        boundary: &B,
    ) -> &InterfaceStates
    where
        B: GhostBoundary + ?Sized,
    {
        debug_assert_eq!(field.len(), self.slopes.len(), "field shape mismatch");

        match self.scheme {
            Reconstruction::Constant => reconstruct_constant(&field.data, &mut self.states),
            Reconstruction::Linear(limiter) => {
                compute_slopes(&field.data, dx, limiter, &mut self.slopes.data);
                boundary.apply(&mut self.slopes);

                match limiter.edge_projection() {
                    EdgeProjection::TimeCentered => project_time_centered(
                        &field.data,
                        &self.slopes.data,
                        dx,
                        velocity * dt / dx,
                        &mut self.states,
                    ),
                    EdgeProjection::Spatial => {
                        project_spatial(&field.data, &self.slopes.data, &mut self.states)
                    }
                }
            }
        }

        &self.states
    }
}

fn reconstruct_constant(u: &[f64], states: &mut InterfaceStates) {
    for i in states.interface_range() {
        states.left[i] = u[i - 1];
        states.right[i] = u[i];
    }
}

/// Limited slopes for every cell that has two stored neighbors.
fn compute_slopes(u: &[f64], dx: f64, limiter: SlopeLimiter, slopes: &mut [f64]) {
    for i in 1..u.len() - 1 {
        slopes[i] = limiter.slope(u[i - 1], u[i], u[i + 1], dx);
    }
}

fn project_time_centered(
    u: &[f64],
    slopes: &[f64],
    dx: f64,
    courant: f64,
    states: &mut InterfaceStates,
) {
    let half_left = 0.5 * dx * (1.0 - courant);
    let half_right = 0.5 * dx * (1.0 + courant);
    for i in states.interface_range() {
        states.left[i] = u[i - 1] + half_left * slopes[i - 1];
        states.right[i] = u[i] - half_right * slopes[i];
    }
}

fn project_spatial(u: &[f64], slopes: &[f64], states: &mut InterfaceStates) {
    for i in states.interface_range() {
        states.left[i] = u[i - 1] + slopes[i - 1];
        states.right[i] = u[i] - slopes[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Periodic1D;
    use crate::mesh::Grid1D;

    fn uniform_field(n: usize, c: f64) -> Field1D {
        let mut u = Field1D::new(n, 1);
        u.fill(c);
        u
    }

    fn all_schemes() -> Vec<Reconstruction> {
        let mut schemes = vec![Reconstruction::Constant];
        schemes.extend(SlopeLimiter::ALL.map(Reconstruction::Linear));
        schemes
    }

    #[test]
    fn test_uniform_field_gives_uniform_states() {
        let u = uniform_field(8, 3.5);
        for scheme in all_schemes() {
            let mut rec = Reconstructor::new(scheme, 8, 1);
            let states = rec.reconstruct(&u, 0.125, 0.1, 1.0, &Periodic1D);
            for i in states.interface_range() {
                assert!((states.left[i] - 3.5).abs() < 1e-14, "{scheme:?} left {i}");
                assert!((states.right[i] - 3.5).abs() < 1e-14, "{scheme:?} right {i}");
            }
        }
    }

    #[test]
    fn test_constant_states_are_neighbor_values() {
        let mut u = Field1D::new(3, 1);
        u.data = vec![3.0, 1.0, 2.0, 3.0, 1.0];

        let mut rec = Reconstructor::new(Reconstruction::Constant, 3, 1);
        let states = rec.reconstruct(&u, 1.0, 0.5, 1.0, &Periodic1D);

        assert_eq!(states.interface_range(), 1..=4);
        assert_eq!(&states.left[1..=4], &[3.0, 1.0, 2.0, 3.0]);
        assert_eq!(&states.right[1..=4], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_ramp_states_stay_between_neighbors() {
        // Monotone ramp in the interior; the periodic wrap creates a drop at
        // the domain edge, where the limiters must fall back to zero slope.
        let n = 16;
        let grid = Grid1D::uniform(0.0, 1.0, n, 1).unwrap();
        let mut u = Field1D::from_fn(&grid, |x| 2.0 * x + 1.0);
        Periodic1D.apply(&mut u);

        let dx = grid.dx;

        // Both signs, so both branches of the time-centered projection run
        for velocity in [1.0_f64, -1.0] {
            let dt = 0.8 * dx / velocity.abs();
            for limiter in SlopeLimiter::ALL {
                let mut rec = Reconstructor::new(Reconstruction::Linear(limiter), n, 1);
                let states = rec.reconstruct(&u, dx, dt, velocity, &Periodic1D);
                for i in states.interface_range() {
                    let lo = u.data[i - 1].min(u.data[i]) - 1e-12;
                    let hi = u.data[i - 1].max(u.data[i]) + 1e-12;
                    assert!(
                        (lo..=hi).contains(&states.left[i]),
                        "{limiter}, a = {velocity}: left state {} at interface {i} outside [{lo}, {hi}]",
                        states.left[i]
                    );
                    assert!(
                        (lo..=hi).contains(&states.right[i]),
                        "{limiter}, a = {velocity}: right state {} at interface {i} outside [{lo}, {hi}]",
                        states.right[i]
                    );
                }
            }
        }
    }

    #[test]
    fn test_time_centering_with_negative_velocity() {
        // u = x, MC slope 1, courant -0.5
        let mut u = Field1D::new(4, 1);
        u.data = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

        let mut rec = Reconstructor::new(Reconstruction::Linear(SlopeLimiter::Mc), 4, 1);
        let states = rec.reconstruct(&u, 1.0, 0.5, -1.0, &NoOpBoundary);

        assert!((states.left[2] - (1.0 + 0.5 * 1.5)).abs() < 1e-14);
        assert!((states.right[2] - (2.0 - 0.5 * 0.5)).abs() < 1e-14);
    }

    #[test]
    fn test_time_centering_on_linear_data() {
        // u = x on an interior ramp: slope 1 for MC.
        let mut u = Field1D::new(4, 1);
        u.data = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let dx = 1.0;
        let dt = 0.5;
        let velocity = 1.0;

        let mut rec = Reconstructor::new(Reconstruction::Linear(SlopeLimiter::Mc), 4, 1);
        let states = rec.reconstruct(&u, dx, dt, velocity, &NoOpBoundary);

        // Interface 2: left from cell 1, right from cell 2, courant 0.5
        assert!((states.left[2] - (1.0 + 0.5 * 0.5)).abs() < 1e-14);
        assert!((states.right[2] - (2.0 - 0.5 * 1.5)).abs() < 1e-14);
    }

    #[test]
    fn test_tvd_uses_spatial_half_jump() {
        let mut u = Field1D::new(4, 1);
        u.data = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

        let mut rec = Reconstructor::new(Reconstruction::Linear(SlopeLimiter::Tvd), 4, 1);
        // dt and velocity must not matter for the TVD branch
        let a = rec.reconstruct(&u, 1.0, 0.9, 1.0, &NoOpBoundary).clone();
        let b = rec.reconstruct(&u, 1.0, 0.0, -3.0, &NoOpBoundary).clone();

        assert_eq!(a.left, b.left);
        assert_eq!(a.right, b.right);
        assert!((a.left[2] - 1.5).abs() < 1e-14);
        assert!((a.right[2] - 1.5).abs() < 1e-14);
    }

    #[test]
    fn test_ghost_slopes_are_periodic_images() {
        let n = 8;
        let grid = Grid1D::uniform(0.0, 1.0, n, 1).unwrap();
        let mut u = Field1D::from_fn(&grid, |x| (2.0 * std::f64::consts::PI * x).sin());
        Periodic1D.apply(&mut u);

        let mut rec = Reconstructor::new(Reconstruction::Linear(SlopeLimiter::Mc), n, 1);
        rec.reconstruct(&u, grid.dx, 0.0, 1.0, &Periodic1D);

        let s = &rec.slopes().data;
        assert_eq!(s[0], s[n]);
        assert_eq!(s[n + 1], s[1]);
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(
            "Linear".parse::<ReconstructionOrder>().unwrap(),
            ReconstructionOrder::Linear
        );
        assert!(matches!(
            "cubic".parse::<ReconstructionOrder>(),
            Err(FvError::InvalidConfig {
                field: "reconstruction_order",
                ..
            })
        ));
    }

    #[test]
    fn test_scheme_from_parts() {
        let s = Reconstruction::from_parts(ReconstructionOrder::Constant, SlopeLimiter::Tvd);
        assert_eq!(s, Reconstruction::Constant);
        assert_eq!(s.limiter_name(), "none");

        let s = Reconstruction::from_parts(ReconstructionOrder::Linear, SlopeLimiter::SuperBee);
        assert_eq!(s.order(), ReconstructionOrder::Linear);
        assert_eq!(s.limiter_name(), "superbee");
    }

    /// Leaves ghost slopes as computed; for tests on non-periodic data.
    struct NoOpBoundary;

    impl GhostBoundary for NoOpBoundary {
        fn apply(&self, _field: &mut Field1D) {}

        fn name(&self) -> &'static str {
            "none"
        }
    }
}
