//! Periodic ghost-cell boundary.

use super::GhostBoundary;
use crate::solver::Field1D;

/// Periodic wrap-around boundary.
///
/// Left ghost cell `j` takes the value of interior cell `j + n`, right ghost
/// cell `j` takes the value of interior cell `j - n`, where `n` is the
/// interior cell count.
#[derive(Clone, Copy, Debug, Default)]
pub struct Periodic1D;

impl GhostBoundary for Periodic1D {
    fn apply(&self, field: &mut Field1D) {
        apply_periodic(&mut field.data, field.n_interior, field.n_ghost);
    }

    fn name(&self) -> &'static str {
        "periodic"
    }
}

/// Fill the ghost slots of `data` with periodic images of its interior.
///
/// # Panics
/// Panics if `data` is not `n_interior + 2 * n_ghost` long or if
/// `n_ghost > n_interior`.
pub fn apply_periodic(data: &mut [f64], n_interior: usize, n_ghost: usize) {
    assert_eq!(data.len(), n_interior + 2 * n_ghost, "field shape mismatch");
    assert!(n_ghost <= n_interior, "ghost layer wider than interior");

    for j in 0..n_ghost {
        data[j] = data[j + n_interior];
    }
    for j in n_ghost + n_interior..n_interior + 2 * n_ghost {
        data[j] = data[j - n_interior];
    }
}
