//! Ghost-cell boundary rules.
//!
//! A boundary rule fills the ghost cells of a [`Field1D`] from its interior
//! so that neighbor stencils never read stale data. It must be applied
//! before any reconstruction or flux evaluation that reaches across the
//! edge of the interior.
//!
//! Only the periodic rule is provided.

mod periodic;

pub use periodic::{Periodic1D, apply_periodic};

use crate::solver::Field1D;

/// Trait for rules that populate ghost cells.
pub trait GhostBoundary: Send + Sync {
    /// Overwrite the ghost cells of `field` from its interior.
    fn apply(&self, field: &mut Field1D);

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}
