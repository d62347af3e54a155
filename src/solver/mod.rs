//! Finite-volume solver components.
//!
//! # Submodules
//!
//! - [`field`]: Cell-centered storage with ghost padding
//! - [`limiters`]: Slope limiters (MC, SuperBee, TVD)
//! - [`reconstruction`]: Interface states from cell averages
//! - [`rhs`]: Advection operator combining reconstruction and upwind flux

pub mod field;
pub mod limiters;
pub mod reconstruction;
pub mod rhs;

pub use field::Field1D;
pub use limiters::{EdgeProjection, SlopeLimiter, maxmod, mc_slope, minmod, superbee_slope, tvd_slope};
pub use reconstruction::{InterfaceStates, Reconstruction, ReconstructionOrder, Reconstructor};
pub use rhs::{AdvectionOperator, DtPolicy};
