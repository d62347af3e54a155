//! Diagnostics for advected profiles.
//!
//! - Conservation and monotonicity checks: [`total_mass`], [`total_variation`], [`extrema`]
//! - Error statistics against a reference profile: [`ComparisonMetrics`]
//!
//! For periodic advection the exact solution after a whole number of domain
//! crossings is the initial profile, which makes it the natural reference.

mod metrics;

pub use metrics::{ComparisonMetrics, extrema, total_mass, total_variation};
