//! Grid representation.
//!
//! Only uniform 1D cell-centered grids are supported.

mod grid1d;

pub use grid1d::Grid1D;
