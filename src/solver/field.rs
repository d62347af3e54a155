//! Cell-centered scalar storage with ghost padding.

use crate::mesh::Grid1D;

/// Scalar field sampled at cell centers.
///
/// Stores `n_interior + 2 * n_ghost` values in one contiguous array with the
/// same indexing as [`Grid1D::centers`]. Ghost entries are derived data: they
/// are only meaningful after a boundary rule has been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Field1D {
    /// Values, interior cells at `n_ghost..n_ghost + n_interior`
    pub data: Vec<f64>,
    /// Number of interior cells
    pub n_interior: usize,
    /// Number of ghost cells on each side
    pub n_ghost: usize,
}

impl Field1D {
    /// Create a zero-initialized field.
    pub fn new(n_interior: usize, n_ghost: usize) -> Self {
        Self {
            data: vec![0.0; n_interior + 2 * n_ghost],
            n_interior,
            n_ghost,
        }
    }

    /// Create a zero-initialized field shaped like `grid`.
    pub fn zeros(grid: &Grid1D) -> Self {
        Self::new(grid.n_interior, grid.n_ghost)
    }

    /// Sample `f` at every interior cell center of `grid`.
    ///
    /// Ghost cells are left at zero; apply a boundary rule before use.
    pub fn from_fn<F>(grid: &Grid1D, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut field = Self::zeros(grid);
        for i in grid.interior() {
            field.data[i] = f(grid.centers[i]);
        }
        field
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field stores no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage index range of the interior cells.
    pub fn interior_range(&self) -> std::ops::Range<usize> {
        self.n_ghost..self.n_ghost + self.n_interior
    }

    /// Interior values.
    pub fn interior(&self) -> &[f64] {
        &self.data[self.interior_range()]
    }

    /// Mutable interior values.
    pub fn interior_mut(&mut self) -> &mut [f64] {
        let range = self.interior_range();
        &mut self.data[range]
    }

    /// Overwrite all values (ghosts included) with those of `other`.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn copy_from(&mut self, other: &Field1D) {
        assert_eq!(self.data.len(), other.data.len(), "field shape mismatch");
        self.data.copy_from_slice(&other.data);
    }

    /// Add c * other to the interior of self (axpy operation).
    ///
    /// Ghost cells are not touched.
    pub fn axpy_interior(&mut self, c: f64, other: &Field1D) {
        let range = self.interior_range();
        for (v, o) in self.data[range.clone()].iter_mut().zip(&other.data[range]) {
            *v += c * o;
        }
    }

    /// Set every stored value to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// First interior cell holding a NaN or infinity, as (storage index, value).
    pub fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.interior_range()
            .map(|i| (i, self.data[i]))
            .find(|(_, v)| !v.is_finite())
    }
}
