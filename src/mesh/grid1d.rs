//! Uniform 1D cell-centered grid with ghost padding.
//!
//! The interval [x_min, x_max] is split into `n_interior` equal cells and
//! padded with `n_ghost` cells on each side at the same spacing. Cell
//! centers are stored in one contiguous array indexed like a field:
//! storage index `i` has center `x_min + (i - n_ghost + 0.5) * dx`.

use crate::error::FvError;

/// Immutable cell-centered grid.
#[derive(Clone, Debug)]
pub struct Grid1D {
    /// Left endpoint of the interior domain
    pub x_min: f64,
    /// Right endpoint of the interior domain
    pub x_max: f64,
    /// Number of interior cells
    pub n_interior: usize,
    /// Number of ghost cells on each side
    pub n_ghost: usize,
    /// Uniform cell width
    pub dx: f64,
    /// Cell centers, length `n_interior + 2 * n_ghost`
    pub centers: Vec<f64>,
}

impl Grid1D {
    /// Build a uniform grid of [x_min, x_max] with ghost padding.
    ///
    /// # Errors
    /// `InvalidConfig` if there are no interior cells, no ghost cells, more
    /// ghost cells than interior cells (the periodic image would not exist),
    /// or the domain is empty or non-finite.
    pub fn uniform(
        x_min: f64,
        x_max: f64,
        n_interior: usize,
        n_ghost: usize,
    ) -> Result<Self, FvError> {
        if n_interior == 0 {
            return Err(FvError::invalid_config(
                "interior_count",
                "need at least one interior cell",
            ));
        }
        if n_ghost == 0 {
            return Err(FvError::invalid_config(
                "ghost_count",
                "need at least one ghost cell per side",
            ));
        }
        if n_ghost > n_interior {
            return Err(FvError::invalid_config(
                "ghost_count",
                format!("{n_ghost} ghost cells exceed {n_interior} interior cells"),
            ));
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(FvError::invalid_config(
                "domain",
                "domain bounds must be finite",
            ));
        }
        if x_max <= x_min {
            return Err(FvError::invalid_config(
                "domain",
                format!("domain_max ({x_max}) must be greater than domain_min ({x_min})"),
            ));
        }

        let dx = (x_max - x_min) / n_interior as f64;
        let n_total = n_interior + 2 * n_ghost;
        let centers = (0..n_total)
            .map(|i| x_min + (i as f64 - n_ghost as f64 + 0.5) * dx)
            .collect();

        Ok(Self {
            x_min,
            x_max,
            n_interior,
            n_ghost,
            dx,
            centers,
        })
    }

    /// Total number of cells including ghosts.
    pub fn n_total(&self) -> usize {
        self.centers.len()
    }

    /// Storage index range of the interior cells.
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.n_ghost..self.n_ghost + self.n_interior
    }

    /// Interior cell centers.
    pub fn interior_centers(&self) -> &[f64] {
        &self.centers[self.interior()]
    }

    /// Domain length.
    pub fn length(&self) -> f64 {
        self.x_max - self.x_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid_spacing() {
        let grid = Grid1D::uniform(0.0, 1.0, 4, 1).unwrap();

        assert_eq!(grid.n_total(), 6);
        assert!((grid.dx - 0.25).abs() < 1e-14);
        assert!((grid.length() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_centers_extend_into_ghosts() {
        let grid = Grid1D::uniform(0.0, 1.0, 4, 1).unwrap();

        let expected = [-0.125, 0.125, 0.375, 0.625, 0.875, 1.125];
        for (x, e) in grid.centers.iter().zip(expected) {
            assert!((x - e).abs() < 1e-14, "expected {e}, got {x}");
        }
        assert_eq!(grid.interior(), 1..5);
        assert_eq!(grid.interior_centers().len(), 4);
    }

    #[test]
    fn test_two_ghost_layers() {
        let grid = Grid1D::uniform(-1.0, 1.0, 8, 2).unwrap();

        assert_eq!(grid.n_total(), 12);
        assert!((grid.centers[0] - (-1.0 - 1.5 * 0.25)).abs() < 1e-14);
        assert!((grid.centers[2] - (-1.0 + 0.125)).abs() < 1e-14);
    }

    #[test]
    fn test_rejects_empty_interior() {
        let err = Grid1D::uniform(0.0, 1.0, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            FvError::InvalidConfig {
                field: "interior_count",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_domain() {
        assert!(Grid1D::uniform(1.0, 1.0, 4, 1).is_err());
        assert!(Grid1D::uniform(2.0, 1.0, 4, 1).is_err());
        assert!(Grid1D::uniform(0.0, f64::INFINITY, 4, 1).is_err());
    }

    #[test]
    fn test_rejects_bad_ghost_count() {
        assert!(Grid1D::uniform(0.0, 1.0, 4, 0).is_err());
        assert!(Grid1D::uniform(0.0, 1.0, 2, 3).is_err());
    }
}
