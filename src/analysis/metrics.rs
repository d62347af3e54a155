//! Profile diagnostics and error metrics.
//!
//! All quantities are computed over interior cells only.

use crate::solver::Field1D;

/// Total mass: sum of interior values times dx.
///
/// Exactly conserved by the periodic scheme up to round-off.
pub fn total_mass(field: &Field1D, dx: f64) -> f64 {
    field.interior().iter().sum::<f64>() * dx
}

/// Total variation sum |u_{i+1} - u_i| over the interior, including the
/// periodic wrap from the last cell to the first.
pub fn total_variation(field: &Field1D) -> f64 {
    let u = field.interior();
    let n = u.len();
    (0..n).map(|i| (u[(i + 1) % n] - u[i]).abs()).sum()
}

/// Minimum and maximum interior values.
pub fn extrema(field: &Field1D) -> (f64, f64) {
    field
        .interior()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Error statistics of a computed profile against a reference.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonMetrics {
    /// Root mean square error: sqrt(mean((model - reference)²))
    pub rmse: f64,
    /// Mean absolute error: mean(|model - reference|)
    pub mae: f64,
    /// Bias (mean error): mean(model - reference)
    pub bias: f64,
    /// Maximum absolute error: max(|model - reference|)
    pub max_error: f64,
    /// Number of data points
    pub n_points: usize,
}

impl ComparisonMetrics {
    /// Compare two equally long series.
    ///
    /// # Panics
    ///
    /// Panics if the series have different lengths or are empty.
    pub fn compute(model: &[f64], reference: &[f64]) -> Self {
        assert_eq!(
            model.len(),
            reference.len(),
            "Model and reference must have same length"
        );
        assert!(!model.is_empty(), "Series must not be empty");

        let n = model.len() as f64;
        let (sum, sum_sq, sum_abs, max_error) = model.iter().zip(reference).fold(
            (0.0, 0.0, 0.0, 0.0f64),
            |(s, s2, sa, mx), (&m, &r)| {
                let e = m - r;
                (s + e, s2 + e * e, sa + e.abs(), mx.max(e.abs()))
            },
        );

        Self {
            rmse: (sum_sq / n).sqrt(),
            mae: sum_abs / n,
            bias: sum / n,
            max_error,
            n_points: model.len(),
        }
    }

    /// Compare the interiors of two fields.
    pub fn between_fields(model: &Field1D, reference: &Field1D) -> Self {
        Self::compute(model.interior(), reference.interior())
    }
}
