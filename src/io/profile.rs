//! Plain-text profile output.
//!
//! A profile file holds a commented header followed by one `x u` pair per
//! interior cell:
//!
//! ```text
//! # fv-advect profile
//! # reconstruction = linear
//! # limiter = mc
//! # integrator = rk2
//! # velocity = 1
//! # cells = 64
//! # time = 1.000000000000e0
//! 7.812500000000e-3 1.234567890123e-10
//! ...
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::mesh::Grid1D;
use crate::solver::Field1D;

/// Error type for profile output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error during file operations.
    #[error("output I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Field and grid disagree in size.
    #[error("field has {field} values but grid has {grid} cells")]
    LengthMismatch {
        /// Stored values in the field
        field: usize,
        /// Cells in the grid (ghosts included)
        grid: usize,
    },
}

/// Metadata identifying a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunLabel {
    /// Reconstruction order name
    pub reconstruction: &'static str,
    /// Limiter name ("none" for constant reconstruction)
    pub limiter: &'static str,
    /// Time integrator name
    pub integrator: &'static str,
    /// Advection velocity
    pub velocity: f64,
    /// Number of interior cells
    pub n_cells: usize,
}

impl RunLabel {
    /// Deterministic file stem, e.g. `linear_mc_rk2_v1_n64`.
    ///
    /// Signs and decimal points in the velocity become `m` and `p` so the
    /// stem is safe on every filesystem.
    pub fn file_stem(&self) -> String {
        let velocity = format!("{}", self.velocity).replace('-', "m").replace('.', "p");
        format!(
            "{}_{}_{}_v{}_n{}",
            self.reconstruction, self.limiter, self.integrator, velocity, self.n_cells
        )
    }
}

/// Write the interior profile of `field` to `writer`.
pub fn write_profile<W: Write>(
    writer: &mut W,
    grid: &Grid1D,
    field: &Field1D,
    time: f64,
    label: &RunLabel,
) -> Result<(), OutputError> {
    if field.len() != grid.n_total() {
        return Err(OutputError::LengthMismatch {
            field: field.len(),
            grid: grid.n_total(),
        });
    }

    writeln!(writer, "# fv-advect profile")?;
    writeln!(writer, "# reconstruction = {}", label.reconstruction)?;
    writeln!(writer, "# limiter = {}", label.limiter)?;
    writeln!(writer, "# integrator = {}", label.integrator)?;
    writeln!(writer, "# velocity = {}", label.velocity)?;
    writeln!(writer, "# cells = {}", label.n_cells)?;
    writeln!(writer, "# time = {time:.12e}")?;

    for i in grid.interior() {
        writeln!(writer, "{:.12e} {:.12e}", grid.centers[i], field.data[i])?;
    }
    Ok(())
}

/// Write the profile to `<dir>/<stem>.dat`, creating `dir` if needed.
///
/// Returns the full path of the created file.
pub fn write_profile_file(
    dir: impl AsRef<Path>,
    grid: &Grid1D,
    field: &Field1D,
    time: f64,
    label: &RunLabel,
) -> Result<PathBuf, OutputError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.dat", label.file_stem()));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_profile(&mut writer, grid, field, time, label)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), "wrote profile");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> RunLabel {
        RunLabel {
            reconstruction: "linear",
            limiter: "mc",
            integrator: "rk2",
            velocity: 1.0,
            n_cells: 4,
        }
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(label().file_stem(), "linear_mc_rk2_v1_n4");

        let mut l = label();
        l.velocity = -0.5;
        assert_eq!(l.file_stem(), "linear_mc_rk2_vm0p5_n4");
    }

    #[test]
    fn test_profile_has_interior_rows_only() {
        let grid = Grid1D::uniform(0.0, 1.0, 4, 1).unwrap();
        let mut u = Field1D::from_fn(&grid, |x| 10.0 * x);
        u.data[0] = 99.0;

        let mut buf = Vec::new();
        write_profile(&mut buf, &grid, &u, 0.5, &label()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let rows: Vec<(f64, f64)> = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(|l| {
                let mut it = l.split_whitespace().map(|s| s.parse::<f64>().unwrap());
                (it.next().unwrap(), it.next().unwrap())
            })
            .collect();

        assert_eq!(rows.len(), 4);
        assert!((rows[0].0 - 0.125).abs() < 1e-12);
        assert!((rows[3].1 - 8.75).abs() < 1e-10);
        assert!(text.contains("# limiter = mc"));
    }

    #[test]
    fn test_length_mismatch() {
        let grid = Grid1D::uniform(0.0, 1.0, 4, 1).unwrap();
        let u = Field1D::new(5, 1);
        let mut buf = Vec::new();
        let err = write_profile(&mut buf, &grid, &u, 0.0, &label()).unwrap_err();
        assert!(matches!(err, OutputError::LengthMismatch { field: 7, grid: 6 }));
    }
}
