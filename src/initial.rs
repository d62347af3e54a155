//! Initial conditions, evaluated at interior cell centers.
//!
//! Profiles are defined on the unit interval and centered at x = 0.5.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FvError;
use crate::mesh::Grid1D;
use crate::solver::Field1D;

/// Gaussian half-width.
const GAUSSIAN_WIDTH: f64 = 0.1;
/// Carrier wavenumber of the wave packet.
const PACKET_WAVENUMBER: f64 = 10.0;
/// Square pulse support [start, end).
const PULSE_START: f64 = 0.333;
const PULSE_END: f64 = 0.666;

/// Initial profile selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InitialCondition {
    /// exp(-(x - 0.5)^2 / 0.1^2)
    #[default]
    Gaussian,
    /// Gaussian envelope times cos(2 pi 10 (x - 0.5))
    WavePacket,
    /// 1 on [0.333, 0.666), 0 elsewhere
    SquarePulse,
}

impl InitialCondition {
    /// Value of the profile at `x`.
    pub fn evaluate(self, x: f64) -> f64 {
        let xi = x - 0.5;
        match self {
            InitialCondition::Gaussian => gaussian(xi),
            InitialCondition::WavePacket => {
                gaussian(xi) * (2.0 * PI * PACKET_WAVENUMBER * xi).cos()
            }
            InitialCondition::SquarePulse => {
                if (PULSE_START..PULSE_END).contains(&x) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Sample the profile on the interior of `grid`.
    ///
    /// Ghost cells are left at zero.
    pub fn sample(self, grid: &Grid1D) -> Field1D {
        Field1D::from_fn(grid, |x| self.evaluate(x))
    }

    /// Short name used in labels and configuration.
    pub fn name(self) -> &'static str {
        match self {
            InitialCondition::Gaussian => "gaussian",
            InitialCondition::WavePacket => "wave-packet",
            InitialCondition::SquarePulse => "square-pulse",
        }
    }
}

fn gaussian(xi: f64) -> f64 {
    (-(xi * xi) / (GAUSSIAN_WIDTH * GAUSSIAN_WIDTH)).exp()
}

impl fmt::Display for InitialCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitialCondition {
    type Err = FvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "gaussian" => Ok(InitialCondition::Gaussian),
            "wave-packet" | "wavepacket" => Ok(InitialCondition::WavePacket),
            "square-pulse" | "square" => Ok(InitialCondition::SquarePulse),
            other => Err(FvError::invalid_config(
                "initial_condition",
                format!(
                    "unknown initial condition `{other}` (expected gaussian, wave-packet or square-pulse)"
                ),
            )),
        }
    }
}

impl TryFrom<String> for InitialCondition {
    type Error = FvError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InitialCondition> for String {
    fn from(ic: InitialCondition) -> Self {
        ic.name().to_string()
    }
}
