//! Slope limiters for piecewise-linear reconstruction.
//!
//! Limiters bound the reconstructed slope so that no new extrema appear near
//! discontinuities, while keeping second-order slopes in smooth regions.
//!
//! This module provides:
//! - `minmod` / `maxmod` selectors
//! - Monotonized-central (MC) and SuperBee limited gradients
//! - A van Leer type (TVD) limited half-jump
//!
//! MC and SuperBee return a gradient (units of u / x). The TVD limiter
//! returns a half-jump in u, already scaled to the cell half-width, and is
//! paired with a spatial-only edge reconstruction (see [`EdgeProjection`]).
//!
//! # References
//! - van Leer (1977), "Towards the ultimate conservative difference scheme IV"
//! - Roe (1985), "Some contributions to the modelling of discontinuous flows"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FvError;

/// Minmod of two arguments.
///
/// Returns the argument of smaller magnitude when both share a sign,
/// otherwise 0.
pub fn minmod(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        0.0
    } else if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

/// Maxmod of two arguments.
///
/// Returns the argument of larger magnitude when both share a sign,
/// otherwise 0.
pub fn maxmod(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        0.0
    } else if a.abs() > b.abs() {
        a
    } else {
        b
    }
}

/// Monotonized-central limited gradient in cell `i`.
///
/// minmod(minmod(2 * du_left, 2 * du_right), du_central), all divided by dx.
pub fn mc_slope(u_left: f64, u: f64, u_right: f64, dx: f64) -> f64 {
    let forward = 2.0 * (u - u_left) / dx;
    let backward = 2.0 * (u_right - u) / dx;
    let centered = (u_right - u_left) / (2.0 * dx);
    minmod(minmod(forward, backward), centered)
}

/// SuperBee limited gradient in cell `i`.
pub fn superbee_slope(u_left: f64, u: f64, u_right: f64, dx: f64) -> f64 {
    let d_left = (u - u_left) / dx;
    let d_right = (u_right - u) / dx;
    let s1 = minmod(d_right, 2.0 * d_left);
    let s2 = minmod(2.0 * d_right, d_left);
    maxmod(s1, s2)
}

/// TVD (van Leer) limited half-jump in cell `i`.
///
/// max((u+ - u)(u - u-), 0) / (u+ - u-). Zero at extrema and in flat
/// regions, including when the denominator vanishes.
pub fn tvd_slope(u_left: f64, u: f64, u_right: f64) -> f64 {
    let num = ((u_right - u) * (u - u_left)).max(0.0);
    let den = u_right - u_left;
    if num == 0.0 || den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// How a limited slope is turned into edge values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeProjection {
    /// Edge = u ± 0.5 * dx * (1 ∓ a * dt / dx) * slope (upwind Taylor
    /// expansion to the half step).
    TimeCentered,
    /// Edge = u ± slope (no time centering).
    Spatial,
}

/// Slope limiter choice for linear reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SlopeLimiter {
    /// Monotonized central
    #[default]
    Mc,
    /// Roe's SuperBee
    SuperBee,
    /// van Leer type TVD half-jump
    Tvd,
}

impl SlopeLimiter {
    /// All supported limiters.
    pub const ALL: [SlopeLimiter; 3] = [SlopeLimiter::Mc, SlopeLimiter::SuperBee, SlopeLimiter::Tvd];

    /// Limited slope of cell `i` from its neighbors.
    ///
    /// The unit of the result depends on [`Self::edge_projection`].
    #[inline]
    pub fn slope(self, u_left: f64, u: f64, u_right: f64, dx: f64) -> f64 {
        match self {
            SlopeLimiter::Mc => mc_slope(u_left, u, u_right, dx),
            SlopeLimiter::SuperBee => superbee_slope(u_left, u, u_right, dx),
            SlopeLimiter::Tvd => tvd_slope(u_left, u, u_right),
        }
    }

    /// Edge reconstruction paired with this limiter.
    pub fn edge_projection(self) -> EdgeProjection {
        match self {
            SlopeLimiter::Mc | SlopeLimiter::SuperBee => EdgeProjection::TimeCentered,
            SlopeLimiter::Tvd => EdgeProjection::Spatial,
        }
    }

    /// Short name used in labels and configuration.
    pub fn name(self) -> &'static str {
        match self {
            SlopeLimiter::Mc => "mc",
            SlopeLimiter::SuperBee => "superbee",
            SlopeLimiter::Tvd => "tvd",
        }
    }
}

impl fmt::Display for SlopeLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlopeLimiter {
    type Err = FvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mc" | "monotonized-central" => Ok(SlopeLimiter::Mc),
            "superbee" | "super-bee" => Ok(SlopeLimiter::SuperBee),
            "tvd" | "van-leer" | "vanleer" => Ok(SlopeLimiter::Tvd),
            other => Err(FvError::invalid_config(
                "limiter",
                format!("unknown limiter `{other}` (expected mc, superbee or tvd)"),
            )),
        }
    }
}

impl TryFrom<String> for SlopeLimiter {
    type Error = FvError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SlopeLimiter> for String {
    fn from(limiter: SlopeLimiter) -> Self {
        limiter.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_minmod_cases() {
        assert_eq!(minmod(1.0, 2.0), 1.0);
        assert_eq!(minmod(-3.0, -2.0), -2.0);
        assert_eq!(minmod(1.0, -2.0), 0.0);
        assert_eq!(minmod(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_maxmod_cases() {
        assert_eq!(maxmod(1.0, 2.0), 2.0);
        assert_eq!(maxmod(-3.0, -2.0), -3.0);
        assert_eq!(maxmod(1.0, -2.0), 0.0);
        assert_eq!(maxmod(0.0, -5.0), 0.0);
    }

    #[test]
    fn test_slopes_vanish_at_extremum() {
        let dx = 0.1;
        for limiter in SlopeLimiter::ALL {
            assert_eq!(limiter.slope(0.0, 1.0, 0.0, dx), 0.0, "{limiter} at max");
            assert_eq!(limiter.slope(1.0, 0.0, 1.0, dx), 0.0, "{limiter} at min");
        }
    }

    #[test]
    fn test_tvd_flat_region_is_zero() {
        assert_eq!(tvd_slope(2.0, 2.0, 2.0), 0.0);
        // One-sided flat: numerator zero
        assert_eq!(tvd_slope(2.0, 2.0, 3.0), 0.0);
        assert!(tvd_slope(1.0, 1.0, 1.0).is_finite());
    }

    #[test]
    fn test_linear_data_recovers_gradient() {
        // u = 3x sampled at spacing dx
        let dx = 0.25;
        let (a, b, c) = (0.0, 0.75, 1.5);
        assert!((mc_slope(a, b, c, dx) - 3.0).abs() < 1e-14);
        assert!((superbee_slope(a, b, c, dx) - 3.0).abs() < 1e-14);
        // Half-jump: 0.5 * 3 * dx
        assert!((tvd_slope(a, b, c) - 0.375).abs() < 1e-14);
    }

    #[test]
    fn test_superbee_is_steeper_than_mc_near_jump() {
        let dx = 1.0;
        // Sharp rise followed by gentle rise
        let mc = mc_slope(0.0, 1.0, 1.2, dx);
        let sb = superbee_slope(0.0, 1.0, 1.2, dx);
        assert!(sb >= mc, "superbee {sb} should not be below mc {mc}");
    }

    #[test]
    fn test_edge_projection_split() {
        assert_eq!(SlopeLimiter::Mc.edge_projection(), EdgeProjection::TimeCentered);
        assert_eq!(
            SlopeLimiter::SuperBee.edge_projection(),
            EdgeProjection::TimeCentered
        );
        assert_eq!(SlopeLimiter::Tvd.edge_projection(), EdgeProjection::Spatial);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("MC".parse::<SlopeLimiter>().unwrap(), SlopeLimiter::Mc);
        assert_eq!(
            "superbee".parse::<SlopeLimiter>().unwrap(),
            SlopeLimiter::SuperBee
        );
        assert_eq!(" tvd ".parse::<SlopeLimiter>().unwrap(), SlopeLimiter::Tvd);

        let err = "minmod".parse::<SlopeLimiter>().unwrap_err();
        assert!(matches!(err, FvError::InvalidConfig { field: "limiter", .. }));
    }

    proptest! {
        #[test]
        fn prop_minmod_zero_unless_same_sign(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            if a * b <= 0.0 {
                prop_assert_eq!(minmod(a, b), 0.0);
            } else {
                let m = minmod(a, b);
                prop_assert!(m.abs() <= a.abs().min(b.abs()));
                prop_assert!(m == a || m == b);
            }
        }

        #[test]
        fn prop_minmod_symmetric(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            prop_assert_eq!(minmod(a, b), minmod(b, a));
            prop_assert_eq!(minmod(-a, -b), -minmod(a, b));
        }

        #[test]
        fn prop_maxmod_selects_larger(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            let m = maxmod(a, b);
            if a * b <= 0.0 {
                prop_assert_eq!(m, 0.0);
            } else {
                prop_assert_eq!(m.abs(), a.abs().max(b.abs()));
            }
        }

        #[test]
        fn prop_limited_slopes_bounded_by_twice_one_sided(
            ul in -10.0f64..10.0,
            u in -10.0f64..10.0,
            ur in -10.0f64..10.0,
        ) {
            let dx = 0.5;
            let bound = 2.0 * ((u - ul).abs().min((ur - u).abs())) / dx + 1e-12;
            prop_assert!(mc_slope(ul, u, ur, dx).abs() <= bound);
            prop_assert!(superbee_slope(ul, u, ur, dx).abs() <= bound);
            // TVD half-jump never exceeds the smaller one-sided jump
            prop_assert!(tvd_slope(ul, u, ur).abs() <= (u - ul).abs().min((ur - u).abs()) + 1e-12);
        }
    }
}
