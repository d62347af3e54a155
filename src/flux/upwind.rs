//! Upwind numerical flux for scalar advection.
//!
//! For du/dt + a * du/dx = 0 the exact Riemann solution at an interface is
//! the upwind state, so the numerical flux is:
//! F^* = a * u_L if a > 0 (information flows right, use left state)
//! F^* = a * u_R if a <= 0 (information flows left, use right state)

use crate::solver::InterfaceStates;

/// Upwind flux at a single interface.
///
/// # Arguments
/// * `u_left` - State just left of the interface
/// * `u_right` - State just right of the interface
/// * `a` - Advection velocity
pub fn upwind_flux(u_left: f64, u_right: f64, a: f64) -> f64 {
    if a > 0.0 { a * u_left } else { a * u_right }
}

/// Evaluate the upwind flux at every interface bounding the interior.
///
/// `flux[i]` is the flux through the left edge of cell `i`. Entries outside
/// [`InterfaceStates::interface_range`] are not written.
pub fn evaluate_upwind(states: &InterfaceStates, a: f64, flux: &mut [f64]) {
    debug_assert_eq!(flux.len(), states.left.len(), "flux buffer shape mismatch");

    for i in states.interface_range() {
        flux[i] = upwind_flux(states.left[i], states.right[i], a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Periodic1D;
    use crate::solver::{Field1D, Reconstruction, Reconstructor, SlopeLimiter};

    #[test]
    fn test_upwind_positive_velocity_takes_left() {
        assert_eq!(upwind_flux(1.0, 5.0, 2.0), 2.0);
    }

    #[test]
    fn test_upwind_negative_velocity_takes_right() {
        assert_eq!(upwind_flux(1.0, 5.0, -2.0), -10.0);
    }

    #[test]
    fn test_upwind_consistent_for_equal_states() {
        for a in [-1.5, 0.5, 3.0] {
            assert!((upwind_flux(0.7, 0.7, a) - a * 0.7).abs() < 1e-15);
        }
    }

    #[test]
    fn test_evaluate_touches_interior_interfaces_only() {
        let mut states = InterfaceStates::new(3, 1);
        states.left = vec![9.0, 1.0, 2.0, 3.0, 4.0];
        states.right = vec![9.0, 5.0, 6.0, 7.0, 8.0];

        let mut flux = vec![-1.0; 5];
        evaluate_upwind(&states, 0.5, &mut flux);

        assert_eq!(flux, vec![-1.0, 0.5, 1.0, 1.5, 2.0]);

        evaluate_upwind(&states, -1.0, &mut flux);
        assert_eq!(flux, vec![-1.0, -5.0, -6.0, -7.0, -8.0]);
    }

    #[test]
    fn test_uniform_states_give_velocity_times_value() {
        let c = 2.5;
        let mut u = Field1D::new(8, 1);
        u.fill(c);

        let mut schemes = vec![Reconstruction::Constant];
        schemes.extend(SlopeLimiter::ALL.map(Reconstruction::Linear));

        for velocity in [1.5, -0.75] {
            for scheme in &schemes {
                let mut rec = Reconstructor::new(*scheme, 8, 1);
                let states = rec.reconstruct(&u, 0.125, 0.05, velocity, &Periodic1D);
                let mut flux = vec![0.0; u.len()];

                evaluate_upwind(states, velocity, &mut flux);

                for i in states.interface_range() {
                    assert!(
                        (flux[i] - velocity * c).abs() < 1e-14,
                        "{scheme:?}, a = {velocity}: flux {} at interface {i}",
                        flux[i]
                    );
                }
            }
        }
    }
}
