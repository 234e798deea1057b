pub mod state;

use ode_solvers::{System, Vector2};

use crate::physics::aerodynamics;
use crate::vehicle::PhysicalConstants;
use state::{Deriv, State};

// ---------------------------------------------------------------------------
// Equations of motion (1-D, constant mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives at `time`.
///
/// Forces modeled:
///   1. Gravity: constant `g`, down
///   2. Thrust: `T_avg` until burnout, up
///   3. Drag: quadratic, opposing velocity, density `exp(-h/H)`
///
/// The mass is the mean of wet and dry mass for the whole flight.
pub fn derivatives(time: f64, state: &State, rocket: &PhysicalConstants) -> Deriv {
    let thrust = rocket.thrust_at(time);
    let drag = aerodynamics::drag_force(
        state.altitude,
        state.velocity,
        rocket.drag_factor(),
        rocket.scale_height,
    );

    Deriv {
        daltitude: state.velocity,
        dvelocity: (thrust + drag) / rocket.average_mass() - rocket.gravity,
    }
}

/// Vertical ascent of a rocket as a 2-state ODE `(h, v)`.
pub struct Ascent<'a> {
    pub rocket: &'a PhysicalConstants,
}

impl<'a> Ascent<'a> {
    pub fn new(rocket: &'a PhysicalConstants) -> Self {
        Self { rocket }
    }
}

impl System<Vector2<f64>> for Ascent<'_> {
    fn system(&self, t: f64, y: &Vector2<f64>, dy: &mut Vector2<f64>) {
        *dy = derivatives(t, &State::from_vector(y), self.rocket).to_vector();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{presets, RocketBuilder};
    use approx::assert_relative_eq;

    #[test]
    fn net_upward_accel_on_pad() {
        let r = presets::fly_a_rocket();
        let d = derivatives(0.0, &State::default(), &r);
        assert_eq!(d.daltitude, 0.0);
        assert_relative_eq!(d.dvelocity, 2501.8 / 14.852 - 9.81, epsilon = 1e-9);
        assert!(d.dvelocity > 0.0, "Net accel should be upward, got {}", d.dvelocity);
    }

    #[test]
    fn no_thrust_after_burnout() {
        let r = presets::fly_a_rocket();
        let state = State { altitude: 1_500.0, velocity: 200.0 };
        let d = derivatives(10.0, &state, &r);
        // Gravity and drag both act downward on an ascending rocket
        assert!(d.dvelocity < -r.gravity);
    }

    #[test]
    fn drag_slows_descent() {
        let r = presets::fly_a_rocket();
        let state = State { altitude: 500.0, velocity: -60.0 };
        let d = derivatives(30.0, &state, &r);
        assert!(d.dvelocity > -r.gravity);
        assert_eq!(d.daltitude, -60.0);
    }

    #[test]
    fn free_fall_without_thrust_or_drag() {
        let r = presets::ballistic();
        let state = State { altitude: 100.0, velocity: 35.0 };
        let d = derivatives(0.0, &state, &r);
        assert_relative_eq!(d.dvelocity, -9.81);
    }

    #[test]
    fn ode_adapter_matches_derivatives() {
        let r = RocketBuilder::new().thrust(3000.0).build();
        let sys = Ascent::new(&r);
        let y = Vector2::new(250.0, 80.0);
        let mut dy = Vector2::zeros();
        sys.system(2.0, &y, &mut dy);
        let d = derivatives(2.0, &State { altitude: 250.0, velocity: 80.0 }, &r);
        assert_eq!(dy, d.to_vector());
    }
}
