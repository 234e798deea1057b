use crate::dynamics;
use crate::dynamics::state::State;
use crate::vehicle::PhysicalConstants;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta step (fixed dt)
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `state` at `time` by `dt`.
pub fn rk4_step(time: f64, state: &State, rocket: &PhysicalConstants, dt: f64) -> State {
    let k1 = dynamics::derivatives(time, state, rocket);
    let k2 = dynamics::derivatives(time + dt * 0.5, &state.apply(&k1, dt * 0.5), rocket);
    let k3 = dynamics::derivatives(time + dt * 0.5, &state.apply(&k2, dt * 0.5), rocket);
    let k4 = dynamics::derivatives(time + dt, &state.apply(&k3, dt), rocket);

    State {
        altitude: state.altitude
            + (k1.daltitude + 2.0 * k2.daltitude + 2.0 * k3.daltitude + k4.daltitude) * (dt / 6.0),
        velocity: state.velocity
            + (k1.dvelocity + 2.0 * k2.dvelocity + 2.0 * k3.dvelocity + k4.dvelocity) * (dt / 6.0),
    }
}
