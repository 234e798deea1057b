use crate::physics::atmosphere;

/// Quadratic drag force along the vertical axis (N, signed).
///
/// `drag_factor` is `k = 0.5 * c_D * A * rho_0`; the density term is
/// `exp(-h/H)`. The `v * |v|` product keeps the force opposed to motion.
pub fn drag_force(altitude: f64, velocity: f64, drag_factor: f64, scale_height: f64) -> f64 {
    if velocity == 0.0 {
        return 0.0;
    }
    -drag_factor * atmosphere::density(altitude, 1.0, scale_height) * velocity * velocity.abs()
}

/// Dynamic pressure `q = 0.5 * rho * v^2`.
pub fn dynamic_pressure(density: f64, velocity: f64) -> f64 {
    0.5 * density * velocity * velocity
}
