use serde::{Deserialize, Serialize};

use crate::error::{invalid, SimError};

// ---------------------------------------------------------------------------
// Physical constants of a single-stage sounding rocket
// ---------------------------------------------------------------------------

/// Everything the equations of motion need, fixed for the whole run.
///
/// Defaults describe the Fly a Rocket! campaign vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub gravity: f64,          // m/s^2
    pub air_density: f64,      // kg/m^3 at sea level
    pub scale_height: f64,     // m
    pub drag_coefficient: f64, // dimensionless
    pub frontal_area: f64,     // m^2
    pub wet_mass: f64,         // kg at ignition
    pub dry_mass: f64,         // kg after burnout
    pub thrust: f64,           // N, average over the burn
    pub burn_time: f64,        // s
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            air_density: 1.225,
            scale_height: 8800.0,
            drag_coefficient: 0.54,
            frontal_area: 0.0103,
            wet_mass: 19.100,
            dry_mass: 10.604,
            thrust: 2501.8,
            burn_time: 6.09,
        }
    }
}

impl PhysicalConstants {
    /// Constant mass used by the dynamics: mean of wet and dry mass.
    pub fn average_mass(&self) -> f64 {
        0.5 * (self.wet_mass + self.dry_mass)
    }

    /// `k = 0.5 * c_D * A * rho_0`
    pub fn drag_factor(&self) -> f64 {
        0.5 * self.drag_coefficient * self.frontal_area * self.air_density
    }

    /// Step thrust curve: average thrust until burnout, zero after.
    pub fn thrust_at(&self, time: f64) -> f64 {
        if time < self.burn_time {
            self.thrust
        } else {
            0.0
        }
    }

    /// Thrust-to-weight ratio at the averaged mass.
    pub fn twr(&self) -> f64 {
        self.thrust / (self.average_mass() * self.gravity)
    }

    /// Total impulse delivered by the motor (N·s).
    pub fn total_impulse(&self) -> f64 {
        self.thrust * self.burn_time
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("scale_height", self.scale_height),
            ("drag_coefficient", self.drag_coefficient),
            ("frontal_area", self.frontal_area),
            ("wet_mass", self.wet_mass),
            ("dry_mass", self.dry_mass),
            ("thrust", self.thrust),
            ("burn_time", self.burn_time),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {v}")));
        }
        if self.scale_height <= 0.0 {
            return Err(invalid("scale_height must be > 0"));
        }
        if self.air_density < 0.0 || self.drag_coefficient < 0.0 || self.frontal_area < 0.0 {
            return Err(invalid("air_density, drag_coefficient and frontal_area must be >= 0"));
        }
        if self.dry_mass <= 0.0 || self.wet_mass < self.dry_mass {
            return Err(invalid(format!(
                "masses must satisfy 0 < dry_mass <= wet_mass (dry {}, wet {})",
                self.dry_mass, self.wet_mass
            )));
        }
        if self.thrust < 0.0 || self.burn_time < 0.0 {
            return Err(invalid("thrust and burn_time must be >= 0"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct RocketBuilder {
    constants: PhysicalConstants,
}

impl RocketBuilder {
    pub fn new() -> Self {
        Self { constants: PhysicalConstants::default() }
    }

    pub fn gravity(mut self, v: f64) -> Self { self.constants.gravity = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.constants.air_density = v; self }
    pub fn scale_height(mut self, v: f64) -> Self { self.constants.scale_height = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.constants.drag_coefficient = v; self }
    pub fn frontal_area(mut self, v: f64) -> Self { self.constants.frontal_area = v; self }
    pub fn wet_mass(mut self, v: f64) -> Self { self.constants.wet_mass = v; self }
    pub fn dry_mass(mut self, v: f64) -> Self { self.constants.dry_mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.constants.thrust = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.constants.burn_time = v; self }

    /// Switches off drag entirely (vacuum flight).
    pub fn no_drag(mut self) -> Self { self.constants.drag_coefficient = 0.0; self }

    pub fn build(self) -> PhysicalConstants {
        self.constants
    }
}

impl Default for RocketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// ESA Fly a Rocket! campaign rocket (NAROM/Andoya).
    pub fn fly_a_rocket() -> PhysicalConstants {
        PhysicalConstants::default()
    }

    /// Unpowered, drag-free body; only useful with an initial velocity.
    pub fn ballistic() -> PhysicalConstants {
        RocketBuilder::new().thrust(0.0).burn_time(0.0).no_drag().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn average_mass_is_mean_of_wet_and_dry() {
        let c = presets::fly_a_rocket();
        assert_relative_eq!(c.average_mass(), 14.852, epsilon = 1e-12);
    }

    #[test]
    fn drag_factor_matches_worksheet() {
        let c = presets::fly_a_rocket();
        assert_relative_eq!(c.drag_factor(), 0.5 * 0.54 * 0.0103 * 1.225, epsilon = 1e-15);
    }

    #[test]
    fn thrust_is_a_step() {
        let c = presets::fly_a_rocket();
        assert_eq!(c.thrust_at(0.0), 2501.8);
        assert_eq!(c.thrust_at(6.08), 2501.8);
        assert_eq!(c.thrust_at(6.09), 0.0);
        assert_eq!(c.thrust_at(100.0), 0.0);
    }

    #[test]
    fn default_vehicle_can_lift_off() {
        let c = presets::fly_a_rocket();
        assert!(c.twr() > 1.0, "TWR must exceed 1, got {}", c.twr());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_overrides_defaults() {
        let c = RocketBuilder::new().thrust(1000.0).no_drag().build();
        assert_eq!(c.thrust, 1000.0);
        assert_eq!(c.drag_factor(), 0.0);
        assert_eq!(c.burn_time, 6.09);
    }

    #[test]
    fn rejects_dry_mass_above_wet_mass() {
        let c = RocketBuilder::new().dry_mass(25.0).build();
        assert!(matches!(c.validate(), Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn rejects_non_positive_scale_height() {
        let c = RocketBuilder::new().scale_height(0.0).build();
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        let c = RocketBuilder::new().thrust(f64::NAN).build();
        assert!(c.validate().is_err());
    }
}
