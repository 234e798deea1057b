use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Isothermal exponential atmosphere
// ---------------------------------------------------------------------------

/// Air density at `altitude_m` for an exponential atmosphere:
/// `rho = rho_0 * exp(-h / H)`.
///
/// Negative altitudes are not clamped; the integrator may step slightly
/// below ground before the trajectory is truncated.
pub fn density(altitude_m: f64, rho_0: f64, scale_height: f64) -> f64 {
    rho_0 * (-altitude_m / scale_height).exp()
}

/// Legacy power-law density `rho_0^(-h / H)` used by the classic
/// dynamic-pressure estimate of the Fly a Rocket! worksheet.
///
/// Note this is not a density in kg/m^3 (it equals 1 at sea level).
pub fn power_law_density(altitude_m: f64, rho_0: f64, scale_height: f64) -> f64 {
    rho_0.powf(-altitude_m / scale_height)
}

/// Density model used when evaluating dynamic pressure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityModel {
    /// `rho_0^(-h/H)`, matches the worksheet numbers.
    #[default]
    PowerLaw,
    /// `rho_0 * exp(-h/H)`, consistent with the drag model.
    Exponential,
}

impl DensityModel {
    pub fn density(self, altitude_m: f64, rho_0: f64, scale_height: f64) -> f64 {
        match self {
            DensityModel::PowerLaw => power_law_density(altitude_m, rho_0, scale_height),
            DensityModel::Exponential => density(altitude_m, rho_0, scale_height),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
