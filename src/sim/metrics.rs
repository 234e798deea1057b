use log::warn;
use serde::{Deserialize, Serialize};

use super::runner::Flight;
use crate::error::{invalid, SimError};
use crate::physics::aerodynamics::dynamic_pressure;
use crate::physics::DensityModel;
use crate::vehicle::PhysicalConstants;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Which series the apogee altitude is taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApogeeSearch {
    /// Every solved sample up to the horizon, as the worksheet does.
    #[default]
    FullSeries,
    /// Only samples before ground impact.
    GroundTruncated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsOptions {
    pub apogee: ApogeeSearch,
    pub density: DensityModel,
}

// ---------------------------------------------------------------------------
// Flight metrics
// ---------------------------------------------------------------------------

/// Summary values reduced from a solved flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightMetrics {
    pub apogee_altitude: f64,     // m
    pub apogee_time: f64,         // s
    pub splashdown_time: f64,     // s
    pub splashdown_velocity: f64, // m/s, negative when descending
    pub max_speed: f64,           // m/s, largest signed velocity
    pub max_q: f64,               // N/m^2
    pub max_q_time: f64,          // s
}

impl FlightMetrics {
    pub fn from_flight(
        flight: &Flight,
        rocket: &PhysicalConstants,
        options: &MetricsOptions,
    ) -> Result<Self, SimError> {
        let trajectory = flight.trajectory();
        let last = trajectory
            .last()
            .ok_or_else(|| invalid("trajectory has no samples above ground"))?;

        let apogee_series = match options.apogee {
            ApogeeSearch::FullSeries => flight.full(),
            ApogeeSearch::GroundTruncated => trajectory,
        };
        let apogee_altitude = apogee_series
            .iter()
            .map(|s| s.altitude)
            .fold(f64::NEG_INFINITY, f64::max);

        let apogee_time = match trajectory.iter().find(|s| s.altitude == apogee_altitude) {
            Some(s) => s.time,
            None => {
                warn!(
                    "apogee {:.2} m lies after ground impact; reporting apogee time 0",
                    apogee_altitude
                );
                0.0
            }
        };

        let max_speed = trajectory
            .iter()
            .map(|s| s.velocity)
            .fold(f64::NEG_INFINITY, f64::max);

        let (max_q_time, max_q) = trajectory
            .iter()
            .map(|s| {
                let rho = options
                    .density
                    .density(s.altitude, rocket.air_density, rocket.scale_height);
                (s.time, dynamic_pressure(rho, s.velocity))
            })
            .fold((0.0, f64::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best });

        Ok(FlightMetrics {
            apogee_altitude,
            apogee_time,
            splashdown_time: last.time,
            splashdown_velocity: last.velocity,
            max_speed,
            max_q,
            max_q_time,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
