pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;
pub mod sleep;
pub mod vehicle;

pub use config::RunConfig;
pub use dynamics::state::{Sample, SimConfig, SolverKind, State, Tolerances};
pub use error::{ConfigError, SimError};
pub use sim::{fly, simulate, Flight, FlightMetrics, MetricsOptions};
pub use vehicle::PhysicalConstants;

/// Fly the configured rocket and reduce the result to metrics.
pub fn run(config: &RunConfig) -> Result<(Flight, FlightMetrics), SimError> {
    let flight = fly(&config.rocket, &config.sim)?;
    let metrics = FlightMetrics::from_flight(&flight, &config.rocket, &config.metrics)?;
    Ok((flight, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_reports_full_flight() {
        let config = RunConfig::default();
        let (flight, m) = run(&config).unwrap();
        assert!(flight.landed());
        assert!(m.apogee_altitude > 5_000.0);
        assert!(m.apogee_time > config.rocket.burn_time);
        assert!(m.splashdown_velocity < 0.0);
        assert!(m.max_q_time < m.apogee_time);
    }

    #[test]
    fn identical_configs_give_identical_metrics() {
        let config = RunConfig {
            sim: SimConfig { dt: 0.02, max_time: 150.0, ..Default::default() },
            ..Default::default()
        };
        let (_, a) = run(&config).unwrap();
        let (_, b) = run(&config).unwrap();
        assert_eq!(a, b);
    }
}
