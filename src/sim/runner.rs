use log::{debug, info, warn};

use super::integrator::rk4_step;
use super::solver::solve_on_grid;
use crate::dynamics::state::{Sample, SimConfig, SolverKind};
use crate::dynamics::Ascent;
use crate::error::{invalid, SimError};
use crate::vehicle::PhysicalConstants;

// ---------------------------------------------------------------------------
// Solved flight
// ---------------------------------------------------------------------------

/// Result of one run: the full solved grid and the ground-truncated prefix.
#[derive(Debug, Clone)]
pub struct Flight {
    samples: Vec<Sample>,
    airborne: usize,
}

impl Flight {
    /// Every grid sample up to the horizon, including any below ground.
    pub fn full(&self) -> &[Sample] {
        &self.samples
    }

    /// Samples from liftoff up to (excluding) the first one below ground.
    pub fn trajectory(&self) -> &[Sample] {
        &self.samples[..self.airborne]
    }

    /// `true` if the rocket went below ground before the horizon.
    pub fn landed(&self) -> bool {
        self.airborne < self.samples.len()
    }

    /// Wrap an already solved grid, marking the ground-truncated prefix.
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        let airborne = truncate_at_ground(&samples).len();
        Self { samples, airborne }
    }

    /// `[time, altitude]` pairs of the truncated trajectory, for plotting.
    pub fn altitude_points(&self) -> Vec<[f64; 2]> {
        self.trajectory().iter().map(|s| [s.time, s.altitude]).collect()
    }
}

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------

/// Integrate the ascent from `t = 0` over `[0, max_time]`, sampled at
/// `t_i = i * dt` for every `t_i < max_time`.
pub fn simulate(rocket: &PhysicalConstants, config: &SimConfig) -> Result<Vec<Sample>, SimError> {
    config.validate()?;
    rocket.validate()?;

    let n = config.sample_count();
    let times: Vec<f64> = (0..n).map(|i| config.grid_time(i)).collect();
    info!(
        "simulating {} samples (dt = {} s, t_f = {} s, {:?})",
        n, config.dt, config.max_time, config.solver
    );

    let samples = match config.solver {
        SolverKind::DormandPrince(tol) => solve_on_grid(
            Ascent::new(rocket),
            config.initial_state().to_vector(),
            config.max_time,
            config.dt,
            n,
            tol,
        )?
        .into_iter()
        .map(|(t, y)| Sample { time: t, altitude: y[0], velocity: y[1] })
        .collect(),
        SolverKind::Rk4 => {
            let mut state = config.initial_state();
            let mut samples = Vec::with_capacity(n);
            for (i, &t) in times.iter().enumerate() {
                if i > 0 {
                    let t_prev = times[i - 1];
                    state = rk4_step(t_prev, &state, rocket, t - t_prev);
                }
                samples.push(Sample::new(t, state));
            }
            samples
        }
    };

    Ok(samples)
}

/// Prefix of `samples` whose altitude stays at or above ground.
pub fn truncate_at_ground(samples: &[Sample]) -> &[Sample] {
    let airborne = samples.iter().take_while(|s| s.altitude >= 0.0).count();
    &samples[..airborne]
}

/// Simulate and cut the trajectory at ground impact.
///
/// Fails with `InvalidConfiguration` if no sample reaches a positive
/// altitude (the rocket never leaves the pad).
pub fn fly(rocket: &PhysicalConstants, config: &SimConfig) -> Result<Flight, SimError> {
    let samples = simulate(rocket, config)?;

    if !samples.iter().any(|s| s.altitude > 0.0) {
        return Err(invalid(format!(
            "rocket never leaves the ground within {} samples (TWR {:.2})",
            samples.len(),
            rocket.twr()
        )));
    }

    let flight = Flight::from_samples(samples);

    match flight.trajectory().last() {
        Some(last) if flight.landed() => {
            debug!("ground reached after t = {:.2} s (sample {})", last.time, flight.airborne)
        }
        _ => warn!(
            "rocket still airborne at t_f = {} s; increase max_time to reach splashdown",
            config.max_time
        ),
    }

    Ok(flight)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{presets, RocketBuilder};
    use approx::assert_abs_diff_eq;

    fn short_config() -> SimConfig {
        SimConfig { dt: 0.05, max_time: 120.0, ..Default::default() }
    }

    #[test]
    fn rocket_goes_up() {
        let r = presets::fly_a_rocket();
        let flight = fly(&r, &short_config()).unwrap();
        let burnout = flight.trajectory().iter().find(|s| s.time >= r.burn_time).unwrap();
        assert!(burnout.altitude > 100.0, "Rocket should be >100m at burnout");
        assert!(burnout.velocity > 0.0);
    }

    #[test]
    fn rocket_comes_back_down() {
        let r = presets::fly_a_rocket();
        let flight = fly(&r, &short_config()).unwrap();
        assert!(flight.landed(), "Rocket should return to ground");
        let last = flight.trajectory().last().unwrap();
        assert!(last.altitude >= 0.0);
        assert!(last.time > r.burn_time, "Flight lasts past burnout");
        assert!(flight.full().len() > flight.trajectory().len());
    }

    #[test]
    fn grid_is_evenly_spaced() {
        let config = short_config();
        let samples = simulate(&presets::fly_a_rocket(), &config).unwrap();
        assert_eq!(samples.len(), config.sample_count());
        assert_eq!(samples[0].time, 0.0);
        for pair in samples.windows(2) {
            assert!(pair[1].time > pair[0].time);
            assert_abs_diff_eq!(pair[1].time - pair[0].time, config.dt, epsilon = 1e-9);
        }
    }

    #[test]
    fn truncation_stops_at_first_negative_altitude() {
        let samples = vec![
            Sample { time: 0.0, altitude: 0.0, velocity: 0.0 },
            Sample { time: 1.0, altitude: 5.0, velocity: 3.0 },
            Sample { time: 2.0, altitude: -0.1, velocity: -4.0 },
            Sample { time: 3.0, altitude: 2.0, velocity: 1.0 },
        ];
        let t = truncate_at_ground(&samples);
        assert_eq!(t.len(), 2);
        assert_eq!(t.last().unwrap().time, 1.0);
    }

    #[test]
    fn runs_are_deterministic() {
        let r = presets::fly_a_rocket();
        let a = simulate(&r, &short_config()).unwrap();
        let b = simulate(&r, &short_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn grounded_rocket_is_rejected() {
        let r = RocketBuilder::new().thrust(0.0).no_drag().build();
        let err = fly(&r, &short_config()).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
    }

    #[test]
    fn underpowered_rocket_is_rejected() {
        // TWR < 1: thrust cannot overcome gravity
        let r = RocketBuilder::new().thrust(100.0).build();
        assert!(fly(&r, &short_config()).is_err());
    }

    #[test]
    fn invalid_step_rejected_before_integration() {
        let r = presets::fly_a_rocket();
        let config = SimConfig { dt: -1.0, ..Default::default() };
        assert!(matches!(simulate(&r, &config), Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn step_larger_than_horizon_does_not_panic() {
        let r = presets::fly_a_rocket();
        let config = SimConfig { dt: 10.0, max_time: 5.0, ..Default::default() };
        let samples = simulate(&r, &config).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].altitude, 0.0);
        // A single sample at the pad never shows positive altitude
        assert!(fly(&r, &config).is_err());
    }

    #[test]
    fn parabola_matches_closed_form() {
        let r = presets::ballistic();
        let v0 = 50.0;
        let config = SimConfig { dt: 0.1, max_time: 12.0, initial_velocity: v0, ..Default::default() };
        let flight = fly(&r, &config).unwrap();
        for s in flight.trajectory() {
            let expected = v0 * s.time - 0.5 * r.gravity * s.time * s.time;
            assert_abs_diff_eq!(s.altitude, expected, epsilon = 1e-6);
        }
        // Lands near t = 2 v0 / g
        let last = flight.trajectory().last().unwrap();
        assert!((last.time - 2.0 * v0 / r.gravity).abs() <= config.dt);
    }

    #[test]
    fn rk4_and_dormand_prince_agree() {
        let r = presets::fly_a_rocket();
        let adaptive = fly(&r, &short_config()).unwrap();
        let fixed = fly(&r, &SimConfig { solver: SolverKind::Rk4, ..short_config() }).unwrap();
        let apogee = |f: &Flight| f.trajectory().iter().map(|s| s.altitude).fold(0.0_f64, f64::max);
        let (a, b) = (apogee(&adaptive), apogee(&fixed));
        assert!((a - b).abs() / b < 0.01, "apogees differ: {a:.1} vs {b:.1}");
    }

    #[test]
    fn altitude_points_follow_trajectory() {
        let flight = fly(&presets::fly_a_rocket(), &short_config()).unwrap();
        let pts = flight.altitude_points();
        assert_eq!(pts.len(), flight.trajectory().len());
        assert_eq!(pts[3], [flight.trajectory()[3].time, flight.trajectory()[3].altitude]);
    }
}
