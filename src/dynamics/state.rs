use ode_solvers::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{invalid, SimError};

// ---------------------------------------------------------------------------
// 1-D state: altitude and vertical velocity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub altitude: f64, // m, positive up
    pub velocity: f64, // m/s, positive up
}

impl State {
    /// Advance state by a derivative scaled by dt.
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            altitude: self.altitude + d.daltitude * dt,
            velocity: self.velocity + d.dvelocity * dt,
        }
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.altitude, self.velocity)
    }

    pub fn from_vector(y: &Vector2<f64>) -> State {
        State { altitude: y[0], velocity: y[1] }
    }
}

// ---------------------------------------------------------------------------
// State derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub daltitude: f64, // velocity
    pub dvelocity: f64, // acceleration
}

impl Deriv {
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.daltitude, self.dvelocity)
    }
}

// ---------------------------------------------------------------------------
// Trajectory sample
// ---------------------------------------------------------------------------

/// One point of the solved trajectory on the output grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s
}

impl Sample {
    pub fn new(time: f64, state: State) -> Self {
        Self { time, altitude: state.altitude, velocity: state.velocity }
    }

    pub fn state(&self) -> State {
        State { altitude: self.altitude, velocity: self.velocity }
    }
}

// ---------------------------------------------------------------------------
// Solver selection
// ---------------------------------------------------------------------------

/// Error tolerances for the adaptive solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { rtol: 1e-3, atol: 1e-6 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum SolverKind {
    /// Adaptive Dormand-Prince 5(4) with dense output on the sample grid.
    DormandPrince(Tolerances),
    /// Classical RK4 with a fixed step equal to the sample spacing.
    Rk4,
}

impl Default for SolverKind {
    fn default() -> Self {
        SolverKind::DormandPrince(Tolerances::default())
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,               // output sample spacing, s
    pub max_time: f64,         // integration horizon t_f, s
    pub initial_velocity: f64, // m/s at t = 0 (0 for a pad launch)
    pub solver: SolverKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            max_time: 500.0,
            initial_velocity: 0.0,
            solver: SolverKind::default(),
        }
    }
}

/// Upper bound on output samples per run.
pub const MAX_SAMPLES: usize = 10_000_000;

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid(format!("dt must be > 0, got {}", self.dt)));
        }
        if !(self.max_time.is_finite() && self.max_time > 0.0) {
            return Err(invalid(format!("max_time must be > 0, got {}", self.max_time)));
        }
        let ratio = self.max_time / self.dt;
        if !ratio.is_finite() || ratio > MAX_SAMPLES as f64 {
            return Err(invalid(format!(
                "max_time / dt = {ratio:e} exceeds the limit of {MAX_SAMPLES} samples"
            )));
        }
        if !self.initial_velocity.is_finite() {
            return Err(invalid("initial_velocity must be finite"));
        }
        if let SolverKind::DormandPrince(tol) = self.solver {
            if !(tol.rtol > 0.0 && tol.atol > 0.0) {
                return Err(invalid(format!(
                    "solver tolerances must be > 0 (rtol {}, atol {})",
                    tol.rtol, tol.atol
                )));
            }
        }
        Ok(())
    }

    /// Number of grid points `t_i = i * dt` with `t_i < max_time`.
    pub fn sample_count(&self) -> usize {
        let mut n = (self.max_time / self.dt).ceil() as usize;
        while n > 0 && self.grid_time(n - 1) >= self.max_time {
            n -= 1;
        }
        n
    }

    /// Time of grid point `i`. Computed by multiplication so that samples
    /// do not accumulate rounding drift.
    pub fn grid_time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn initial_state(&self) -> State {
        State { altitude: 0.0, velocity: self.initial_velocity }
    }
}
