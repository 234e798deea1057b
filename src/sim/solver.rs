use log::debug;
use ode_solvers::dopri5::Dopri5;
use ode_solvers::{System, Vector2};

use crate::dynamics::state::Tolerances;
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Adaptive Dormand-Prince 5(4) on a fixed output grid
// ---------------------------------------------------------------------------

/// Integrate a 2-state system from `(0, y0)` over `[0, t_end]` and return
/// the dense-output solution at `t_i = i * dt` for the first `n` grid points.
///
/// The grid times are recomputed as `i * dt` rather than taken from the
/// solver, whose output abscissae accumulate `dt` by repeated addition.
pub fn solve_on_grid<F>(
    sys: F,
    y0: Vector2<f64>,
    t_end: f64,
    dt: f64,
    n: usize,
    tol: Tolerances,
) -> Result<Vec<(f64, Vector2<f64>)>, SimError>
where
    F: System<Vector2<f64>>,
{
    let mut stepper = Dopri5::new(sys, 0.0, t_end, dt, y0, tol.rtol, tol.atol);
    let stats = stepper
        .integrate()
        .map_err(|e| SimError::Integration(format!("{e:?}")))?;
    debug!(
        "dopri5: {} accepted, {} rejected, {} rhs evals",
        stats.accepted_steps, stats.rejected_steps, stats.num_eval
    );

    let ys = stepper.y_out();
    if ys.len() < n {
        debug!("dopri5 produced {} of {} grid points", ys.len(), n);
    }
    Ok(ys
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, y)| (i as f64 * dt, *y))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
