pub mod event;
pub mod integrator;
pub mod metrics;
pub mod runner;
pub mod solver;

pub use integrator::rk4_step;
pub use metrics::{ApogeeSearch, FlightMetrics, MetricsOptions};
pub use runner::{fly, simulate, truncate_at_ground, Flight};
pub use solver::solve_on_grid;
