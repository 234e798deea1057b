//! Bedtime suggestions aligned to whole sleep cycles, so the alarm goes off
//! at the end of a cycle rather than in the middle of one.

use std::fmt;

use thiserror::Error;

/// Typical length of one sleep cycle in hours.
pub const DEFAULT_CYCLE_HOURS: f64 = 1.5;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SleepError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A candidate time to go to sleep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bedtime {
    pub hour: u32,
    pub minute: u32,
    pub sleep_hours: f64,
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Bedtimes that end exactly at `latest_wake` after a whole number of
/// cycles, latest first, skipping any that are already in the past.
///
/// Times are fractional hours on a 24 h clock. A wake-up time at or before
/// `now` is taken to be on the next day.
pub fn bedtimes(now: f64, latest_wake: f64, cycle: f64) -> Result<Vec<Bedtime>, SleepError> {
    for (name, v) in [("current time", now), ("wake-up time", latest_wake)] {
        if !(v.is_finite() && (0.0..24.0).contains(&v)) {
            return Err(SleepError::InvalidInput(format!("{name} must be in [0, 24), got {v}")));
        }
    }
    if !(cycle.is_finite() && cycle > 0.0) {
        return Err(SleepError::InvalidInput(format!("cycle must be > 0, got {cycle}")));
    }

    let wake = if latest_wake <= now { latest_wake + 24.0 } else { latest_wake };

    let mut out = Vec::new();
    let mut cycles = 1;
    loop {
        let start = wake - cycles as f64 * cycle;
        if start <= now {
            break;
        }
        // Truncate to whole minutes; the epsilon absorbs binary rounding of
        // values such as 6.7499999.
        let total_minutes = (start * 60.0 + 1e-6).floor() as u32;
        out.push(Bedtime {
            hour: (total_minutes / 60) % 24,
            minute: total_minutes % 60,
            sleep_hours: wake - start,
        });
        cycles += 1;
    }
    Ok(out)
}
