use crate::dynamics::state::Sample;

use super::metrics::FlightMetrics;
use super::runner::Flight;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Liftoff,
    Burnout,
    MaxQ,
    Apogee,
    Splashdown,
}

/// A discrete event that occurred during the flight.
#[derive(Debug, Clone)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: Sample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Detects the first sample above the pad.
#[derive(Default)]
pub struct LiftoffDetector {
    fired: bool,
}

impl EventDetector for LiftoffDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if !self.fired && prev.altitude <= 0.0 && current.altitude > 0.0 {
            self.fired = true;
            Some(EventKind::Liftoff)
        } else {
            None
        }
    }
}

/// Detects the first sample at or after motor cutoff.
pub struct BurnoutDetector {
    pub burn_time: f64,
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.time < self.burn_time && current.time >= self.burn_time {
            Some(EventKind::Burnout)
        } else {
            None
        }
    }
}

/// Detects apogee (velocity going from positive to non-positive).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.velocity > 0.0 && current.velocity <= 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Run detectors over consecutive sample pairs.
pub fn detect(samples: &[Sample], detectors: &mut [Box<dyn EventDetector>]) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for pair in samples.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(FlightEvent { time: pair[1].time, kind, sample: pair[1] });
            }
        }
    }
    events
}

/// Timeline of a finished flight: liftoff, burnout, max-Q, apogee and,
/// if the rocket came down before the horizon, splashdown.
pub fn flight_events(flight: &Flight, burn_time: f64, metrics: &FlightMetrics) -> Vec<FlightEvent> {
    let trajectory = flight.trajectory();
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(LiftoffDetector::default()),
        Box::new(BurnoutDetector { burn_time }),
        Box::new(ApogeeDetector),
    ];
    let mut events = detect(trajectory, &mut detectors);

    if let Some(s) = trajectory.iter().find(|s| s.time == metrics.max_q_time) {
        events.push(FlightEvent { time: s.time, kind: EventKind::MaxQ, sample: *s });
    }
    if flight.landed() {
        if let Some(s) = trajectory.last() {
            events.push(FlightEvent { time: s.time, kind: EventKind::Splashdown, sample: *s });
        }
    }

    events.sort_by(|a, b| a.time.total_cmp(&b.time));
    events
}
