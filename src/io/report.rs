use std::io::{self, Write};

use crate::sim::event::{EventKind, FlightEvent};
use crate::sim::FlightMetrics;

/// Four-line console summary, every value to two decimals.
pub fn write_report<W: Write>(writer: &mut W, m: &FlightMetrics) -> io::Result<()> {
    writeln!(
        writer,
        "Apogee reached at t = {:.2}s with y = {:.2}m.",
        m.apogee_time, m.apogee_altitude
    )?;
    writeln!(
        writer,
        "Splashdown at t = {:.2}s with speed v = {:.2}m/s.",
        m.splashdown_time, m.splashdown_velocity
    )?;
    writeln!(writer, "Maximum speed during flight is v = {:.2}m/s.", m.max_speed)?;
    writeln!(writer, "Maximum dynamic pressure maxq = {:.2}N/m^2.", m.max_q)?;
    Ok(())
}

/// Event timeline table.
pub fn write_events<W: Write>(writer: &mut W, events: &[FlightEvent]) -> io::Result<()> {
    for e in events {
        let label = match e.kind {
            EventKind::Liftoff => "LIFTOFF",
            EventKind::Burnout => "BURNOUT",
            EventKind::MaxQ => "MAX-Q",
            EventKind::Apogee => "APOGEE",
            EventKind::Splashdown => "SPLASHDOWN",
        };
        writeln!(
            writer,
            "  {:<10}  t={:>7.2}s   alt={:>9.1}m   vel={:>7.1}m/s",
            label, e.time, e.sample.altitude, e.sample.velocity
        )?;
    }
    Ok(())
}
