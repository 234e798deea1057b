use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::sim::FlightMetrics;

/// Metrics as written to the summary file, rounded to centimetres/centiseconds.
#[derive(Debug, Clone, Serialize)]
struct Performance {
    apogee_m: f64,
    apogee_time_s: f64,
    splashdown_time_s: f64,
    splashdown_velocity_ms: f64,
    max_speed_ms: f64,
    max_q_pa: f64,
    max_q_time_s: f64,
}

impl From<&FlightMetrics> for Performance {
    fn from(m: &FlightMetrics) -> Self {
        Self {
            apogee_m: round2(m.apogee_altitude),
            apogee_time_s: round2(m.apogee_time),
            splashdown_time_s: round2(m.splashdown_time),
            splashdown_velocity_ms: round2(m.splashdown_velocity),
            max_speed_ms: round2(m.max_speed),
            max_q_pa: round2(m.max_q),
            max_q_time_s: round2(m.max_q_time),
        }
    }
}

#[derive(Debug, Serialize)]
struct FlightSummary<'a> {
    rocket: &'a str,
    performance: Performance,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Write flight metrics as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, name: &str, metrics: &FlightMetrics) -> io::Result<()> {
    let summary = FlightSummary { rocket: name, performance: Performance::from(metrics) };
    serde_json::to_writer_pretty(&mut *writer, &summary)?;
    writeln!(writer)
}

/// Write flight metrics JSON to a file.
pub fn write_summary_file(path: &Path, name: &str, metrics: &FlightMetrics) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, name, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn metrics() -> FlightMetrics {
        FlightMetrics {
            apogee_altitude: 10_547.95,
            apogee_time: 41.49,
            splashdown_time: 98.11,
            splashdown_velocity: -231.93,
            max_speed: 715.72,
            max_q: 241_823.4753,
            max_q_time: 6.09,
        }
    }

    fn summary_of(name: &str) -> Value {
        let mut buf = Vec::new();
        write_summary(&mut buf, name, &metrics()).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn json_output_has_fields() {
        let json = summary_of("Fly a \"Rocket\"");
        assert_eq!(json["rocket"], "Fly a \"Rocket\"");
        assert_eq!(json["performance"]["apogee_m"], 10547.95);
        assert_eq!(json["performance"]["splashdown_velocity_ms"], -231.93);
        assert_eq!(json["performance"]["max_q_pa"], 241823.48);
    }

    #[test]
    fn control_characters_in_name_stay_valid_json() {
        let name = "line1\nline2\ttab\\end\u{1}";
        let json = summary_of(name);
        assert_eq!(json["rocket"].as_str(), Some(name));
    }

    #[test]
    fn output_is_newline_terminated() {
        let mut buf = Vec::new();
        write_summary(&mut buf, "x", &metrics()).unwrap();
        assert!(buf.ends_with(b"}\n"));
    }
}
