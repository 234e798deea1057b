use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::Sample;
use crate::physics::aerodynamics::dynamic_pressure;
use crate::physics::DensityModel;
use crate::vehicle::PhysicalConstants;

/// Write trajectory data to CSV format.
///
/// Columns: time, altitude, velocity, dynamic_pressure
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &[Sample],
    rocket: &PhysicalConstants,
    density: DensityModel,
) -> io::Result<()> {
    writeln!(writer, "time,altitude,velocity,dynamic_pressure")?;

    for s in trajectory {
        let rho = density.density(s.altitude, rocket.air_density, rocket.scale_height);
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.altitude,
            s.velocity,
            dynamic_pressure(rho, s.velocity),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(
    path: &Path,
    trajectory: &[Sample],
    rocket: &PhysicalConstants,
    density: DensityModel,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory, rocket, density)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            Sample { time: 0.0, altitude: 0.0, velocity: 0.0 },
            Sample { time: 0.01, altitude: 0.008, velocity: 1.586 },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj, &presets::fly_a_rocket(), DensityModel::PowerLaw)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,altitude,velocity,dynamic_pressure");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.0000,0.0000,0.0000,0.0000");
        assert!(lines[2].starts_with("0.0100,0.0080,1.5860,"));
    }
}
