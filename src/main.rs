use std::path::PathBuf;

use rocket_ascent::io::{csv, json, report};
use rocket_ascent::sim::event;
use rocket_ascent::RunConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // -----------------------------------------------------------------------
    // Configuration: optional TOML path, otherwise the built-in defaults
    // -----------------------------------------------------------------------
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RunConfig::load(&path)?,
        None => RunConfig::default(),
    };
    let rocket = &config.rocket;

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let (flight, metrics) = rocket_ascent::run(&config)?;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let mut out = std::io::stdout();

    println!();
    println!("====================================================================");
    println!("  ROCKET FLIGHT SIMULATION — {}", config.name);
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Wet mass:      {:>8.3} kg    Dry mass:     {:>8.3} kg",
        rocket.wet_mass, rocket.dry_mass
    );
    println!(
        "  Thrust:        {:>8.1} N     Burn time:    {:>8.2} s",
        rocket.thrust, rocket.burn_time
    );
    println!(
        "  Cd:            {:>8.3}       Area:         {:>8.4} m^2",
        rocket.drag_coefficient, rocket.frontal_area
    );
    println!(
        "  TWR:           {:>8.2}       Impulse:      {:>8.1} N·s",
        rocket.twr(),
        rocket.total_impulse()
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    let events = event::flight_events(&flight, rocket.burn_time, &metrics);
    report::write_events(&mut out, &events)?;
    println!();

    report::write_report(&mut out, &metrics)?;
    println!();
    println!(
        "  Simulation: {} samples ({} above ground), dt={} s",
        flight.full().len(),
        flight.trajectory().len(),
        config.sim.dt
    );
    println!("====================================================================");

    // -----------------------------------------------------------------------
    // Optional export
    // -----------------------------------------------------------------------
    if let Some(path) = &config.output.csv {
        csv::write_trajectory_file(path, flight.trajectory(), rocket, config.metrics.density)?;
        println!("Exported trajectory: {}", path.display());
    }
    if let Some(path) = &config.output.json {
        json::write_summary_file(path, &config.name, &metrics)?;
        println!("Exported summary: {}", path.display());
    }

    Ok(())
}
