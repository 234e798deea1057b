use std::io::{self, Write};

use chrono::{Local, Timelike};

use rocket_ascent::sleep::{bedtimes, DEFAULT_CYCLE_HOURS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    print!("Latest wake up time (in h): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let latest_wake: f64 = line.trim().parse()?;

    let clock = Local::now();
    let now = clock.hour() as f64 + clock.minute() as f64 / 60.0;
    log::debug!("current time {:.3} h, wake-up {:.3} h", now, latest_wake);

    for b in bedtimes(now, latest_wake, DEFAULT_CYCLE_HOURS)? {
        println!("\nYou could go to sleep at {b}.");
        println!("\tYou will get {:.2} hours of sleep", b.sleep_hours);
    }
    Ok(())
}
