use std::path::PathBuf;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use rocket_ascent::{Flight, FlightMetrics, RunConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RunConfig::load(&path)?,
        None => RunConfig::default(),
    };
    let (flight, metrics) = rocket_ascent::run(&config)?;

    let app = TrajectoryViz { name: config.name, flight, metrics };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Trajectory", options, Box::new(|_| Ok(Box::new(app))))?;
    Ok(())
}

struct TrajectoryViz {
    name: String,
    flight: Flight,
    metrics: FlightMetrics,
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Trajectory");
            ui.label(format!(
                "{}  |  Apogee: {:.2} m at {:.2} s  |  Splashdown: {:.2} s  |  Max q: {:.2} N/m^2",
                self.name,
                self.metrics.apogee_altitude,
                self.metrics.apogee_time,
                self.metrics.splashdown_time,
                self.metrics.max_q,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let pts = self.flight.altitude_points();
            let step = (pts.len() / 4000).max(1);
            let points: PlotPoints = pts.into_iter().step_by(step).collect();
            Plot::new("altitude")
                .x_axis_label("$t$ [s]")
                .y_axis_label("altitude [m]")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("altitude", points));
                });
        });
    }
}
