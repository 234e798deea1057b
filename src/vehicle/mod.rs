pub mod rocket;

pub use rocket::{presets, PhysicalConstants, RocketBuilder};
