pub mod csv;
pub mod json;
pub mod report;

pub use report::{write_events, write_report};
