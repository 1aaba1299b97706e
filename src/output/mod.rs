pub mod console;
pub mod json_report;

pub use json_report::save_report;
