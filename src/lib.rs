pub mod aggregate;
pub mod concurrent;
pub mod config;
pub mod discover;
pub mod error;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod scan;

pub use crate::config::ScanConfig;
pub use crate::error::ConfigError;
pub use crate::scan::{scan, scan_with, ScanReport};
