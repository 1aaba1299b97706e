pub mod http_probe;
pub mod stealth;

pub use http_probe::{format_size, probe_url, ProbeResult};
pub use stealth::Pacing;
