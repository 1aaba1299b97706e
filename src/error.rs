//! Configuration-level errors. Anything here stops a scan before it starts;
//! per-URL failures are carried inside `ProbeResult` instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("target URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("request timeout must be at least 1 second")]
    InvalidTimeout,

    #[error("stealth delay range {min}..={max}ms is empty")]
    InvalidStealthRange { min: u64, max: u64 },

    #[error("failed to read wordlist {path}: {source}")]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
