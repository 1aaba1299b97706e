use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

pub const DEFAULT_THREADS: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EXTENSIONS: &str = "php,asp,aspx,jsp,do,bak,txt,html";
pub const STEALTH_DELAY_MIN_MS: u64 = 100;
pub const STEALTH_DELAY_MAX_MS: u64 = 1000;

/// Everything a scan needs. Built once by the caller and never mutated after `scan` starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Normalized base URL: scheme present, no trailing slash.
    pub target: String,
    pub paths: Vec<String>,
    /// Extension variants tried for every path. The empty string means "bare path".
    pub extensions: Vec<String>,
    pub threads: usize,
    pub timeout_secs: u64,
    /// Fixed pause before each request, ignored when `stealth` is on.
    pub delay_ms: u64,
    pub stealth: bool,
    pub stealth_delay_min_ms: u64,
    pub stealth_delay_max_ms: u64,
    /// Status codes hidden from display and persistence unless `show_all` is set.
    pub filter_codes: HashSet<u16>,
    pub show_all: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            paths: Vec::new(),
            extensions: vec![String::new()],
            threads: DEFAULT_THREADS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            delay_ms: 0,
            stealth: false,
            stealth_delay_min_ms: STEALTH_DELAY_MIN_MS,
            stealth_delay_max_ms: STEALTH_DELAY_MAX_MS,
            filter_codes: HashSet::new(),
            show_all: false,
        }
    }
}

impl ScanConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Extension variants with the bare-path sentinel guaranteed to come first.
    pub fn extension_variants(&self) -> Vec<String> {
        if self.extensions.iter().any(|e| e.is_empty()) {
            return self.extensions.clone();
        }
        let mut out = Vec::with_capacity(self.extensions.len() + 1);
        out.push(String::new());
        out.extend(self.extensions.iter().cloned());
        out
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidWorkerCount);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.stealth && self.stealth_delay_min_ms > self.stealth_delay_max_ms {
            return Err(ConfigError::InvalidStealthRange {
                min: self.stealth_delay_min_ms,
                max: self.stealth_delay_max_ms,
            });
        }
        let parsed = Url::parse(&self.target).map_err(|source| ConfigError::InvalidTarget {
            url: self.target.clone(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(ConfigError::UnsupportedScheme(self.target.clone())),
        }
    }
}

pub fn has_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

/// Default the scheme to https and strip trailing slashes.
pub fn normalize_target(raw: &str) -> String {
    let raw = raw.trim();
    let with_scheme = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Parse a comma separated extension list. The result always starts with the
/// empty extension so every word is also tried bare.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    let mut out = vec![String::new()];
    for ext in raw.split(',') {
        let ext = ext.trim();
        if ext.is_empty() {
            continue;
        }
        if ext.starts_with('.') {
            out.push(ext.to_string());
        } else {
            out.push(format!(".{}", ext));
        }
    }
    out
}

/// Parse a comma separated list of status codes. Entries that are not a
/// positive integer are skipped.
pub fn parse_status_codes(raw: &str) -> HashSet<u16> {
    raw.split(',')
        .filter_map(|c| c.trim().parse::<u16>().ok())
        .filter(|c| *c > 0)
        .collect()
}
