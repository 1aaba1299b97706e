use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::aggregate::{ScanRecord, ScanSummary};

#[derive(Debug, Serialize)]
pub struct ScanInfo {
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: f64,
    pub total_requests: usize,
    pub found: usize,
}

impl From<&ScanSummary> for ScanInfo {
    fn from(s: &ScanSummary) -> Self {
        Self {
            start_time: s.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            end_time: s.finished_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            duration_seconds: s.duration.as_secs_f64(),
            total_requests: s.total_requests,
            found: s.discovered,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub scan_info: ScanInfo,
    pub results: &'a [ScanRecord],
}

/// Write the pretty-printed report to `path`.
///
/// Returns `Ok(false)` without touching the filesystem when no path is set or
/// there is nothing to record.
pub fn save_report(path: Option<&Path>, records: &[ScanRecord], summary: &ScanSummary) -> anyhow::Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    if records.is_empty() {
        tracing::info!(path = %path.display(), "no results to save, skipping report");
        return Ok(false);
    }

    let report = JsonReport { scan_info: ScanInfo::from(summary), results: records };
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, &report)?;
    w.write_all(b"\n")?;
    w.flush()?;
    tracing::debug!(path = %path.display(), records = records.len(), "report written");
    Ok(true)
}
