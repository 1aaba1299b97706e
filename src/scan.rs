use std::time::Instant;

use chrono::Local;

use crate::aggregate::{Aggregator, ScanRecord, ScanSummary, Verdict};
use crate::concurrent::WorkerPool;
use crate::discover::enumerate_targets;
use crate::error::Result;
use crate::http_client::create_probe_client;
use crate::output::console;
use crate::probe::{Pacing, ProbeResult};
use crate::config::ScanConfig;

/// Displayed records plus the final counts, ready for the output sink.
#[derive(Debug)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub records: Vec<ScanRecord>,
}

/// Run a scan, printing each displayed result to stdout.
pub async fn scan(config: &ScanConfig) -> Result<ScanReport> {
    scan_with(config, console::print_result).await
}

/// Run a scan and hand every result with its verdict to `on_result` as it
/// arrives. Only configuration problems fail; per-URL errors are results.
pub async fn scan_with<F>(config: &ScanConfig, mut on_result: F) -> Result<ScanReport>
where
    F: FnMut(&ProbeResult, Verdict),
{
    config.validate()?;

    let started_at = Local::now();
    let started = Instant::now();

    let urls = enumerate_targets(&config.target, &config.paths, &config.extension_variants());
    let total = urls.len();
    let client = create_probe_client(config.threads, config.timeout())?;
    let pacing = Pacing::from_config(config);

    tracing::info!(base = %config.target, urls = total, threads = config.threads, ?pacing, "starting scan");

    let mut rx = WorkerPool::new(client, config.threads, pacing).run(urls);
    let mut agg = Aggregator::new(config.filter_codes.clone(), config.show_all);
    while let Some(result) = rx.recv().await {
        let verdict = agg.ingest(&result);
        on_result(&result, verdict);
    }

    if agg.received() != total {
        tracing::warn!(expected = total, received = agg.received(), "some probes produced no result");
    }

    let (records, summary) = agg.finish(total, started_at, started);
    tracing::info!(
        total = summary.total_requests,
        discovered = summary.discovered,
        errors = summary.errors,
        secs = summary.duration.as_secs_f64(),
        "scan finished"
    );
    Ok(ScanReport { summary, records })
}
