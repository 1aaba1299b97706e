use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::probe::ProbeResult;

/// Display class of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    Other,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            _ => StatusClass::Other,
        }
    }

    pub fn color_code(&self) -> &'static str {
        match self {
            StatusClass::Success => "\x1b[32m",     // Green
            StatusClass::Redirect => "\x1b[33m",    // Yellow
            StatusClass::ClientError => "\x1b[31m", // Red
            StatusClass::Other => "\x1b[34m",       // Blue
        }
    }
}

/// What the aggregator decided to do with one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not shown and not persisted. Still counted in the totals.
    Hidden,
    /// Transport error, shown only because show-all is on.
    ShowError,
    Show(StatusClass),
}

/// A displayed result as written to the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRecord {
    pub url: String,
    pub status_code: u16,
    pub size_bytes: u64,
    pub size_human: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub total_requests: usize,
    pub discovered: usize,
    pub errors: usize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub duration: Duration,
}

impl ScanSummary {
    pub fn requests_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_requests as f64 / secs
        } else {
            0.0
        }
    }
}

/// Single consumer of the result stream: filters, classifies and collects.
#[derive(Debug)]
pub struct Aggregator {
    filter_codes: HashSet<u16>,
    show_all: bool,
    received: usize,
    discovered: usize,
    errors: usize,
    records: Vec<ScanRecord>,
}

impl Aggregator {
    pub fn new(filter_codes: HashSet<u16>, show_all: bool) -> Self {
        Self {
            filter_codes,
            show_all,
            received: 0,
            discovered: 0,
            errors: 0,
            records: Vec::new(),
        }
    }

    pub fn ingest(&mut self, result: &ProbeResult) -> Verdict {
        self.received += 1;

        let status = match (result.status, &result.error) {
            (Some(status), None) => status,
            _ => {
                self.errors += 1;
                return if self.show_all { Verdict::ShowError } else { Verdict::Hidden };
            }
        };

        if self.filter_codes.contains(&status) && !self.show_all {
            return Verdict::Hidden;
        }

        let class = StatusClass::of(status);
        if class == StatusClass::Success {
            self.discovered += 1;
        }
        self.records.push(ScanRecord {
            url: result.url.clone(),
            status_code: status,
            size_bytes: result.size,
            size_human: result.size_human.clone(),
            timestamp: Local::now(),
        });
        Verdict::Show(class)
    }

    pub fn received(&self) -> usize {
        self.received
    }

    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    /// Close out the scan. `total_requests` is the number of enumerated URLs.
    pub fn finish(
        self,
        total_requests: usize,
        started_at: DateTime<Local>,
        started: Instant,
    ) -> (Vec<ScanRecord>, ScanSummary) {
        let duration = started.elapsed();
        let summary = ScanSummary {
            total_requests,
            discovered: self.discovered,
            errors: self.errors,
            started_at,
            finished_at: Local::now(),
            duration,
        };
        (self.records, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(c: &[u16]) -> HashSet<u16> {
        c.iter().copied().collect()
    }

    #[test]
    fn classes() {
        assert_eq!(StatusClass::of(200), StatusClass::Success);
        assert_eq!(StatusClass::of(299), StatusClass::Success);
        assert_eq!(StatusClass::of(301), StatusClass::Redirect);
        assert_eq!(StatusClass::of(404), StatusClass::ClientError);
        assert_eq!(StatusClass::of(500), StatusClass::Other);
        assert_eq!(StatusClass::of(101), StatusClass::Other);
    }

    #[test]
    fn suppressed_code_is_hidden_but_counted() {
        let mut agg = Aggregator::new(codes(&[404]), false);
        assert_eq!(agg.ingest(&ProbeResult::ok("https://h/a", 404, 10)), Verdict::Hidden);
        assert_eq!(agg.received(), 1);
        assert!(agg.records().is_empty());

        let (records, summary) = agg.finish(1, Local::now(), Instant::now());
        assert!(records.is_empty());
        assert_eq!(summary.total_requests, 1);
        assert_eq!(summary.discovered, 0);
    }

    #[test]
    fn show_all_overrides_suppression() {
        let mut agg = Aggregator::new(codes(&[404]), true);
        assert_eq!(
            agg.ingest(&ProbeResult::ok("https://h/a", 404, 10)),
            Verdict::Show(StatusClass::ClientError)
        );
        assert_eq!(agg.records().len(), 1);
    }

    #[test]
    fn only_2xx_counts_as_discovered() {
        let mut agg = Aggregator::new(HashSet::new(), false);
        agg.ingest(&ProbeResult::ok("https://h/a", 200, 1));
        agg.ingest(&ProbeResult::ok("https://h/b", 204, 1));
        agg.ingest(&ProbeResult::ok("https://h/c", 301, 1));
        agg.ingest(&ProbeResult::ok("https://h/d", 404, 1));
        assert_eq!(agg.discovered(), 2);
        assert_eq!(agg.records().len(), 4);
    }

    #[test]
    fn errors_never_persist() {
        let mut quiet = Aggregator::new(HashSet::new(), false);
        assert_eq!(quiet.ingest(&ProbeResult::failed("https://h/a", "refused")), Verdict::Hidden);

        let mut loud = Aggregator::new(HashSet::new(), true);
        assert_eq!(loud.ingest(&ProbeResult::failed("https://h/a", "refused")), Verdict::ShowError);
        assert!(loud.records().is_empty());

        let (_, summary) = loud.finish(1, Local::now(), Instant::now());
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.discovered, 0);
    }

    #[test]
    fn record_carries_size_fields() {
        let mut agg = Aggregator::new(HashSet::new(), false);
        agg.ingest(&ProbeResult::ok("https://h/a", 200, 2048));
        let rec = &agg.records()[0];
        assert_eq!(rec.status_code, 200);
        assert_eq!(rec.size_bytes, 2048);
        assert_eq!(rec.size_human, "2.00 KB");
    }
}
