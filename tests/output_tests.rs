use std::collections::HashSet;
use std::io::Write;
use std::time::Instant;

use chrono::Local;
use path_hunter::aggregate::Aggregator;
use path_hunter::discover::Wordlist;
use path_hunter::output::save_report;
use path_hunter::probe::ProbeResult;

fn sample() -> (Vec<path_hunter::aggregate::ScanRecord>, path_hunter::aggregate::ScanSummary) {
    let mut agg = Aggregator::new(HashSet::from([404]), false);
    agg.ingest(&ProbeResult::ok("https://example.com/admin", 200, 512));
    agg.ingest(&ProbeResult::ok("https://example.com/old", 301, 0));
    agg.ingest(&ProbeResult::ok("https://example.com/nope", 404, 10));
    agg.ingest(&ProbeResult::failed("https://example.com/err", "refused"));
    agg.finish(4, Local::now(), Instant::now())
}

#[test]
fn report_has_scan_info_and_results() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.json");
    let (records, summary) = sample();

    assert!(save_report(Some(&out), &records, &summary).unwrap());

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let info = &doc["scan_info"];
    assert_eq!(info["total_requests"], 4);
    assert_eq!(info["found"], 1);
    assert!(info["start_time"].is_string());
    assert!(info["end_time"].is_string());
    assert!(info["duration_seconds"].is_number());

    let results = doc["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["url"], "https://example.com/admin");
    assert_eq!(results[0]["status_code"], 200);
    assert_eq!(results[0]["size_bytes"], 512);
    assert_eq!(results[0]["size_human"], "512 B");
    assert!(results[0]["timestamp"].is_string());
}

#[test]
fn report_skipped_without_path_or_records() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.json");
    let (records, summary) = sample();

    assert!(!save_report(None, &records, &summary).unwrap());
    assert!(!save_report(Some(&out), &[], &summary).unwrap());
    assert!(!out.exists());
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing-dir").join("results.json");
    let (records, summary) = sample();
    assert!(save_report(Some(&out), &records, &summary).is_err());
}

#[test]
fn wordlist_file_loads_in_order() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "# comment\nadmin\n\n  backup  \n.git").unwrap();
    let words = Wordlist::File(f.path().to_path_buf()).load().unwrap();
    assert_eq!(words, vec!["admin", "backup", ".git"]);
}
