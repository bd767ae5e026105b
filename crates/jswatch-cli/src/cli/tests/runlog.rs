//! Detail and summary run logs.

use super::{compare, extraction, script};
use crate::cli::report::RunView;
use crate::cli::runlog::RunLog;
use chrono::{TimeZone, Utc};
use jswatch_core::config::ReportConfig;
use std::path::Path;

#[test]
fn run_log_lines_are_stamped() {
    let base = extraction("Shop", vec![script("https://x.com/a.js", "var a=1;")]);
    let cand = extraction("Shop", vec![script("https://x.com/a.js", "var a=2;")]);
    let result = compare(&base, &cand);
    let run = RunView {
        baseline_path: Path::new("base.har"),
        candidate_path: Path::new("new.har"),
        baseline: &base,
        candidate: &cand,
        result: &result,
    };
    let now = Utc.with_ymd_and_hms(2020, 5, 11, 9, 30, 0).unwrap();
    let log = RunLog::new(Path::new("/state"), &ReportConfig::default(), now);

    assert_eq!(log.detail, Path::new("/state/jswatch_log.txt"));
    assert_eq!(
        log.summary_line(&run),
        "[11 May 2020, 09:30] Shop, base.har, new.har, CHANGES"
    );
    let lines = log.detail_lines(&run);
    assert!(lines.iter().all(|l| l.starts_with("[11 May 2020, 09:30] ")));
    assert_eq!(lines[0], "[11 May 2020, 09:30] Baseline HAR: base.har");
    assert!(lines
        .iter()
        .any(|l| l.contains("https://x.com/a.js baseline hash: ")));
}

#[test]
fn append_creates_and_extends_files() {
    let state = tempfile::tempdir().unwrap();
    let base = extraction("Shop", vec![script("https://x.com/a.js", "var a=1;")]);
    let result = compare(&base, &base);
    let run = RunView {
        baseline_path: Path::new("base.har"),
        candidate_path: Path::new("new.har"),
        baseline: &base,
        candidate: &base,
        result: &result,
    };
    let cfg = ReportConfig {
        summary_log: "nested/summary.txt".into(),
        ..ReportConfig::default()
    };
    let now = Utc.with_ymd_and_hms(2020, 5, 11, 9, 30, 0).unwrap();
    let log = RunLog::new(state.path(), &cfg, now);

    log.append(&run).unwrap();
    log.append(&run).unwrap();

    let summary = std::fs::read_to_string(state.path().join("nested/summary.txt")).unwrap();
    assert_eq!(summary.lines().count(), 2);
    assert!(summary.lines().all(|l| l.ends_with("no changes")));
    let detail = std::fs::read_to_string(state.path().join("jswatch_log.txt")).unwrap();
    assert_eq!(detail.lines().count(), 2 * log.detail_lines(&run).len());
}

#[test]
fn detail_lines_note_uncaptured_scripts() {
    let mut base = extraction("Shop", vec![]);
    base.uncaptured.push("https://x.com/lib.js".into());
    let cand = extraction("Shop", vec![]);
    let result = compare(&base, &cand);
    let run = RunView {
        baseline_path: Path::new("base.har"),
        candidate_path: Path::new("new.har"),
        baseline: &base,
        candidate: &cand,
        result: &result,
    };
    let now = Utc.with_ymd_and_hms(2020, 5, 11, 9, 30, 0).unwrap();
    let log = RunLog::new(Path::new("/state"), &ReportConfig::default(), now);
    assert!(log
        .detail_lines(&run)
        .contains(&"[11 May 2020, 09:30] not captured: https://x.com/lib.js".to_string()));
}
