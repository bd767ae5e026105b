//! Append-only run logs: a detail log with every finding, and a summary log
//! with one line per run.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use jswatch_core::config::ReportConfig;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::report::{captured_as, RunView, ALL_CLEAR, CHANGES_FOUND};

/// Log files for one run, all stamped with the same run timestamp.
#[derive(Debug, Clone)]
pub struct RunLog {
    pub detail: PathBuf,
    pub summary: PathBuf,
    stamp: String,
}

impl RunLog {
    /// Relative paths in `cfg` are resolved against `state_dir`.
    pub fn new<Tz>(state_dir: &Path, cfg: &ReportConfig, now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            detail: state_dir.join(&cfg.detail_log),
            summary: state_dir.join(&cfg.summary_log),
            stamp: now.format("[%d %b %Y, %H:%M] ").to_string(),
        }
    }

    pub fn detail_lines(&self, run: &RunView<'_>) -> Vec<String> {
        let result = run.result;
        let mut lines = vec![
            format!("Baseline HAR: {}", run.baseline_path.display()),
            format!("New HAR: {}", run.candidate_path.display()),
        ];
        for ex in [run.baseline, run.candidate] {
            lines.push(format!("Page title: {}", ex.capture.display_title()));
            lines.push(format!(
                "\tHAR creation:\t{}",
                ex.capture.started.as_deref().unwrap_or("-")
            ));
            lines.push(format!("\tJS Files Found:\t{}", ex.resources.len()));
        }
        let verdict = if result.has_changes() {
            CHANGES_FOUND
        } else {
            ALL_CLEAR
        };
        lines.push(verdict.to_string());

        if result.added.is_empty() {
            lines.push("No new JS files found".to_string());
        } else {
            lines.push(format!("{} new JavaScript files found", result.added.len()));
            lines.extend(
                result
                    .added
                    .iter()
                    .map(|r| format!("{}{}", r.identity, captured_as(r))),
            );
        }
        if result.changed.is_empty() {
            lines.push("No changes in JS found".to_string());
        } else {
            lines.push(format!(
                "{} changed JavaScript files found",
                result.changed.len()
            ));
            for pair in &result.changed {
                lines.push(format!(
                    "{}{} baseline hash: {},new hash: {}",
                    pair.candidate.identity,
                    captured_as(&pair.candidate),
                    pair.baseline.fingerprint,
                    pair.candidate.fingerprint
                ));
            }
        }
        for r in &result.removed {
            lines.push(format!("removed: {}{}", r.identity, captured_as(r)));
        }
        for s in run.baseline.skipped.iter().chain(&run.candidate.skipped) {
            lines.push(format!("skipped entry {} ({}): {}", s.index, s.url, s.reason));
        }
        for src in run.baseline.uncaptured.iter().chain(&run.candidate.uncaptured) {
            lines.push(format!("not captured: {src}"));
        }

        lines
            .into_iter()
            .map(|line| format!("{}{line}", self.stamp))
            .collect()
    }

    pub fn summary_line(&self, run: &RunView<'_>) -> String {
        format!(
            "{}{}, {}, {}, {}",
            self.stamp,
            run.baseline.capture.display_title(),
            run.baseline_path.display(),
            run.candidate_path.display(),
            if run.result.has_changes() {
                "CHANGES"
            } else {
                "no changes"
            }
        )
    }

    pub fn append(&self, run: &RunView<'_>) -> Result<()> {
        append_lines(&self.detail, &self.detail_lines(run))?;
        append_lines(&self.summary, &[self.summary_line(run)])?;
        tracing::debug!(
            "appended run logs {} and {}",
            self.detail.display(),
            self.summary.display()
        );
        Ok(())
    }
}

fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    for line in lines {
        writeln!(file, "{line}").with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}
