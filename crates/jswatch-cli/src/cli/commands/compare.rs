//! `jswatch compare <baseline> <candidate>` – the main check.

use anyhow::{Context, Result};
use jswatch_core::config::JswatchConfig;
use jswatch_core::{diff, extract, har, logging, ExtractOptions, Extraction};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::report::{self, RunView, Styled};
use crate::cli::runlog::RunLog;
use crate::cli::Outcome;

#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub baseline: PathBuf,
    pub candidate: PathBuf,
    pub json: bool,
    pub no_log: bool,
    pub fail_on_change: bool,
    pub color: bool,
}

fn load(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let doc = har::read_har(path)?;
    extract(&doc, options).with_context(|| format!("extract scripts from {}", path.display()))
}

pub fn run_compare(cfg: &JswatchConfig, args: &CompareArgs) -> Result<Outcome> {
    let options = cfg.extract_options();
    tracing::info!(
        "compare baseline={} candidate={}",
        args.baseline.display(),
        args.candidate.display()
    );
    let baseline = load(&args.baseline, &options)?;
    let candidate = load(&args.candidate, &options)?;
    let result = diff(&baseline.index(), &candidate.index());

    let run = RunView {
        baseline_path: &args.baseline,
        candidate_path: &args.candidate,
        baseline: &baseline,
        candidate: &candidate,
        result: &result,
    };

    let stdout = io::stdout();
    let mut w = stdout.lock();
    if args.json {
        let doc = json!({
            "baseline": {
                "path": args.baseline,
                "capture": baseline.capture,
                "skipped": baseline.skipped,
                "uncaptured": baseline.uncaptured,
            },
            "candidate": {
                "path": args.candidate,
                "capture": candidate.capture,
                "skipped": candidate.skipped,
                "uncaptured": candidate.uncaptured,
            },
            "result": result,
        });
        serde_json::to_writer_pretty(&mut w, &doc)?;
        writeln!(w)?;
    } else {
        let style = if args.color {
            Styled::detect()
        } else {
            Styled::plain()
        };
        report::render(&mut w, &style, &run)?;
    }

    if cfg.report.write_logs && !args.no_log {
        let state_dir = logging::state_dir()?;
        let log = RunLog::new(&state_dir, &cfg.report, chrono::Local::now());
        // The report is already out; a log failure should not hide it.
        if let Err(err) = log.append(&run) {
            tracing::warn!("could not write run logs: {err:#}");
            eprintln!("jswatch: could not write run logs: {err:#}");
        }
    }

    if args.fail_on_change && result.has_changes() {
        Ok(Outcome::ChangesFound)
    } else {
        Ok(Outcome::Done)
    }
}
