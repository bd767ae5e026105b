//! Console report for a comparison, with optional ANSI color.

use jswatch_core::{ComparisonResult, Extraction, Resource, ResourceKind};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Check if color output is enabled.
fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn detect() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }
}

/// Everything one comparison run produced, borrowed for rendering and logging.
pub struct RunView<'a> {
    pub baseline_path: &'a Path,
    pub candidate_path: &'a Path,
    pub baseline: &'a Extraction,
    pub candidate: &'a Extraction,
    pub result: &'a ComparisonResult,
}

pub const ALL_CLEAR: &str = "All clear - no changes found";
pub const CHANGES_FOUND: &str = "Warning - changes found!";

/// Where a resource came from: ` [Referer:...]` when the request recorded
/// one, ` [page:...]` when only the capture's main page is known.
pub fn provenance(r: &Resource) -> String {
    match (r.kind, r.referer.as_deref(), r.page_url.as_deref()) {
        (ResourceKind::Inline, _, _) => " [inline]".to_string(),
        (ResourceKind::External, Some(referer), _) => format!(" [Referer:{referer}]"),
        (ResourceKind::External, None, Some(page)) => format!(" [page:{page}]"),
        (ResourceKind::External, None, None) => String::new(),
    }
}

/// ` (captured as <url>)` when the identity no longer shows the fetched URL.
pub fn captured_as(r: &Resource) -> String {
    r.rewritten_url()
        .map(|url| format!(" (captured as {url})"))
        .unwrap_or_default()
}

fn write_capture(w: &mut impl Write, label: &str, path: &Path, ex: &Extraction) -> io::Result<()> {
    writeln!(w, "{label} filename: {}", path.display())?;
    writeln!(w, "\tPage title:\t{}", ex.capture.display_title())?;
    writeln!(
        w,
        "\tHAR creation:\t{}",
        ex.capture.started.as_deref().unwrap_or("-")
    )?;
    writeln!(w, "\tJS Files Found:\t{}", ex.resources.len())
}

pub fn render(w: &mut impl Write, style: &Styled, run: &RunView<'_>) -> io::Result<()> {
    let result = run.result;

    write_capture(w, "Baseline", run.baseline_path, run.baseline)?;
    write_capture(w, "New", run.candidate_path, run.candidate)?;
    writeln!(w)?;

    if result.has_changes() {
        writeln!(w, "{} {CHANGES_FOUND}", style.red("\u{2573}"))?;
    } else {
        writeln!(w, "{} {ALL_CLEAR}", style.green("\u{221A}"))?;
    }
    writeln!(w)?;

    if result.added.is_empty() {
        writeln!(w, "No new JS files found")?;
    } else {
        writeln!(w, "{} new JavaScript files found", result.added.len())?;
        for r in &result.added {
            writeln!(
                w,
                "\t{}{}{}",
                style.red(&r.identity),
                captured_as(r),
                provenance(r)
            )?;
        }
    }

    if result.changed.is_empty() {
        writeln!(w, "No changes in JS found")?;
    } else {
        writeln!(w, "{} changed JavaScript files found", result.changed.len())?;
        for pair in &result.changed {
            writeln!(
                w,
                "\t{}{}{}",
                style.red(&pair.candidate.identity),
                captured_as(&pair.candidate),
                provenance(&pair.candidate)
            )?;
            writeln!(
                w,
                "\t\tbaseline hash: {}, new hash: {}",
                pair.baseline.fingerprint, pair.candidate.fingerprint
            )?;
        }
    }

    if result.has_removals() {
        writeln!(
            w,
            "{} JavaScript files no longer present",
            result.removed.len()
        )?;
        for r in &result.removed {
            writeln!(w, "\t{}{}{}", r.identity, captured_as(r), provenance(r))?;
        }
    }
    writeln!(w, "{} JavaScript files unchanged", result.unchanged)?;

    for (label, ex) in [("baseline", run.baseline), ("new", run.candidate)] {
        for s in &ex.skipped {
            writeln!(
                w,
                "{} {label} entry {} not checked ({}): {}",
                style.yellow("!"),
                s.index,
                s.url,
                s.reason
            )?;
        }
    }
    for (label, ex) in [("baseline", run.baseline), ("new", run.candidate)] {
        for src in &ex.uncaptured {
            writeln!(
                w,
                "{} {label} capture references script not captured: {src}",
                style.yellow("!")
            )?;
        }
    }
    Ok(())
}
