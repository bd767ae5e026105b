//! `jswatch extract <har>` – list the scripts found in one capture.

use anyhow::{Context, Result};
use jswatch_core::config::JswatchConfig;
use jswatch_core::{extract, har, Extraction};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::report::captured_as;

pub fn run_extract(cfg: &JswatchConfig, path: &Path, json: bool) -> Result<()> {
    let doc = har::read_har(path)?;
    let out = extract(&doc, &cfg.extract_options())
        .with_context(|| format!("extract scripts from {}", path.display()))?;

    let stdout = io::stdout();
    let mut w = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut w, &out)?;
        writeln!(w)?;
    } else {
        write_listing(&mut w, &out)?;
    }
    Ok(())
}

pub(crate) fn write_listing(w: &mut impl Write, out: &Extraction) -> io::Result<()> {
    if out.resources.is_empty() {
        writeln!(w, "No JavaScript found.")?;
    } else {
        writeln!(w, "{:<9} {:<12} {:>8} {}", "KIND", "FINGERPRINT", "SIZE", "IDENTITY")?;
        for r in &out.resources {
            writeln!(
                w,
                "{:<9} {:<12} {:>8} {}{}",
                r.kind.as_str(),
                r.fingerprint.short(),
                r.size(),
                r.identity,
                captured_as(r)
            )?;
        }
    }
    for s in &out.skipped {
        writeln!(w, "skipped entry {} ({}): {}", s.index, s.url, s.reason)?;
    }
    for src in &out.uncaptured {
        writeln!(w, "not captured: {src}")?;
    }
    Ok(())
}
