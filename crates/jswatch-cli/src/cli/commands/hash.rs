//! `jswatch hash <file>` – fingerprint a local file.

use anyhow::{Context, Result};
use jswatch_core::fingerprint::fingerprint_bytes;
use std::path::Path;

/// Print the fingerprint in `sha256sum` layout so the two can be compared.
pub fn run_hash(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    println!("{}  {}", fingerprint_bytes(&bytes), path.display());
    Ok(())
}
