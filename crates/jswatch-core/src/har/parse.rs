//! Decoding HAR bytes and locating the entry list.

use serde_json::Value;
use std::path::Path;

use crate::error::HarError;

/// Decode HAR bytes into a JSON tree and check that it has entries to walk.
pub fn parse_har(bytes: &[u8]) -> Result<Value, HarError> {
    let har: Value = serde_json::from_slice(bytes)?;
    log_entries(&har)?;
    Ok(har)
}

/// Read and decode a HAR file.
pub fn read_har(path: &Path) -> Result<Value, HarError> {
    let bytes = std::fs::read(path).map_err(|source| HarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_har(&bytes)
}

/// The `log.entries` array. An empty array is fine; a missing one is not.
pub fn log_entries(har: &Value) -> Result<&[Value], HarError> {
    har.pointer("/log/entries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(HarError::MissingEntries)
}
