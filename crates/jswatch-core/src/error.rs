//! Error types for HAR decoding and per-entry body decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal capture errors: nothing useful can be compared without the entries.
#[derive(Debug, Error)]
pub enum HarError {
    /// The HAR file could not be read.
    #[error("read HAR file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not well-formed JSON. Browsers sometimes truncate exports.
    #[error("HAR is not valid JSON (re-export the capture and retry): {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but there is no `log.entries` array to walk.
    #[error("HAR has no log.entries array")]
    MissingEntries,
}

/// A single entry's body could not be turned into script text.
///
/// Recovered locally: the entry is skipped and recorded in the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid base64 body: {0}")]
    Base64(String),

    #[error("body is not valid UTF-8 after decoding")]
    NotUtf8,

    #[error("unsupported content encoding {0:?}")]
    UnsupportedEncoding(String),
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::Base64(err.to_string())
    }
}
