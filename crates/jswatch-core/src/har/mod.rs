//! HAR (HTTP Archive) access over a generic JSON tree.
//!
//! Captures exported by browsers are frequently partial, so everything below
//! `log.entries` is read through accessors that return `Option` rather than
//! failing. Only a missing or non-JSON document is fatal.

mod capture;
mod entry;
mod parse;

pub use capture::CaptureInfo;
pub use entry::EntryView;
pub use parse::{log_entries, parse_har, read_har};
