//! jswatch core: find every JavaScript resource in a HAR capture, fingerprint
//! it, and diff a candidate capture against a trusted baseline.
//!
//! The crate does no console output and holds no process-wide state; callers
//! get a [`diff::ComparisonResult`] back and decide how to report it.

pub mod config;
pub mod logging;

pub mod diff;
pub mod error;
pub mod extract;
pub mod fingerprint;
pub mod har;
pub mod identity;
pub mod index;
pub mod resource;

pub use diff::{diff, ChangedResource, ComparisonResult};
pub use error::{DecodeError, HarError};
pub use extract::{extract, Extraction, ExtractOptions, SkipReason, SkippedEntry};
pub use fingerprint::{fingerprint, Fingerprint};
pub use index::ResourceIndex;
pub use resource::{Resource, ResourceKind};
