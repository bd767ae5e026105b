//! CLI command handlers. Each command is in its own file.

mod compare;
mod completions;
mod extract;
mod hash;

pub use compare::{run_compare, CompareArgs};
pub use completions::{run_completions, run_man};
pub use extract::run_extract;
pub use hash::run_hash;

#[cfg(test)]
pub(crate) use extract::write_listing;
