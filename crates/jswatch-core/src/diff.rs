//! Baseline vs candidate classification.

use serde::Serialize;

use crate::index::ResourceIndex;
use crate::resource::Resource;

/// Same identity in both captures, different content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedResource {
    pub baseline: Resource,
    pub candidate: Resource,
}

/// Outcome of one comparison. Every identity from either index lands in
/// exactly one of `added`, `removed`, `changed`, or the `unchanged` count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub added: Vec<Resource>,
    pub removed: Vec<Resource>,
    pub changed: Vec<ChangedResource>,
    pub unchanged: usize,
}

impl ComparisonResult {
    /// New or modified JavaScript: the condition worth alarming on.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.changed.is_empty()
    }

    pub fn has_removals(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Number of distinct identities across both captures.
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len() + self.unchanged
    }
}

/// Compare two captures by identity and fingerprint.
///
/// Order is deterministic: baseline identities in baseline order, then
/// candidate-only identities in candidate order.
pub fn diff(baseline: &ResourceIndex, candidate: &ResourceIndex) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    for base in baseline {
        match candidate.get(&base.identity) {
            None => result.removed.push(base.clone()),
            Some(cand) if cand.fingerprint == base.fingerprint => result.unchanged += 1,
            Some(cand) => result.changed.push(ChangedResource {
                baseline: base.clone(),
                candidate: cand.clone(),
            }),
        }
    }
    result.added = candidate
        .iter()
        .filter(|c| !baseline.contains(&c.identity))
        .cloned()
        .collect();

    tracing::info!(
        "diff: {} added, {} removed, {} changed, {} unchanged",
        result.added.len(),
        result.removed.len(),
        result.changed.len(),
        result.unchanged
    );
    result
}
