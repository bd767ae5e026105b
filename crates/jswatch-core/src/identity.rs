//! Identity keys: how a script in the baseline is paired with its
//! counterpart in the candidate.
//!
//! By default an external script's identity is its request URL exactly as
//! captured, and an inline script's identity is `{page}#inline-{n}`. The
//! optional rules below loosen URL matching for sites that rotate cache
//! busters or deploy versions into script URLs on every release.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::{Origin, Url};

/// What to do when the same identity shows up more than once in one capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatedRequests {
    /// Keep one resource per identity; the last occurrence wins.
    #[default]
    Collapse,
    /// Track each occurrence separately: the 2nd and later get a `#<n>` suffix.
    Disambiguate,
}

/// URL normalization applied before matching (the `[identity]` config section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityRules {
    /// Drop query string and fragment from URLs.
    pub strip_query: bool,
    /// Replace `version<digits>` / `v<digits>` directory segments in
    /// first-party URLs with `version*` / `v*`.
    pub mask_versions: bool,
    pub repeated: RepeatedRequests,
}

impl IdentityRules {
    /// True when URLs are used exactly as captured.
    pub fn is_exact(&self) -> bool {
        !self.strip_query && !self.mask_versions
    }

    /// Identity for a URL. `first_party` is the origin of the capture's
    /// primary page; version masking only applies to URLs on that origin.
    pub fn url_identity(&self, raw: &str, first_party: Option<&Origin>) -> String {
        if self.is_exact() {
            return raw.to_string();
        }
        let Ok(mut parsed) = Url::parse(raw) else {
            return raw.to_string();
        };
        if self.strip_query {
            parsed.set_query(None);
            parsed.set_fragment(None);
        }
        if self.mask_versions && first_party.is_some_and(|origin| *origin == parsed.origin()) {
            let masked = parsed.path_segments().map(|segments| {
                let segments: Vec<&str> = segments.collect();
                let last = segments.len().saturating_sub(1);
                segments
                    .iter()
                    .enumerate()
                    .map(|(i, s)| if i < last { mask_segment(s) } else { s.to_string() })
                    .collect::<Vec<_>>()
                    .join("/")
            });
            if let Some(path) = masked {
                parsed.set_path(&path);
            }
        }
        parsed.to_string()
    }
}

/// Identity of the `ordinal`-th (1-based) inline script on a page.
pub fn inline_identity(page_identity: &str, ordinal: usize) -> String {
    format!("{page_identity}#inline-{ordinal}")
}

fn mask_segment(segment: &str) -> String {
    for prefix in ["version", "v"] {
        if let Some(rest) = segment.strip_prefix(prefix) {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return format!("{prefix}*");
            }
        }
    }
    segment.to_string()
}

/// Applies the repeated-request policy across one capture.
#[derive(Debug)]
pub(crate) struct Disambiguator {
    policy: RepeatedRequests,
    seen: HashMap<String, usize>,
}

impl Disambiguator {
    pub(crate) fn new(policy: RepeatedRequests) -> Self {
        Self {
            policy,
            seen: HashMap::new(),
        }
    }

    pub(crate) fn assign(&mut self, identity: String) -> String {
        if self.policy == RepeatedRequests::Collapse {
            return identity;
        }
        let count = self.seen.entry(identity.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            identity
        } else {
            format!("{identity}#{count}")
        }
    }
}
