//! Resource extraction: walk a decoded HAR capture and collect every
//! JavaScript resource, external and inline.
//!
//! Per-entry problems never abort the walk. Bodies that cannot be decoded are
//! recorded in [`Extraction::skipped`] so the caller can warn about the blind
//! spot; only a document without `log.entries` is an error.

mod inline;

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use url::{Origin, Url};

use crate::error::{DecodeError, HarError};
use crate::har::{self, CaptureInfo, EntryView};
use crate::identity::{inline_identity, Disambiguator, IdentityRules};
use crate::index::ResourceIndex;
use crate::resource::{Resource, ResourceKind};

/// Which resources to collect and how to key them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub external: bool,
    pub inline: bool,
    pub identity: IdentityRules,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            external: true,
            inline: true,
            identity: IdentityRules::default(),
        }
    }
}

/// Why an entry contributed nothing despite looking relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The body could not be decoded into text.
    Decode(#[serde(serialize_with = "serialize_display")] DecodeError),
    /// A JavaScript response with no recorded body (the exporter dropped it).
    NoBody,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Decode(e) => write!(f, "{e}"),
            SkipReason::NoBody => write!(f, "no response body recorded"),
        }
    }
}

fn serialize_display<S: serde::Serializer>(
    err: &DecodeError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(err)
}

/// An entry that was relevant but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Position in `log.entries`.
    pub index: usize,
    pub url: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Counters for the walk, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Entries in `log.entries`.
    pub entries: usize,
    /// Entries without a request URL or `response.content`.
    pub malformed: usize,
    /// HTML documents scanned for inline scripts.
    pub pages: usize,
    /// Scripts dropped for empty or whitespace-only content.
    pub discarded_empty: usize,
}

/// Everything extracted from one capture.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub capture: CaptureInfo,
    /// In entry order; inline blocks follow their page's position.
    pub resources: Vec<Resource>,
    pub skipped: Vec<SkippedEntry>,
    /// Script `src` URLs referenced by captured HTML but never captured.
    pub uncaptured: Vec<String>,
    pub stats: ExtractStats,
}

impl Extraction {
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.resources.iter().filter(|r| r.kind == kind).count()
    }

    /// Index keyed by identity (last write wins on collisions).
    pub fn index(&self) -> ResourceIndex {
        ResourceIndex::build(self.resources.iter().cloned())
    }

    pub fn into_index(self) -> ResourceIndex {
        ResourceIndex::build(self.resources)
    }
}

/// Extract all JavaScript resources from a decoded HAR document.
pub fn extract(har: &Value, options: &ExtractOptions) -> Result<Extraction, HarError> {
    let entries = har::log_entries(har)?;
    let capture = CaptureInfo::from_har(har, entries);
    let first_party = capture
        .page_url
        .as_deref()
        .and_then(|u| Url::parse(u).ok())
        .map(|u| u.origin());

    let captured: HashSet<&str> = entries
        .iter()
        .map(EntryView::new)
        .filter(EntryView::is_javascript)
        .filter_map(|e| e.request_url())
        .collect();

    let mut walker = Walker {
        options,
        first_party,
        captured,
        ids: Disambiguator::new(options.identity.repeated),
        out: Extraction {
            capture,
            ..Extraction::default()
        },
    };
    for (index, raw) in entries.iter().enumerate() {
        walker.entry(index, EntryView::new(raw));
    }

    let out = walker.out;
    tracing::info!(
        "extracted {} scripts ({} external, {} inline) from {} entries; {} skipped",
        out.resources.len(),
        out.count(ResourceKind::External),
        out.count(ResourceKind::Inline),
        out.stats.entries,
        out.skipped.len()
    );
    Ok(out)
}

struct Walker<'a> {
    options: &'a ExtractOptions,
    first_party: Option<Origin>,
    captured: HashSet<&'a str>,
    ids: Disambiguator,
    out: Extraction,
}

impl<'a> Walker<'a> {
    fn entry(&mut self, index: usize, entry: EntryView<'a>) {
        self.out.stats.entries += 1;
        let Some(url) = entry.request_url() else {
            tracing::debug!("entry {index}: no request url, skipped");
            self.out.stats.malformed += 1;
            return;
        };
        if entry.content().is_none() {
            self.out.stats.malformed += 1;
            // Typed as JavaScript by its headers but nothing to hash.
            if entry.is_javascript() && self.options.external {
                self.skip(index, url, SkipReason::NoBody);
            } else {
                tracing::debug!("entry {index}: no response content for {url}, skipped");
            }
            return;
        }

        if entry.is_javascript() {
            if self.options.external {
                self.external(index, entry, url);
            }
        } else if entry.is_html() && self.options.inline {
            self.page(index, entry, url);
        }
    }

    fn external(&mut self, index: usize, entry: EntryView<'a>, url: &str) {
        let text = match entry.body() {
            Ok(Some(text)) => text,
            Ok(None) => return self.skip(index, url, SkipReason::NoBody),
            Err(err) => return self.skip(index, url, SkipReason::Decode(err)),
        };
        if text.trim().is_empty() {
            tracing::debug!("entry {index}: empty script {url}, discarded");
            self.out.stats.discarded_empty += 1;
            return;
        }

        let identity = self
            .ids
            .assign(self.options.identity.url_identity(url, self.first_party.as_ref()));
        let referer = entry.request_header("Referer").map(str::to_string);
        tracing::debug!("entry {index}: external script {identity}");
        self.out.resources.push(
            Resource::external(identity, url, self.out.capture.page_url.clone(), text)
                .with_referer(referer),
        );
    }

    fn page(&mut self, index: usize, entry: EntryView<'a>, url: &str) {
        let html = match entry.body() {
            Ok(Some(html)) => html,
            Ok(None) => {
                tracing::debug!("entry {index}: HTML without body {url}");
                return;
            }
            Err(err) => return self.skip(index, url, SkipReason::Decode(err)),
        };
        self.out.stats.pages += 1;

        let scripts = inline::scan_page(&html, url, &self.captured);
        self.out.stats.discarded_empty += scripts.empty;
        for src in scripts.uncaptured {
            if !self.out.uncaptured.contains(&src) {
                tracing::debug!("entry {index}: {url} references uncaptured script {src}");
                self.out.uncaptured.push(src);
            }
        }

        let page_identity = self
            .options
            .identity
            .url_identity(url, self.first_party.as_ref());
        for (i, block) in scripts.blocks.into_iter().enumerate() {
            let identity = self.ids.assign(inline_identity(&page_identity, i + 1));
            tracing::debug!("entry {index}: inline script {identity}");
            self.out
                .resources
                .push(Resource::inline(identity, url, block));
        }
    }

    fn skip(&mut self, index: usize, url: &str, reason: SkipReason) {
        tracing::warn!("entry {index}: skipped {url}: {reason}");
        self.out.skipped.push(SkippedEntry {
            index,
            url: url.to_string(),
            reason,
        });
    }
}
