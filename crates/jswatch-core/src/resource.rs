//! A single JavaScript artifact observed in one capture.

use serde::Serialize;

use crate::fingerprint::{fingerprint, Fingerprint};

/// Where the script text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Response body of a script request.
    External,
    /// Literal text of a `<script>` block inside an HTML response.
    Inline,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::External => "external",
            ResourceKind::Inline => "inline",
        }
    }
}

/// One script with its matching key and content hash.
///
/// The fingerprint is computed when the resource is built and never changes,
/// since `content` is not mutable from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Key used to pair this resource with its counterpart in another capture.
    pub identity: String,
    pub kind: ResourceKind,
    /// Raw URL of the HAR entry this came from (script URL, or page URL for inline).
    pub url: String,
    /// Page that referenced or embedded the script, when known.
    pub page_url: Option<String>,
    /// `Referer` request header, when the capture recorded one.
    pub referer: Option<String>,
    pub fingerprint: Fingerprint,
    #[serde(skip)]
    content: String,
}

impl Resource {
    pub fn external(
        identity: impl Into<String>,
        url: impl Into<String>,
        page_url: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            ResourceKind::External,
            identity.into(),
            url.into(),
            page_url,
            content.into(),
        )
    }

    pub fn inline(
        identity: impl Into<String>,
        page_url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let page_url = page_url.into();
        Self::new(
            ResourceKind::Inline,
            identity.into(),
            page_url.clone(),
            Some(page_url),
            content.into(),
        )
    }

    fn new(
        kind: ResourceKind,
        identity: String,
        url: String,
        page_url: Option<String>,
        content: String,
    ) -> Self {
        let fingerprint = fingerprint(&content);
        Self {
            identity,
            kind,
            url,
            page_url,
            referer: None,
            fingerprint,
            content,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Body size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Record the request's `Referer`; it also becomes the page URL.
    pub fn with_referer(mut self, referer: Option<String>) -> Self {
        if let Some(r) = &referer {
            self.page_url = Some(r.clone());
        }
        self.referer = referer;
        self
    }

    /// The captured URL, when identity normalization rewrote it out of the key.
    pub fn rewritten_url(&self) -> Option<&str> {
        let kept = match self.kind {
            ResourceKind::External => self.identity == self.url,
            ResourceKind::Inline => self
                .identity
                .strip_prefix(self.url.as_str())
                .is_some_and(|rest| rest.starts_with("#inline-")),
        };
        if kept {
            None
        } else {
            Some(&self.url)
        }
    }
}
