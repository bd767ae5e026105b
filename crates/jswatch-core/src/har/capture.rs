//! Capture-level metadata shown in reports.

use serde::Serialize;
use serde_json::Value;

use super::entry::EntryView;

/// What the capture says about itself: `log.pages[0]` and the main document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureInfo {
    /// `log.pages[0].title`; Chrome stores the page URL here.
    pub title: Option<String>,
    /// `log.pages[0].startedDateTime`, as recorded.
    pub started: Option<String>,
    /// The primary page URL: the first HTML document, else a URL-shaped title.
    pub page_url: Option<String>,
}

impl CaptureInfo {
    pub fn from_har(har: &Value, entries: &[Value]) -> Self {
        let page = har.pointer("/log/pages/0");
        let field = |name: &str| {
            page.and_then(|p| p.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let title = field("title");
        let started = field("startedDateTime");

        let page_url = entries
            .iter()
            .map(EntryView::new)
            .find(|e| e.is_html())
            .and_then(|e| e.request_url())
            .map(str::to_string)
            .or_else(|| {
                title
                    .as_deref()
                    .filter(|t| t.starts_with("http://") || t.starts_with("https://"))
                    .map(str::to_string)
            });

        Self {
            title,
            started,
            page_url,
        }
    }

    /// Title for display, falling back to the page URL.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.page_url.as_deref())
            .unwrap_or("(untitled)")
    }
}
