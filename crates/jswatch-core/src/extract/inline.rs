//! `<script>` block discovery inside captured HTML.

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

static SCRIPT_SELECTOR: OnceLock<Option<Selector>> = OnceLock::new();

fn script_selector() -> Option<&'static Selector> {
    SCRIPT_SELECTOR
        .get_or_init(|| Selector::parse("script").ok())
        .as_ref()
}

/// What one HTML page contributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PageScripts {
    /// Non-empty inline blocks, in document order, text exactly as written.
    pub blocks: Vec<String>,
    /// Inline blocks dropped for carrying only whitespace.
    pub empty: usize,
    /// `src` targets (resolved against the page) with no captured script response.
    pub uncaptured: Vec<String>,
}

/// Scan `html` for inline scripts. `captured` holds the request URLs of every
/// JavaScript response in the capture; a `src` script pointing at one of those
/// is already accounted for as an external resource.
pub(crate) fn scan_page(html: &str, page_url: &str, captured: &HashSet<&str>) -> PageScripts {
    let mut out = PageScripts::default();
    let Some(selector) = script_selector() else {
        return out;
    };
    let base = Url::parse(page_url).ok();
    let document = Html::parse_document(html);

    for element in document.select(selector) {
        let attrs = element.value();
        if !is_javascript_type(attrs.attr("type")) {
            continue;
        }
        if let Some(src) = attrs.attr("src").map(str::trim).filter(|s| !s.is_empty()) {
            let resolved = base
                .as_ref()
                .and_then(|b| b.join(src).ok())
                .map(String::from)
                .unwrap_or_else(|| src.to_string());
            if captured.contains(resolved.as_str()) || captured.contains(src) {
                continue;
            }
            if !out.uncaptured.contains(&resolved) {
                out.uncaptured.push(resolved);
            }
        }
        let text: String = element.text().collect();
        if text.trim().is_empty() {
            if attrs.attr("src").is_none() {
                out.empty += 1;
            }
            continue;
        }
        out.blocks.push(text);
    }
    out
}

/// `type` values that browsers execute as script. Data blocks such as
/// `application/ld+json` or `text/template` are not JavaScript.
fn is_javascript_type(ty: Option<&str>) -> bool {
    let Some(ty) = ty.map(str::trim) else {
        return true;
    };
    if ty.is_empty() {
        return true;
    }
    let ty = ty.to_ascii_lowercase();
    ty == "module" || ty.contains("javascript") || ty.contains("ecmascript") || ty.contains("jscript")
}
