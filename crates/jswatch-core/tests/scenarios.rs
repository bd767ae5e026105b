//! End-to-end comparisons over small HAR captures.

mod common;

use common::{base64_script, har, page, script};
use jswatch_core::{
    diff, extract, fingerprint, ExtractOptions, ResourceIndex, ResourceKind, SkipReason,
};
use serde_json::Value;

fn index_of(doc: &Value) -> ResourceIndex {
    extract(doc, &ExtractOptions::default())
        .expect("extract")
        .into_index()
}

#[test]
fn identical_capture_is_unchanged() {
    let baseline = har(vec![script("https://x.com/a.js", "var a=1;")]);
    let candidate = har(vec![script("https://x.com/a.js", "var a=1;")]);

    let result = diff(&index_of(&baseline), &index_of(&candidate));
    assert!(result.added.is_empty());
    assert!(result.removed.is_empty());
    assert!(result.changed.is_empty());
    assert_eq!(result.unchanged, 1);
    assert!(!result.has_changes());
}

#[test]
fn new_external_script_is_added() {
    let baseline = har(vec![script("https://x.com/a.js", "var a=1;")]);
    let candidate = har(vec![
        script("https://x.com/a.js", "var a=1;"),
        script("https://x.com/b.js", "var b=1;"),
    ]);

    let result = diff(&index_of(&baseline), &index_of(&candidate));
    assert_eq!(result.added.len(), 1);
    assert_eq!(result.added[0].identity, "https://x.com/b.js");
    assert_eq!(result.added[0].kind, ResourceKind::External);
    assert!(result.removed.is_empty());
    assert!(result.changed.is_empty());
    assert_eq!(result.unchanged, 1);
}

#[test]
fn modified_body_is_changed() {
    let baseline = har(vec![script("https://x.com/a.js", "var a=1;")]);
    let candidate = har(vec![script("https://x.com/a.js", "var a=2;")]);

    let result = diff(&index_of(&baseline), &index_of(&candidate));
    assert_eq!(result.changed.len(), 1);
    let pair = &result.changed[0];
    assert_eq!(pair.baseline.identity, "https://x.com/a.js");
    assert_eq!(pair.baseline.fingerprint, fingerprint("var a=1;"));
    assert_eq!(pair.candidate.fingerprint, fingerprint("var a=2;"));
    assert!(result.added.is_empty());
    assert!(result.removed.is_empty());
    assert_eq!(result.unchanged, 0);
}

#[test]
fn appended_inline_script_is_added() {
    let baseline = har(vec![page(
        "https://x.com/",
        "<html><body><script>init();</script></body></html>",
    )]);
    let candidate = har(vec![page(
        "https://x.com/",
        "<html><body><script>init();</script><script>skim(document.forms);</script></body></html>",
    )]);

    let result = diff(&index_of(&baseline), &index_of(&candidate));
    assert_eq!(result.added.len(), 1);
    let added = &result.added[0];
    assert_eq!(added.kind, ResourceKind::Inline);
    assert_eq!(added.identity, "https://x.com/#inline-2");
    assert_eq!(added.content(), "skim(document.forms);");
    assert_eq!(added.page_url.as_deref(), Some("https://x.com/"));
    assert!(result.changed.is_empty());
    assert!(result.removed.is_empty());
    assert_eq!(result.unchanged, 1);
}

#[test]
fn invalid_base64_entry_is_skipped_not_fatal() {
    let doc = har(vec![
        script("https://x.com/a.js", "var a=1;"),
        base64_script("https://x.com/broken.js", "%%% not base64 %%%"),
        base64_script("https://x.com/ok.js", "dmFyIGE9MTs="),
    ]);

    let out = extract(&doc, &ExtractOptions::default()).expect("extraction is not fatal");
    assert_eq!(out.skipped.len(), 1);
    assert_eq!(out.skipped[0].index, 1);
    assert_eq!(out.skipped[0].url, "https://x.com/broken.js");
    assert!(matches!(out.skipped[0].reason, SkipReason::Decode(_)));

    let ids: Vec<&str> = out.resources.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(ids, vec!["https://x.com/a.js", "https://x.com/ok.js"]);
    assert_eq!(out.resources[1].content(), "var a=1;");
}

#[test]
fn removed_script_is_reported() {
    let baseline = har(vec![
        script("https://x.com/a.js", "var a=1;"),
        script("https://x.com/old.js", "legacy();"),
    ]);
    let candidate = har(vec![script("https://x.com/a.js", "var a=1;")]);

    let result = diff(&index_of(&baseline), &index_of(&candidate));
    assert_eq!(result.removed.len(), 1);
    assert_eq!(result.removed[0].identity, "https://x.com/old.js");
    assert!(!result.has_changes());
}

#[test]
fn mixed_capture_round_trip_through_bytes() {
    let doc = har(vec![
        page(
            "https://x.com/",
            r#"<script src="/a.js"></script><script>window.cfg = {};</script>"#,
        ),
        script("https://x.com/a.js", "var a=1;"),
    ]);
    let bytes = serde_json::to_vec(&doc).unwrap();
    let parsed = jswatch_core::har::parse_har(&bytes).unwrap();
    let out = extract(&parsed, &ExtractOptions::default()).unwrap();
    assert_eq!(out.count(ResourceKind::Inline), 1);
    assert_eq!(out.count(ResourceKind::External), 1);
    assert_eq!(out.capture.title.as_deref(), Some("https://x.com/"));
    assert_eq!(out.capture.started.as_deref(), Some("2020-05-11T09:30:00.000Z"));
}

#[test]
fn not_json_is_fatal() {
    assert!(jswatch_core::har::parse_har(b"{\"log\": {\"entries\": [").is_err());
}
