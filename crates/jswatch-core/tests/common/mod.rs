//! HAR fixtures built with `serde_json::json!`.

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn script(url: &str, body: &str) -> Value {
    json!({
        "request": { "method": "GET", "url": url, "headers": [] },
        "response": {
            "status": 200,
            "headers": [{ "name": "Content-Type", "value": "application/javascript" }],
            "content": { "size": body.len(), "mimeType": "application/javascript", "text": body }
        }
    })
}

pub fn base64_script(url: &str, payload: &str) -> Value {
    json!({
        "request": { "method": "GET", "url": url, "headers": [] },
        "response": {
            "status": 200,
            "headers": [],
            "content": { "mimeType": "text/javascript", "text": payload, "encoding": "base64" }
        }
    })
}

pub fn page(url: &str, html: &str) -> Value {
    json!({
        "request": { "method": "GET", "url": url, "headers": [] },
        "response": {
            "status": 200,
            "headers": [],
            "content": { "size": html.len(), "mimeType": "text/html; charset=utf-8", "text": html }
        }
    })
}

pub fn har(entries: Vec<Value>) -> Value {
    json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "WebInspector", "version": "537.36" },
            "pages": [{ "id": "page_1", "title": "https://x.com/", "startedDateTime": "2020-05-11T09:30:00.000Z" }],
            "entries": entries
        }
    })
}
