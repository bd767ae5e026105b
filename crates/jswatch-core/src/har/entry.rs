//! Lenient view over one `log.entries[]` item.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::error::DecodeError;

/// Borrowed accessor over a HAR entry. Every field lookup is optional.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a>(&'a Value);

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a Value) -> Self {
        Self(entry)
    }

    pub fn request_url(&self) -> Option<&'a str> {
        self.0.pointer("/request/url").and_then(Value::as_str)
    }

    /// `response.content`, only when it is an object.
    pub fn content(&self) -> Option<&'a Value> {
        self.0
            .pointer("/response/content")
            .filter(|c| c.is_object())
    }

    pub fn mime_type(&self) -> Option<&'a str> {
        self.content()?.get("mimeType").and_then(Value::as_str)
    }

    pub fn request_header(&self, name: &str) -> Option<&'a str> {
        get_header(self.0.pointer("/request/headers"), name)
    }

    pub fn response_header(&self, name: &str) -> Option<&'a str> {
        get_header(self.0.pointer("/response/headers"), name)
    }

    /// JavaScript by `mimeType`, or by the response `Content-Type` header when
    /// the exporter recorded a generic mime type.
    pub fn is_javascript(&self) -> bool {
        self.mime_type().is_some_and(is_javascript_mime)
            || self
                .response_header("Content-Type")
                .is_some_and(is_javascript_mime)
    }

    pub fn is_html(&self) -> bool {
        self.mime_type().is_some_and(is_html_mime)
    }

    /// Decoded response body. `Ok(None)` when the capture has no `text`.
    pub fn body(&self) -> Result<Option<String>, DecodeError> {
        let Some(content) = self.content() else {
            return Ok(None);
        };
        let Some(text) = content.get("text").and_then(Value::as_str) else {
            return Ok(None);
        };
        match content.get("encoding").and_then(Value::as_str) {
            None => Ok(Some(text.to_string())),
            Some(enc) if enc.is_empty() => Ok(Some(text.to_string())),
            Some(enc) if enc.eq_ignore_ascii_case("base64") => {
                let compact: String = text.split_ascii_whitespace().collect();
                let bytes = STANDARD.decode(compact)?;
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| DecodeError::NotUtf8)
            }
            Some(enc) => Err(DecodeError::UnsupportedEncoding(enc.to_string())),
        }
    }
}

/// True for `application/javascript`, `text/javascript; charset=utf-8`,
/// `application/x-javascript`, `text/ecmascript` and friends.
pub(crate) fn is_javascript_mime(mime: &str) -> bool {
    let mime = mime.to_ascii_lowercase();
    mime.contains("javascript") || mime.contains("ecmascript")
}

pub(crate) fn is_html_mime(mime: &str) -> bool {
    let mime = mime.to_ascii_lowercase();
    mime.contains("text/html") || mime.contains("application/xhtml")
}

fn get_header<'a>(headers: Option<&'a Value>, name: &str) -> Option<&'a str> {
    headers?
        .as_array()?
        .iter()
        .find(|h| {
            h.get("name")
                .and_then(Value::as_str)
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .and_then(|h| h.get("value"))
        .and_then(Value::as_str)
}
