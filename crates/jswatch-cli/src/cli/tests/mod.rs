//! CLI tests, split by area.

use super::{Cli, CliCommand};
use clap::Parser;
use jswatch_core::{diff, extract, ExtractOptions, Extraction};
use serde_json::{json, Value};

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn script(url: &str, body: &str) -> Value {
    json!({
        "request": { "url": url, "headers": [{ "name": "Referer", "value": "https://x.com/" }] },
        "response": { "headers": [], "content": { "mimeType": "application/javascript", "text": body } }
    })
}

pub(super) fn extraction(title: &str, entries: Vec<Value>) -> Extraction {
    let doc = json!({ "log": {
        "pages": [{ "title": title, "startedDateTime": "2020-05-11T09:30:00.000Z" }],
        "entries": entries
    }});
    extract(&doc, &ExtractOptions::default()).unwrap()
}

pub(super) fn compare(base: &Extraction, cand: &Extraction) -> jswatch_core::ComparisonResult {
    diff(&base.index(), &cand.index())
}

mod args;
mod runlog;
