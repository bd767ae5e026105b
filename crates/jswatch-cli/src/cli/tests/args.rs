//! Argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_compare() {
    match parse(&["jswatch", "compare", "base.har", "new.har"]) {
        CliCommand::Compare {
            baseline,
            candidate,
            json,
            no_log,
            fail_on_change,
        } => {
            assert_eq!(baseline, PathBuf::from("base.har"));
            assert_eq!(candidate, PathBuf::from("new.har"));
            assert!(!json);
            assert!(!no_log);
            assert!(!fail_on_change);
        }
        _ => panic!("expected Compare"),
    }
}

#[test]
fn cli_parse_compare_flags() {
    match parse(&[
        "jswatch",
        "compare",
        "a.har",
        "b.har",
        "--json",
        "--no-log",
        "--fail-on-change",
    ]) {
        CliCommand::Compare {
            json,
            no_log,
            fail_on_change,
            ..
        } => {
            assert!(json);
            assert!(no_log);
            assert!(fail_on_change);
        }
        _ => panic!("expected Compare with flags"),
    }
}

#[test]
fn cli_parse_compare_requires_both_files() {
    assert!(Cli::try_parse_from(["jswatch", "compare", "only.har"]).is_err());
}

#[test]
fn cli_parse_global_no_color() {
    let cli = Cli::try_parse_from(["jswatch", "compare", "a.har", "b.har", "--no-color"]).unwrap();
    assert!(cli.no_color);
    let cli = Cli::try_parse_from(["jswatch", "hash", "x.js"]).unwrap();
    assert!(!cli.no_color);
}

#[test]
fn cli_parse_extract() {
    match parse(&["jswatch", "extract", "capture.har", "--json"]) {
        CliCommand::Extract { path, json } => {
            assert_eq!(path, PathBuf::from("capture.har"));
            assert!(json);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_hash() {
    match parse(&["jswatch", "hash", "/tmp/app.js"]) {
        CliCommand::Hash { path } => assert_eq!(path, PathBuf::from("/tmp/app.js")),
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["jswatch", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["jswatch", "man"]), CliCommand::Man));
}
