//! CLI for jswatch.

mod commands;
mod report;
mod runlog;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use jswatch_core::config;
use std::path::PathBuf;

use commands::{run_compare, run_completions, run_extract, run_hash, run_man, CompareArgs};

/// Top-level CLI for jswatch.
#[derive(Debug, Parser)]
#[command(name = "jswatch")]
#[command(about = "Detect new or changed JavaScript between two HAR captures of a page", long_about = None)]
pub struct Cli {
    /// Disable ANSI colors in the report.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compare a new capture against a trusted baseline.
    Compare {
        /// Baseline HAR file (the reviewed, trusted capture).
        baseline: PathBuf,
        /// Newly captured HAR file to check.
        candidate: PathBuf,
        /// Print the comparison as JSON instead of the text report.
        #[arg(long)]
        json: bool,
        /// Do not append this run to the detail and summary logs.
        #[arg(long)]
        no_log: bool,
        /// Exit with status 2 when new or changed JavaScript is found.
        #[arg(long)]
        fail_on_change: bool,
    },

    /// List the JavaScript resources found in one capture.
    Extract {
        /// HAR file to inspect.
        path: PathBuf,
        /// Print the extraction as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the fingerprint (SHA-256) of a local file, for checking reported hashes.
    Hash {
        /// Path to the file.
        path: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page on stdout.
    Man,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Changes were found and the caller asked for a failing exit status.
    ChangesFound,
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let color = !cli.no_color;

        match cli.command {
            CliCommand::Compare {
                baseline,
                candidate,
                json,
                no_log,
                fail_on_change,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = CompareArgs {
                    baseline,
                    candidate,
                    json,
                    no_log,
                    fail_on_change,
                    color,
                };
                return run_compare(&cfg, &args);
            }
            CliCommand::Extract { path, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_extract(&cfg, &path, json)?;
            }
            CliCommand::Hash { path } => run_hash(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(Outcome::Done)
    }
}

#[cfg(test)]
mod tests;
