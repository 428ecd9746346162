//! CLI for searching saved repository listings.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use romseek_core::config;
use romseek_core::Platform;
use std::path::PathBuf;

use commands::{run_inspect, run_platforms, run_search, run_tokens, SearchArgs};

/// Top-level CLI for romseek.
#[derive(Debug, Parser)]
#[command(name = "romseek")]
#[command(about = "romseek: find releases in a saved repository listing page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Search a saved listing page.
    Search {
        /// Search phrase; omit to list everything (subject to size limit and cap).
        #[arg(default_value = "")]
        query: String,
        /// Saved listing page (HTML).
        #[arg(long, short = 'l', value_name = "FILE")]
        listing: PathBuf,
        /// URL the listing was saved from; result links are this plus each entry's path.
        #[arg(long, conflicts_with = "platform", value_name = "URL")]
        base_url: Option<String>,
        /// Build the base URL from the configured repository root and this platform.
        #[arg(long, short = 'p', value_name = "PLATFORM")]
        platform: Option<Platform>,
        /// Maximum number of results (default from config).
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens a search phrase is matched with.
    Tokens {
        query: String,
    },

    /// Split a display name into title, regions, and languages.
    Inspect {
        /// Full display name, e.g. "Golden Sun (USA, Europe).zip".
        name: String,
        /// Size column value to test against the size limit, e.g. "6.1 MiB".
        #[arg(long)]
        size: Option<String>,
    },

    /// List known platforms and their listing URLs.
    Platforms,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Search {
                query,
                listing,
                base_url,
                platform,
                limit,
                json,
            } => run_search(
                &cfg,
                SearchArgs {
                    query,
                    listing,
                    base_url,
                    platform,
                    limit,
                    json,
                },
            )?,
            CliCommand::Tokens { query } => run_tokens(&query),
            CliCommand::Inspect { name, size } => run_inspect(&cfg, &name, size.as_deref())?,
            CliCommand::Platforms => run_platforms(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
