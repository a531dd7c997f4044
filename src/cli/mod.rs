//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::Commands;
use output::OutputConfig;

/// Boardmeta - Arduino board and library metadata publisher
///
/// Fetches board definitions and library references and writes them as
/// static JSON for the website.
#[derive(Parser, Debug)]
#[command(name = "boardmeta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output (errors are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory that storage/, docs/ and web/ are created in
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings for this invocation
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.verbose)
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = self.output_config();
        if let Some(cmd) = self.command {
            cmd.run(&self.base_dir, &output).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
