//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod boards;
pub mod libraries;

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::config::{defaults, urls, Settings};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every board's details and publish docs/board_details.json
    Boards {
        /// Board tool command or path
        #[arg(long = "cli", value_name = "CMD", env = defaults::BOARD_TOOL_ENV, default_value = defaults::DEFAULT_BOARD_TOOL)]
        board_tool: String,

        /// Number of concurrent board detail invocations
        #[arg(short, long, default_value_t = defaults::DEFAULT_DETAIL_JOBS)]
        jobs: usize,
    },

    /// Download the library reference database and publish web/libraries.json
    Libraries {
        /// Library database URL
        #[arg(long, env = defaults::LIBRARIES_URL_ENV, default_value = urls::LIBRARIES_DB)]
        url: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, base_dir: &Path, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Boards { board_tool, jobs } => {
                let settings = Settings::new(base_dir)
                    .with_board_tool(board_tool)
                    .with_jobs(jobs);
                boards::execute(&settings, output).await
            }
            Self::Libraries { url } => {
                let settings = Settings::new(base_dir).with_libraries_url(url);
                libraries::execute(&settings, output).await
            }
        }
    }
}
