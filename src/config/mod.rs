//! Configuration and constants
//!
//! - [`defaults`] - Default paths, env variable names and limits
//! - [`urls`] - Remote resource URLs
//!
//! [`Settings`] is built once by the CLI layer and handed to the pipelines,
//! nothing below the CLI reads the process environment.

pub mod defaults;
pub mod urls;

use std::path::PathBuf;

/// Run settings shared by the board and library pipelines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory all relative output paths are resolved against
    pub base_dir: PathBuf,
    /// Board tool command (path or program name)
    pub board_tool: String,
    /// Maximum concurrent board detail invocations
    pub jobs: usize,
    /// Library documentation database URL
    pub libraries_url: String,
}

impl Settings {
    /// Create settings rooted at `base_dir` with every other value defaulted
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            board_tool: defaults::DEFAULT_BOARD_TOOL.to_string(),
            jobs: defaults::DEFAULT_DETAIL_JOBS,
            libraries_url: urls::LIBRARIES_DB.to_string(),
        }
    }

    /// Set the board tool command
    pub fn with_board_tool(mut self, command: impl Into<String>) -> Self {
        self.board_tool = command.into();
        self
    }

    /// Set the detail concurrency, clamped to at least one
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Set the library database URL
    pub fn with_libraries_url(mut self, url: impl Into<String>) -> Self {
        self.libraries_url = url.into();
        self
    }

    /// Directory holding raw tool output
    pub fn raw_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::RAW_DIR)
    }

    /// Directory holding one raw detail document per board
    pub fn details_dir(&self) -> PathBuf {
        self.raw_dir().join(defaults::DETAILS_SUBDIR)
    }

    /// Directory receiving the aggregated board output
    pub fn docs_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::DOCS_DIR)
    }

    /// Directory receiving the library export
    pub fn web_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::WEB_DIR)
    }

    /// Raw listing path
    pub fn listall_path(&self) -> PathBuf {
        self.raw_dir().join(defaults::LISTALL_FILE)
    }

    /// Aggregated compact details path
    pub fn board_details_path(&self) -> PathBuf {
        self.docs_dir().join(defaults::BOARD_DETAILS_FILE)
    }

    /// Library export path
    pub fn libraries_path(&self) -> PathBuf {
        self.web_dir().join(defaults::LIBRARIES_FILE)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(".")
    }
}
