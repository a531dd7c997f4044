//! Error types for boardmeta
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Board tool invocation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardToolError {
    /// The process could not be started at all
    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    /// The process ran but reported failure
    #[error("'{command}' failed (exit {}): {}", exit_label(.code), .stderr.trim())]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: String,
    },
}

impl BoardToolError {
    /// Exit code reported by the tool, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Spawn { .. } => None,
            Self::NonZeroExit { code, .. } => *code,
        }
    }

    /// Whatever the tool printed before failing
    pub fn stdout(&self) -> &[u8] {
        match self {
            Self::Spawn { .. } => &[],
            Self::NonZeroExit { stdout, .. } => stdout,
        }
    }

    /// Text written to the per-board error artifact
    pub fn artifact_text(&self) -> String {
        match self {
            Self::Spawn { error, .. } => error.clone(),
            Self::NonZeroExit { stderr, .. } if !stderr.is_empty() => stderr.clone(),
            Self::NonZeroExit { .. } => "Unknown error".to_string(),
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },
}

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Server answered with a non-success status
    #[error("HTTP status {status} downloading '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Board detail aggregation errors
///
/// Only fatal conditions are represented here. Per-board failures are
/// counted in the run summary instead.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Listing all boards failed
    #[error("Board listing failed: {0}")]
    Listing(#[from] BoardToolError),

    /// Local filesystem failure
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Aggregate could not be encoded
    #[error("Failed to encode aggregated details: {0}")]
    Encode(String),
}

impl AggregateError {
    /// Process exit code this error should produce
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Listing(tool) => tool.exit_code().filter(|c| *c != 0).unwrap_or(1),
            Self::Filesystem(_) | Self::Encode(_) => 1,
        }
    }
}

/// Library database export errors
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Database download failed
    #[error("Failed to download DB: {0}")]
    Download(#[from] DownloadError),

    /// SQLite open or query failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Rows could not be encoded
    #[error("Failed to encode JSON: {0}")]
    Encode(String),

    /// Local filesystem failure
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Blocking worker failed
    #[error("Export task failed: {0}")]
    Task(String),
}
