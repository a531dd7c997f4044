//! External board tool adapter
//!
//! Wraps the `arduino-cli` style command that lists boards and reports board
//! details as JSON. Arguments are passed to the process one by one, never
//! through a shell.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::BoardToolError;

/// Successful tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Raw stdout, passed through byte for byte
    pub stdout: Vec<u8>,
    /// Diagnostics written to stderr
    pub stderr: String,
}

/// Source of board listings and board detail documents
///
/// A non-zero exit or a failed spawn is always an `Err`, so an empty
/// successful output is never confused with a failure. A non-zero exit
/// still carries the stdout it produced.
#[async_trait]
pub trait BoardTool: Send + Sync {
    /// `board listall --json`
    async fn list_all_boards(&self) -> Result<ToolOutput, BoardToolError>;

    /// `board details --json -b <fqbn>`
    async fn board_details(&self, fqbn: &str) -> Result<ToolOutput, BoardToolError>;
}

/// Arguments for the listing invocation
pub fn list_all_args() -> Vec<String> {
    ["board", "listall", "--json"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Arguments for the detail invocation of one board
pub fn board_details_args(fqbn: &str) -> Vec<String> {
    let mut args: Vec<String> = ["board", "details", "--json", "-b"]
        .iter()
        .map(ToString::to_string)
        .collect();
    args.push(fqbn.to_string());
    args
}

/// Board tool backed by a locally installed `arduino-cli`
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    /// Command as configured (path or program name)
    command: String,
    /// Working directory for every invocation
    working_dir: PathBuf,
}

impl ArduinoCli {
    /// Create an adapter running `command` from `working_dir`
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Configured command
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Resolve the configured command to an executable path
    ///
    /// Commands containing a path separator are taken relative to the
    /// working directory; bare names are looked up on `PATH`.
    pub fn resolve_program(&self) -> Result<PathBuf, BoardToolError> {
        let candidate = Path::new(&self.command);
        if candidate.is_absolute() {
            return Ok(candidate.to_path_buf());
        }
        if candidate.components().count() > 1 {
            // Relative programs are ambiguous once current_dir is set
            let joined = self.working_dir.join(candidate);
            if joined.is_absolute() {
                return Ok(joined);
            }
            return std::env::current_dir()
                .map(|cwd| cwd.join(joined))
                .map_err(|e| BoardToolError::Spawn {
                    command: self.command.clone(),
                    error: e.to_string(),
                });
        }

        which::which(&self.command).map_err(|e| BoardToolError::Spawn {
            command: self.command.clone(),
            error: e.to_string(),
        })
    }

    async fn invoke(&self, args: &[String]) -> Result<ToolOutput, BoardToolError> {
        let program = self.resolve_program()?;

        tracing::debug!("Running {} {}", program.display(), args.join(" "));

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| BoardToolError::Spawn {
                command: self.command.clone(),
                error: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(BoardToolError::NonZeroExit {
                command: self.command.clone(),
                code: output.status.code(),
                stdout: output.stdout,
                stderr,
            });
        }

        if !stderr.trim().is_empty() {
            tracing::debug!("{} stderr: {}", self.command, stderr.trim());
        }

        Ok(ToolOutput {
            stdout: output.stdout,
            stderr,
        })
    }
}

#[async_trait]
impl BoardTool for ArduinoCli {
    async fn list_all_boards(&self) -> Result<ToolOutput, BoardToolError> {
        self.invoke(&list_all_args()).await
    }

    async fn board_details(&self, fqbn: &str) -> Result<ToolOutput, BoardToolError> {
        self.invoke(&board_details_args(fqbn)).await
    }
}
