//! Board detail aggregation
//!
//! Lists every board through the board tool, fetches each board's detail
//! document, and publishes one compact JSON map keyed by FQBN.
//!
//! Failure handling is layered:
//! - the listing failing, or a local write of the listing or the aggregate
//!   failing, aborts the run with an [`AggregateError`]; a failed listing's
//!   stdout is still saved first;
//! - a listing that is not valid JSON stops the run early but successfully;
//! - a single board failing is logged, counted, and skipped.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use serde_json::Value;

use crate::config::defaults;
use crate::config::Settings;
use crate::core::compact::CompactEntry;
use crate::core::fqbn::BoardIndex;
use crate::core::json::to_pretty_json;
use crate::core::sanitize::sanitize_file_name;
use crate::error::{AggregateError, BoardToolError};
use crate::infra::board_tool::{BoardTool, ToolOutput};
use crate::infra::filesystem;

/// Compact entries keyed by FQBN, in discovery order
pub type BoardDetailsMap = IndexMap<String, CompactEntry>;

/// Progress callback, called with (`boards_done`, `boards_total`)
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Summary of one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Where the raw listing was saved
    pub listing_path: PathBuf,
    /// Parse error when the listing was not valid JSON
    pub listing_parse_error: Option<String>,
    /// Unique boards discovered in the listing
    pub boards: usize,
    /// Boards whose raw detail document was saved
    pub saved: usize,
    /// Boards whose detail invocation or raw write failed
    pub failed: usize,
    /// Entries in the published map
    pub entries: usize,
    /// Where the aggregated map was written
    pub output_path: Option<PathBuf>,
}

impl AggregateReport {
    /// Whether the run stopped after an unparseable listing
    pub fn soft_stopped(&self) -> bool {
        self.listing_parse_error.is_some()
    }
}

/// Outcome of processing one board
#[derive(Debug, Clone, PartialEq)]
enum BoardOutcome {
    /// Raw saved and compact entry extracted
    Entry(CompactEntry),
    /// Raw saved but not valid JSON
    Undecodable,
    /// Invocation or raw write failed
    Failed,
}

/// Orchestrates a full board metadata run
pub struct Aggregator<'a, T: BoardTool> {
    tool: T,
    settings: &'a Settings,
    progress: Option<ProgressCallback>,
}

impl<'a, T: BoardTool> Aggregator<'a, T> {
    /// Create an aggregator using `tool` and the paths in `settings`
    pub fn new(tool: T, settings: &'a Settings) -> Self {
        Self {
            tool,
            settings,
            progress: None,
        }
    }

    /// Report progress after every board
    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the pipeline and write every artifact
    pub async fn run(&self) -> Result<AggregateReport, AggregateError> {
        let details_dir = self.settings.details_dir();
        for dir in [self.settings.raw_dir(), details_dir.clone(), self.settings.docs_dir()] {
            filesystem::create_dir_all(&dir)?;
        }

        let listing_path = self.settings.listall_path();
        let listing = match self.tool.list_all_boards().await {
            Ok(listing) => listing,
            Err(e) => {
                // The raw file always reflects this run, even when it failed
                filesystem::write_file(&listing_path, e.stdout())?;
                return Err(e.into());
            }
        };
        filesystem::write_file(&listing_path, &listing.stdout)?;
        tracing::info!("Saved raw listing to {}", listing_path.display());

        let mut report = AggregateReport {
            listing_path,
            ..AggregateReport::default()
        };

        let decoded: Value = match serde_json::from_slice(&listing.stdout) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Board listing is not valid JSON, skipping details: {}",
                    e
                );
                report.listing_parse_error = Some(e.to_string());
                return Ok(report);
            }
        };

        let index = BoardIndex::from_listing(&decoded);
        report.boards = index.len();
        tracing::info!("Found {} board(s)", index.len());

        let details = self.collect_details(&index, &details_dir, &mut report).await;
        report.entries = details.len();

        let output_path = self.settings.board_details_path();
        let encoded =
            to_pretty_json(&details).map_err(|e| AggregateError::Encode(e.to_string()))?;
        filesystem::write_file(&output_path, encoded)?;
        tracing::info!("Saved aggregated details to {}", output_path.display());
        report.output_path = Some(output_path);

        Ok(report)
    }

    /// Fetch and record every board, preserving discovery order
    async fn collect_details(
        &self,
        index: &BoardIndex,
        details_dir: &Path,
        report: &mut AggregateReport,
    ) -> BoardDetailsMap {
        let total = index.len();
        let tool = &self.tool;
        let mut details = BoardDetailsMap::with_capacity(total);

        // `buffered` yields in input order regardless of completion order
        let mut fetches = stream::iter(index.fqbns())
            .map(move |fqbn| async move { (fqbn, tool.board_details(fqbn).await) })
            .buffered(self.settings.jobs.max(1));

        let mut done = 0;
        while let Some((fqbn, result)) = fetches.next().await {
            match record_board(fqbn, result, details_dir) {
                BoardOutcome::Entry(entry) => {
                    report.saved += 1;
                    details.insert(fqbn.to_string(), entry);
                }
                BoardOutcome::Undecodable => report.saved += 1,
                BoardOutcome::Failed => report.failed += 1,
            }

            done += 1;
            if let Some(progress) = &self.progress {
                progress(done, total);
            }
        }

        details
    }
}

/// Persist one board's tool output and extract its compact entry
fn record_board(
    fqbn: &str,
    result: Result<ToolOutput, BoardToolError>,
    details_dir: &Path,
) -> BoardOutcome {
    let raw_path = raw_detail_path(details_dir, fqbn);

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Details failed for {}: {}", fqbn, e);
            let error_path = filesystem::with_suffix(&raw_path, defaults::ERROR_ARTIFACT_SUFFIX);
            if let Err(write_err) = filesystem::write_file(&error_path, e.artifact_text()) {
                tracing::warn!("{}", write_err);
            }
            return BoardOutcome::Failed;
        }
    };

    if let Err(e) = filesystem::write_file(&raw_path, &output.stdout) {
        tracing::warn!("Failed to write raw details for {}: {}", fqbn, e);
        return BoardOutcome::Failed;
    }

    match serde_json::from_slice::<Value>(&output.stdout) {
        Ok(detail) => BoardOutcome::Entry(CompactEntry::from_detail(&detail)),
        Err(e) => {
            tracing::warn!("Details for {} are not valid JSON: {}", fqbn, e);
            BoardOutcome::Undecodable
        }
    }
}

/// Raw detail file for `fqbn` inside `details_dir`
pub fn raw_detail_path(details_dir: &Path, fqbn: &str) -> PathBuf {
    details_dir.join(format!("{}.json", sanitize_file_name(fqbn)))
}
