//! Board subcommand implementation
//!
//! Implements `boardmeta boards`.

use anyhow::{Context, Result};

use crate::cli::output::{status, OutputConfig};
use crate::config::Settings;
use crate::core::aggregate::Aggregator;
use crate::infra::board_tool::ArduinoCli;

/// Execute the boards command
pub async fn execute(settings: &Settings, output: &OutputConfig) -> Result<()> {
    let tool = ArduinoCli::new(settings.board_tool.clone(), &settings.base_dir);

    let bar = output.board_bar();
    let progress_bar = bar.clone();
    let aggregator = Aggregator::new(tool, settings).with_progress(Box::new(move |done, total| {
        progress_bar.set_length(total as u64);
        progress_bar.set_position(done as u64);
    }));

    tracing::info!("Listing boards with '{}'", settings.board_tool);

    let report = aggregator
        .run()
        .await
        .context("Failed to aggregate board details")?;
    bar.finish_and_clear();

    output.line(format!("Saved raw: {}", report.listing_path.display()));

    // Already warned about by the aggregator
    if report.soft_stopped() {
        return Ok(());
    }

    output.line(format!(
        "Details saved: {}, failed: {}",
        report.saved, report.failed
    ));
    if let Some(path) = &report.output_path {
        output.line(format!(
            "{} Saved aggregated details: {} ({} board(s))",
            status::SUCCESS,
            path.display(),
            report.entries
        ));
    }

    Ok(())
}
