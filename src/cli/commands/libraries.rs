//! Library subcommand implementation
//!
//! Implements `boardmeta libraries`.

use anyhow::{Context, Result};

use crate::cli::output::{status, OutputConfig};
use crate::config::Settings;
use crate::core::libraries::export_libraries;

/// Execute the libraries command
pub async fn execute(settings: &Settings, output: &OutputConfig) -> Result<()> {
    tracing::info!("Fetching library database from {}", settings.libraries_url);

    let export = export_libraries(settings)
        .await
        .context("Failed to export libraries")?;

    if export.used_fallback {
        tracing::info!("Library database fetched with the fallback transfer");
    }

    if !output.quiet {
        print!("{}", export.json);
    }
    output.line(format!(
        "{} Saved libraries: {} ({} row(s))",
        status::SUCCESS,
        export.path.display(),
        export.rows
    ));

    Ok(())
}
