//! Library reference export
//!
//! Downloads the library documentation database and republishes its
//! library table as a JSON array.

use std::path::PathBuf;

use crate::config::Settings;
use crate::core::json::to_pretty_json;
use crate::error::{FilesystemError, LibraryError};
use crate::infra::download::{DownloadManager, Transfer};
use crate::infra::filesystem;
use crate::infra::library_db;

/// Result of a library export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryExport {
    /// Where the JSON was written
    pub path: PathBuf,
    /// Number of exported rows
    pub rows: usize,
    /// Published JSON text
    pub json: String,
    /// SHA256 of the downloaded database
    pub checksum: String,
    /// Whether the fallback transfer was needed
    pub used_fallback: bool,
}

/// Download the library database and write `libraries.json`
pub async fn export_libraries(settings: &Settings) -> Result<LibraryExport, LibraryError> {
    let web_dir = settings.web_dir();
    filesystem::create_dir_all(&web_dir)?;

    // Removed when dropped, on every path out of this function
    let temp_db = tempfile::Builder::new()
        .prefix("doxygen_db_")
        .tempfile()
        .map_err(|e| FilesystemError::WriteFile {
            path: std::env::temp_dir(),
            error: e.to_string(),
        })?;
    let db_path = temp_db.path().to_path_buf();

    let download = DownloadManager::new()
        .download(&settings.libraries_url, &db_path, None)
        .await?;
    tracing::info!(
        "Downloaded {} bytes from {} (sha256 {})",
        download.size,
        settings.libraries_url,
        download.checksum
    );

    let rows = tokio::task::spawn_blocking(move || library_db::read_libraries(&db_path))
        .await
        .map_err(|e| LibraryError::Task(e.to_string()))??;

    let json = to_pretty_json(&rows).map_err(|e| LibraryError::Encode(e.to_string()))?;
    let path = settings.libraries_path();
    filesystem::write_file(&path, &json)?;
    drop(temp_db);

    Ok(LibraryExport {
        path,
        rows: rows.len(),
        json,
        checksum: download.checksum,
        used_fallback: download.transfer == Transfer::Fallback,
    })
}
