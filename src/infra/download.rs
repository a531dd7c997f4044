//! HTTP download functionality
//!
//! Fetches a remote file to disk. The primary transfer streams the body to
//! the destination; if it fails for any reason a buffered transfer through a
//! separately configured client is tried once before giving up.

use futures::StreamExt;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::DownloadError;

/// Progress callback type for download progress reporting
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Which transfer produced the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Streaming download
    Primary,
    /// Buffered download after the primary failed
    Fallback,
}

/// Download result containing file path and metadata
#[derive(Debug)]
pub struct DownloadResult {
    /// Path to the downloaded file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// SHA256 checksum of the downloaded content
    pub checksum: String,
    /// Transfer that succeeded
    pub transfer: Transfer,
}

/// Download manager with a streaming client and a buffered fallback client
#[derive(Debug, Clone)]
pub struct DownloadManager {
    /// Streaming HTTP client
    client: reqwest::Client,
    /// Buffered fallback HTTP client
    fallback: reqwest::Client,
}

impl DownloadManager {
    /// Create a new download manager
    pub fn new() -> Self {
        Self::with_timeouts(
            Duration::from_secs(defaults::DOWNLOAD_CONNECT_TIMEOUT),
            Duration::from_secs(defaults::DOWNLOAD_TIMEOUT),
        )
    }

    /// Create a download manager with custom timeouts
    pub fn with_timeouts(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .connect_timeout(connect_timeout)
                .user_agent(defaults::USER_AGENT)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            fallback: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(defaults::USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download `url` to `dest`, falling back to a buffered transfer
    ///
    /// When both transfers fail the primary error is returned and any partial
    /// file is removed.
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        let primary_error = match self.download_streaming(url, dest, progress.as_ref()).await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        tracing::warn!("Primary download failed, retrying buffered: {}", primary_error);

        match self.download_buffered(url, dest).await {
            Ok(result) => Ok(result),
            Err(fallback_error) => {
                tracing::debug!("Fallback download failed: {}", fallback_error);
                let _ = tokio::fs::remove_file(dest).await;
                Err(primary_error)
            }
        }
    }

    /// Stream the response body to disk
    async fn download_streaming(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        let response = send(&self.client, url).await?;
        let total_size = response.content_length().unwrap_or(0);

        let mut file = create_file(dest).await?;
        let mut hasher = Sha256::new();
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| io_error(dest, &e))?;

            hasher.update(&chunk);
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| io_error(dest, &e))?;

        Ok(DownloadResult {
            path: dest.to_path_buf(),
            size: downloaded,
            checksum: hex::encode(hasher.finalize()),
            transfer: Transfer::Primary,
        })
    }

    /// Read the whole body into memory, then write it
    async fn download_buffered(
        &self,
        url: &str,
        dest: &Path,
    ) -> Result<DownloadResult, DownloadError> {
        let response = send(&self.fallback, url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        let mut file = create_file(dest).await?;
        file.write_all(&body).await.map_err(|e| io_error(dest, &e))?;
        file.flush().await.map_err(|e| io_error(dest, &e))?;

        Ok(DownloadResult {
            path: dest.to_path_buf(),
            size: body.len() as u64,
            checksum: compute_checksum(&body),
            transfer: Transfer::Fallback,
        })
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(client: &reqwest::Client, url: &str) -> Result<reqwest::Response, DownloadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::NetworkError {
            url: url.to_string(),
            error: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    Ok(response)
}

async fn create_file(dest: &Path) -> Result<File, DownloadError> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, &e))?;
    }

    File::create(dest).await.map_err(|e| io_error(dest, &e))
}

fn io_error(path: &Path, e: &std::io::Error) -> DownloadError {
    DownloadError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    }
}

/// Compute SHA256 checksum of data
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
