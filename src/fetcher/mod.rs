//! Asset fetcher.
//!
//! Downloads each manifest entry in order, one request at a time, writing
//! the body verbatim under the fetch root. A failure on one entry never
//! stops the batch.

mod manifest;
mod types;

pub use manifest::{default_manifest, AssetDescriptor, STUB_MODULE};
pub use types::{FetchError, FetchOutcome, FetchReport};

use std::path::{Path, PathBuf};

use console::style;

use crate::config::FetchSettings;
use crate::http_client::HttpClient;

/// Sequential downloader for a manifest of [`AssetDescriptor`]s.
pub struct AssetFetcher {
    client: HttpClient,
    root: PathBuf,
}

impl AssetFetcher {
    /// Create a fetcher writing under `settings.root`.
    pub fn new(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: HttpClient::new(settings.timeout)?,
            root: settings.root.clone(),
        })
    }

    /// Fetch every asset in order and collect the outcomes.
    pub async fn fetch_all(&self, manifest: &[AssetDescriptor]) -> FetchReport {
        let mut report = FetchReport::default();
        for asset in manifest {
            report.outcomes.push(self.fetch_one(asset).await);
        }
        report
    }

    /// Fetch a single asset, substituting the stub module when an optional
    /// asset is missing upstream.
    pub async fn fetch_one(&self, asset: &AssetDescriptor) -> FetchOutcome {
        let dest = self.root.join(&asset.dest);

        if let Some(parent) = dest.parent() {
            if let Err(source) = tokio::fs::create_dir_all(parent).await {
                let err = FetchError::Io {
                    path: parent.to_path_buf(),
                    source,
                };
                warn_failed(asset, &err);
                return FetchOutcome::Failed(err);
            }
        }

        println!(
            "{} Downloading {} to {}",
            style("→").cyan(),
            asset.url,
            asset.dest.display()
        );

        match self.download(asset, &dest).await {
            Ok(bytes) => {
                tracing::info!("Wrote {} bytes to {}", bytes, dest.display());
                FetchOutcome::Downloaded { bytes }
            }
            Err(err) if err.is_not_found() && asset.optional => {
                warn_failed(asset, &err);
                match write_file(&dest, STUB_MODULE.as_bytes()).await {
                    Ok(()) => {
                        println!(
                            "  {} Created empty module at {}",
                            style("✓").green(),
                            asset.dest.display()
                        );
                        FetchOutcome::Stubbed
                    }
                    Err(err) => {
                        warn_failed(asset, &err);
                        FetchOutcome::Failed(err)
                    }
                }
            }
            Err(err) => {
                warn_failed(asset, &err);
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Download the asset body and write it out once it has fully arrived.
    async fn download(&self, asset: &AssetDescriptor, dest: &Path) -> Result<usize, FetchError> {
        let response = self.client.get(asset.url.as_str()).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        let content = response.bytes().await?;
        write_file(dest, &content).await?;
        Ok(content.len())
    }
}

async fn write_file(path: &Path, content: &[u8]) -> Result<(), FetchError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn warn_failed(asset: &AssetDescriptor, err: &FetchError) {
    tracing::debug!("Download of {} failed: {:?}", asset.url, err);
    println!(
        "  {} Warning: Failed to download {}: {}",
        style("!").yellow(),
        asset.url,
        err
    );
}
