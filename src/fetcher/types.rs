//! Fetch outcomes and errors.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single asset could not be vendored.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP Error {}: {}", .0.as_u16(), .0.canonical_reason().unwrap_or("Unknown"))]
    Status(StatusCode),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Check if the remote reported the asset as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(status) if *status == StatusCode::NOT_FOUND)
    }
}

/// Result of vendoring one asset.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Remote content written verbatim.
    Downloaded { bytes: usize },
    /// Remote was missing; the stub module was written instead.
    Stubbed,
    /// Skipped after a warning; nothing was written.
    Failed(FetchError),
}

/// Per-asset outcomes of a fetch run, in manifest order.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchReport {
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Downloaded { .. }))
    }

    pub fn stubbed(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Stubbed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FetchOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
