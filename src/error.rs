//! Application error types.

use thiserror::Error;

/// Errors surfaced to the top level of the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to parse bundled data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] image::ImageError),
}
