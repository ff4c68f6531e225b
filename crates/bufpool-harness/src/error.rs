//! Driver error type.

use thiserror::Error;

use bufpool_core::AllocError;

/// Errors surfaced by the demonstration drivers. Any failure aborts the
/// run; there are no retries.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
