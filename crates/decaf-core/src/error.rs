//! Error types returned by [`normalize`](crate::normalize).

use std::path::PathBuf;

/// Why a normalizer run stopped early.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The document path does not exist. Nothing was read or written.
    #[error("File not found at {}", .path.display())]
    FileNotFound { path: PathBuf },
    /// Reading, parsing, walking or writing the document failed.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Failures after the document was found on disk.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Parse(#[source] serde_json::Error),
    #[error("{reason}")]
    Shape { reason: String },
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// The single line printed to the console for this failure.
    pub fn console_line(&self) -> String {
        match self {
            PatchError::FileNotFound { .. } => format!("Error: {self}"),
            PatchError::Processing(_) => format!("An error occurred: {self}"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PatchError::FileNotFound { .. })
    }
}

impl ProcessingError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        ProcessingError::Shape {
            reason: reason.into(),
        }
    }
}
