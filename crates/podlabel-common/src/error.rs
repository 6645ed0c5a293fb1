//! Unified error types for the podlabel workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PodLabelError {
    /// Volumes of one pod translate to different mount labels.
    #[error("conflicting SELinux labels: {first} and {conflicting}")]
    ConflictingLabels {
        /// First label seen.
        first: String,
        /// First label that disagreed with `first`.
        conflicting: String,
    },

    /// A label string does not have the `user:role:type:level` shape.
    #[error("invalid SELinux label: {label:?}")]
    InvalidLabel {
        /// The offending label.
        label: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PodLabelError>;
