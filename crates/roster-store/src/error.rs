//! Error types for roster storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing stored values.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage key cannot be mapped to a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Reading or writing a storage file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Atomically replacing a storage file failed.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: tempfile::PersistError,
    },

    /// Failed to acquire the in-memory lock.
    #[error("Storage lock poisoned")]
    LockError,
}
