//! Error type shared by the roster application services.

use std::path::PathBuf;

use roster_core::{DraftError, EmployeeId};
use thiserror::Error;

/// Errors surfaced by repository, reconciler and session operations.
///
/// None of them is fatal: every failing operation leaves prior state intact.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The targeted record no longer exists.
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    /// An import payload is not valid JSON or not an array of objects.
    #[error("invalid import format: {0}")]
    Format(String),

    /// Durable storage could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A form failed validation.
    #[error(transparent)]
    InvalidDraft(#[from] DraftError),

    /// Login rejected.
    #[error("invalid email or password")]
    AuthenticationFailed,

    /// Reading or writing a user-selected file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serializing records failed.
    #[error("failed to serialize employees: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

impl RosterError {
    /// Convert the error into a message suitable for a transient notification.
    #[must_use]
    pub fn describe_user_facing(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Employee {id} no longer exists; nothing was changed."),
            Self::Format(_) => "The file format is invalid or an error occurred.".to_owned(),
            Self::StorageUnavailable(_) => {
                "Local storage is unavailable; changes are kept in memory for this session.".to_owned()
            }
            Self::InvalidDraft(DraftError::MissingField(field)) => format!("Please fill in {field}."),
            Self::AuthenticationFailed => {
                "Wrong email or password. Use the administrator account.".to_owned()
            }
            Self::Io { path, .. } => format!("Could not access {}.", path.display()),
            Self::Serialize(_) => "Employee data could not be serialized.".to_owned(),
        }
    }
}
