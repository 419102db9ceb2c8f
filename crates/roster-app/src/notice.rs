use std::fmt;

use roster_core::EmployeeId;

/// Transient notification emitted by a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Login succeeded.
    LoggedIn,
    /// A record was created.
    Added(EmployeeId),
    /// A record was updated.
    Updated(EmployeeId),
    /// An update targeted a record that no longer exists.
    UpdateIgnored(EmployeeId),
    /// A record was deleted.
    Deleted(EmployeeId),
    /// The collection was exported.
    Exported {
        /// Number of exported records.
        count: usize,
    },
    /// The collection was replaced by an import.
    Imported {
        /// Number of imported records.
        count: usize,
    },
    /// An import was rejected; state is unchanged.
    ImportFailed {
        /// Why the import failed.
        reason: String,
    },
    /// Storage failed and the session continues in memory only.
    StorageUnavailable {
        /// Why storage is unavailable.
        reason: String,
    },
}

impl Notice {
    /// Short headline.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::LoggedIn => "Login successful",
            Self::Added(_) => "Employee added",
            Self::Updated(_) => "Employee updated",
            Self::UpdateIgnored(_) => "Update skipped",
            Self::Deleted(_) => "Employee deleted",
            Self::Exported { .. } => "Export complete",
            Self::Imported { .. } => "Import complete",
            Self::ImportFailed { .. } => "Import failed",
            Self::StorageUnavailable { .. } => "Storage unavailable",
        }
    }

    /// Whether the notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UpdateIgnored(_) | Self::ImportFailed { .. } | Self::StorageUnavailable { .. }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.title())?;
        match self {
            Self::LoggedIn => f.write_str("welcome to the HR dashboard"),
            Self::Added(id) => write!(f, "new employee {id} was added"),
            Self::Updated(id) => write!(f, "employee {id} was updated"),
            Self::UpdateIgnored(id) => write!(f, "employee {id} no longer exists"),
            Self::Deleted(id) => write!(f, "employee {id} was deleted"),
            Self::Exported { count } => write!(f, "{count} employees exported to JSON"),
            Self::Imported { count } => write!(f, "{count} employees imported"),
            Self::ImportFailed { reason } | Self::StorageUnavailable { reason } => f.write_str(reason),
        }
    }
}
