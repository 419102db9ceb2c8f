//! Application layer for the employee roster.
//!
//! This crate provides the record store, import/export reconciliation,
//! configuration, and the session controller shared by the command line shell.

pub mod auth;
pub mod config;
pub mod employee_store;
pub mod error;
pub mod notice;
pub mod photo;
pub mod reconciler;
pub mod repository;
pub mod seed;
pub mod selection;
pub mod session;

// Re-exports for convenience
pub use auth::AdminCredentials;
pub use config::{RosterConfig, StorageConfig};
pub use employee_store::{DEFAULT_STORAGE_KEY, EmployeeStore, KeyedStore};
pub use error::{RosterError, RosterResult};
pub use notice::Notice;
pub use photo::PhotoSource;
pub use reconciler::{EXPORT_FILE_NAME, export_json, import_str, import_value};
pub use repository::EmployeeRepository;
pub use selection::SelectionTracker;
pub use session::Session;
