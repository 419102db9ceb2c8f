//! Domain types and pure view logic for the employee roster.

/// Calendar helpers for record dates.
pub mod dates;
/// Employee record definitions.
pub mod employee;
/// Edit-form coercion.
pub mod form;
/// Identifier types.
pub mod id;
/// Filtering and sorting of the derived view.
pub mod query;
/// Dashboard counters and display helpers.
pub mod stats;
/// Case-insensitive search.
pub mod text_matcher;

pub use employee::{Documents, EmergencyContact, Employee, OtherDocument, Socials};
pub use form::{DraftError, EmployeeDraft, FieldInput};
pub use id::EmployeeId;
pub use query::{FieldFilter, SortKey, ViewQuery, derive_view, division_options};
pub use stats::{DashboardStats, StatWindows};
