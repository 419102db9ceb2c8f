//! Logged-in dashboard state: records, query parameters and selection.

use std::path::Path;

use roster_core::{
    DashboardStats, Employee, EmployeeDraft, EmployeeId, FieldFilter, SortKey, StatWindows, ViewQuery,
    derive_view, division_options,
};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::auth::AdminCredentials;
use crate::employee_store::EmployeeStore;
use crate::error::{RosterError, RosterResult};
use crate::notice::Notice;
use crate::reconciler;
use crate::repository::EmployeeRepository;
use crate::selection::SelectionTracker;

/// Page controller combining the record store with user-editable view state.
pub struct Session<S> {
    repository: EmployeeRepository<S>,
    query: ViewQuery,
    selection: SelectionTracker,
    windows: StatWindows,
    notices: Vec<Notice>,
}

impl<S: EmployeeStore> Session<S> {
    /// Verify the login, then open the repository and start a session.
    ///
    /// `open_repository` runs only after the credentials match, so a rejected
    /// login never reads, seeds or writes storage.
    ///
    /// # Errors
    /// Returns [`RosterError::AuthenticationFailed`] for a wrong email/password pair.
    pub fn login(
        credentials: &AdminCredentials,
        email: &str,
        password: &str,
        open_repository: impl FnOnce() -> EmployeeRepository<S>,
        windows: StatWindows,
    ) -> RosterResult<Self> {
        credentials.verify(email, password).inspect_err(|_| {
            warn!("Rejected login attempt");
        })?;
        info!("Administrator logged in");
        Ok(Self {
            repository: open_repository(),
            query: ViewQuery::default(),
            selection: SelectionTracker::default(),
            windows,
            notices: vec![Notice::LoggedIn],
        })
    }

    /// Every record in store order.
    pub fn records(&self) -> &[Employee] {
        self.repository.list_all()
    }

    /// Current query parameters.
    pub const fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Filter by division; `all` clears the filter.
    pub fn set_division_filter(&mut self, division: &str) {
        self.query.division = FieldFilter::parse(division);
    }

    /// Filter by status; `all` clears the filter.
    pub fn set_status_filter(&mut self, status: &str) {
        self.query.status = FieldFilter::parse(status);
    }

    /// Choose the sort key.
    pub const fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// The filtered, sorted view for display.
    pub fn view(&self) -> Vec<&Employee> {
        derive_view(self.repository.list_all(), &self.query)
    }

    /// Division choices for the division filter.
    pub fn division_options(&self) -> Vec<String> {
        division_options(self.repository.list_all())
    }

    /// Dashboard counters relative to `now`.
    pub fn stats(&self, now: OffsetDateTime) -> DashboardStats {
        DashboardStats::compute(self.repository.list_all(), now, self.windows)
    }

    /// Windows used for the dashboard counters.
    pub const fn windows(&self) -> StatWindows {
        self.windows
    }

    /// Select a record for the detail pane.
    pub fn select(&mut self, id: EmployeeId) {
        self.selection.select(id);
    }

    /// The selected record, or `None` for the empty-state placeholder.
    pub fn selected(&self) -> Option<&Employee> {
        self.selection.resolve(self.repository.list_all())
    }

    /// Look up a record by id.
    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.repository.get(id)
    }

    /// Save a new record from a form and select it.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidDraft`] when required fields are missing.
    pub fn add(&mut self, draft: EmployeeDraft) -> RosterResult<EmployeeId> {
        let employee = draft.into_employee()?;
        let id = self.repository.add(employee);
        self.selection.select(id.clone());
        self.notices.push(Notice::Added(id.clone()));
        Ok(id)
    }

    /// Save an edited record.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidDraft`] for invalid forms and
    /// [`RosterError::NotFound`] when the record disappeared; state is unchanged in both cases.
    pub fn update(&mut self, id: &EmployeeId, draft: EmployeeDraft) -> RosterResult<()> {
        let employee = draft.into_employee()?;
        match self.repository.update(id, employee) {
            Ok(()) => {
                self.notices.push(Notice::Updated(id.clone()));
                Ok(())
            }
            Err(err @ RosterError::NotFound(_)) => {
                self.notices.push(Notice::UpdateIgnored(id.clone()));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete a record, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: &EmployeeId) -> bool {
        let removed = self.repository.remove(id);
        self.selection.on_removed(id);
        if removed {
            self.notices.push(Notice::Deleted(id.clone()));
        }
        removed
    }

    /// Serialize the whole collection for download.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn export_json(&mut self) -> RosterResult<String> {
        let body = reconciler::export_json(self.repository.list_all())?;
        self.notices.push(Notice::Exported {
            count: self.repository.list_all().len(),
        });
        Ok(body)
    }

    /// Write the export document to `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn export_to_file(&mut self, path: &Path) -> RosterResult<usize> {
        let count = reconciler::export_to_file(self.repository.list_all(), path)?;
        self.notices.push(Notice::Exported { count });
        Ok(count)
    }

    /// Replace the whole collection with an import document.
    ///
    /// This is destructive: records missing from the document are discarded.
    ///
    /// # Errors
    /// Returns [`RosterError::Format`] for invalid documents; state is unchanged.
    pub fn import_str(&mut self, text: &str) -> RosterResult<usize> {
        let parsed = reconciler::import_str(text);
        self.apply_import(parsed)
    }

    /// Replace the whole collection with the contents of an import file.
    ///
    /// # Errors
    /// Returns an error for unreadable files or invalid documents; state is unchanged.
    pub fn import_file(&mut self, path: &Path) -> RosterResult<usize> {
        let parsed = reconciler::import_file(path);
        self.apply_import(parsed)
    }

    fn apply_import(&mut self, parsed: RosterResult<Vec<Employee>>) -> RosterResult<usize> {
        match parsed {
            Ok(records) => {
                let count = records.len();
                self.repository.replace_all(records);
                self.selection.clear();
                self.notices.push(Notice::Imported { count });
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "Import rejected");
                self.notices.push(Notice::ImportFailed {
                    reason: err.describe_user_facing(),
                });
                Err(err)
            }
        }
    }

    /// Whether changes still reach durable storage.
    pub const fn is_persistent(&self) -> bool {
        self.repository.is_persistent()
    }

    /// Drain pending notifications; storage notices come first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        let mut notices = self.repository.take_notices();
        notices.append(&mut self.notices);
        notices
    }
}
