//! Authoritative employee collection with write-through persistence.

use roster_core::{Employee, EmployeeId};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::employee_store::EmployeeStore;
use crate::error::{RosterError, RosterResult};
use crate::notice::Notice;
use crate::seed::demo_employees;

/// Holds the full record set and persists it after every mutation.
///
/// When storage fails the repository keeps working on its in-memory copy and
/// stops touching storage for the rest of its lifetime.
pub struct EmployeeRepository<S> {
    records: Vec<Employee>,
    store: Option<S>,
    notices: Vec<Notice>,
}

impl<S: EmployeeStore> EmployeeRepository<S> {
    /// Load the collection from `store`.
    ///
    /// An absent collection is replaced by demo data when `seed_demo` is set.
    /// Unreadable storage falls back to memory-only operation.
    pub fn open(store: S, seed_demo: bool, now: OffsetDateTime) -> Self {
        match store.read_all() {
            Ok(Some(records)) => {
                debug!(count = records.len(), "Loaded employees from storage");
                Self {
                    records,
                    store: Some(store),
                    notices: Vec::new(),
                }
            }
            Ok(None) => {
                let mut repo = Self {
                    records: Vec::new(),
                    store: Some(store),
                    notices: Vec::new(),
                };
                if seed_demo {
                    info!("No stored employees, installing demo data");
                    repo.records = demo_employees(now);
                    repo.persist();
                }
                repo
            }
            Err(err) => {
                let err: anyhow::Error = err.into();
                warn!(error = %format!("{err:#}"), "Failed to load employees, continuing in memory");
                let records = if seed_demo { demo_employees(now) } else { Vec::new() };
                Self {
                    records,
                    store: None,
                    notices: vec![Notice::StorageUnavailable {
                        reason: format!("{err:#}"),
                    }],
                }
            }
        }
    }

    /// Whether mutations are still written to durable storage.
    pub const fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Every record in store order.
    pub fn list_all(&self) -> &[Employee] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|employee| &employee.id == id)
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.get(id).is_some()
    }

    /// Insert a record under a freshly generated id, newest first.
    pub fn add(&mut self, mut employee: Employee) -> EmployeeId {
        let mut id = EmployeeId::new();
        while self.contains(&id) {
            id = EmployeeId::new();
        }
        employee.id = id.clone();
        self.records.insert(0, employee);
        info!(%id, "Added employee");
        self.persist();
        id
    }

    /// Replace the record matching `id`, keeping `id` regardless of the payload.
    ///
    /// # Errors
    /// Returns [`RosterError::NotFound`] when no record has `id`; nothing changes.
    pub fn update(&mut self, id: &EmployeeId, mut employee: Employee) -> RosterResult<()> {
        let Some(slot) = self.records.iter_mut().find(|existing| &existing.id == id) else {
            warn!(%id, "Update for missing employee ignored");
            return Err(RosterError::NotFound(id.clone()));
        };
        employee.id = id.clone();
        *slot = employee;
        info!(%id, "Updated employee");
        self.persist();
        Ok(())
    }

    /// Delete the record matching `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|employee| &employee.id != id);
        let removed = self.records.len() != before;
        if removed {
            info!(%id, "Removed employee");
            self.persist();
        } else {
            debug!(%id, "Remove for missing employee is a no-op");
        }
        removed
    }

    /// Discard the whole collection and install `records` verbatim.
    pub fn replace_all(&mut self, records: Vec<Employee>) {
        info!(count = records.len(), "Replacing all employees");
        self.records = records;
        self.persist();
    }

    /// Drain notices raised by storage failures.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn persist(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.write_all(&self.records) {
            let err: anyhow::Error = err.into();
            let reason = format!("{err:#}");
            warn!(error = %reason, "Failed to persist employees, continuing in memory");
            self.store = None;
            self.notices.push(Notice::StorageUnavailable { reason });
        }
    }
}
