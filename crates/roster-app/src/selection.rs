use roster_core::{Employee, EmployeeId};

/// Tracks the single record shown in the detail pane.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: Option<EmployeeId>,
}

impl SelectionTracker {
    /// Select `id`. Selecting an id that does not exist is allowed; it resolves to nothing.
    pub fn select(&mut self, id: EmployeeId) {
        self.selected = Some(id);
    }

    /// Forget the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Currently selected id, if any.
    pub const fn selected_id(&self) -> Option<&EmployeeId> {
        self.selected.as_ref()
    }

    /// React to a removal: clear the selection if it pointed at `id`.
    pub fn on_removed(&mut self, id: &EmployeeId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }

    /// Resolve the selection against the current records.
    pub fn resolve<'a>(&self, records: &'a [Employee]) -> Option<&'a Employee> {
        let id = self.selected.as_ref()?;
        records.iter().find(|employee| &employee.id == id)
    }
}
