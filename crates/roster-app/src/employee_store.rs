//! Persistence port for the record store.

use anyhow::{Context, Error};
use roster_core::Employee;
use roster_store::Storage;

/// Default storage key for the employee collection.
pub const DEFAULT_STORAGE_KEY: &str = "hr_employees_v1";

/// Minimal storage abstraction required by [`EmployeeRepository`](crate::EmployeeRepository).
pub trait EmployeeStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Load the whole record collection, or `None` if nothing was ever saved.
    ///
    /// # Errors
    /// Returns a store-specific error when the collection cannot be read.
    fn read_all(&self) -> Result<Option<Vec<Employee>>, Self::Error>;

    /// Replace the whole stored collection.
    ///
    /// # Errors
    /// Returns a store-specific error when persisting fails.
    fn write_all(&self, records: &[Employee]) -> Result<(), Self::Error>;
}

/// Stores the record collection as one JSON array under a single storage key.
#[derive(Debug)]
pub struct KeyedStore<B> {
    backend: B,
    key: String,
}

impl<B> KeyedStore<B> {
    /// Bind `backend` to `key`.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage key holding the collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing storage.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Storage> EmployeeStore for KeyedStore<B> {
    type Error = Error;

    fn read_all(&self) -> Result<Option<Vec<Employee>>, Self::Error> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let records = serde_json::from_str(&raw)
            .with_context(|| format!("Stored value under {} is not an employee array", self.key))?;
        Ok(Some(records))
    }

    fn write_all(&self, records: &[Employee]) -> Result<(), Self::Error> {
        let body = serde_json::to_string(records).context("Failed to serialize employees")?;
        self.backend
            .set(&self.key, &body)
            .with_context(|| format!("Failed to write storage key {}", self.key))?;
        Ok(())
    }
}
