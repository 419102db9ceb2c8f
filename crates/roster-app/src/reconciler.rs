//! Bridges external JSON documents and the authoritative record collection.
//!
//! Import is a destructive replace: callers install the returned records with
//! [`EmployeeRepository::replace_all`](crate::EmployeeRepository::replace_all),
//! discarding everything that was stored before.

use std::collections::HashSet;
use std::fs;
use std::num::FpCategory;
use std::path::Path;

use roster_core::{Employee, EmployeeId};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RosterError, RosterResult};

/// Default file name for exports.
pub const EXPORT_FILE_NAME: &str = "employees.json";

/// Serialize every record as a pretty-printed JSON array.
///
/// # Errors
/// Returns [`RosterError::Serialize`] if serialization fails.
pub fn export_json(records: &[Employee]) -> RosterResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the export document to `path`. Returns the number of exported records.
///
/// # Errors
/// Returns an error when serialization or the file write fails.
pub fn export_to_file(records: &[Employee], path: &Path) -> RosterResult<usize> {
    let mut body = export_json(records)?;
    body.push('\n');
    fs::write(path, body).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "Exported employees");
    Ok(records.len())
}

/// Parse an import document from text.
///
/// # Errors
/// Returns [`RosterError::Format`] for invalid JSON or a non-array document.
pub fn import_str(text: &str) -> RosterResult<Vec<Employee>> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| RosterError::Format(format!("not valid JSON: {err}")))?;
    import_value(value)
}

/// Read and parse an import file.
///
/// # Errors
/// Returns [`RosterError::Io`] when the file cannot be read, otherwise as [`import_str`].
pub fn import_file(path: &Path) -> RosterResult<Vec<Employee>> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_str(&text)
}

/// Convert a parsed JSON document into records, backfilling missing ids.
///
/// Elements without a truthy `id` get a fresh one. A supplied id that repeats
/// an earlier element's id is also replaced, so the result never holds
/// duplicates.
///
/// # Errors
/// Returns [`RosterError::Format`] if the document is not an array of objects
/// or an element has fields of the wrong type. Nothing is returned partially.
pub fn import_value(value: Value) -> RosterResult<Vec<Employee>> {
    let Value::Array(items) = value else {
        return Err(RosterError::Format("top-level value must be an array".to_owned()));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(mut fields) = item else {
            return Err(RosterError::Format(format!("element {index} is not an object")));
        };
        let supplied = fields.remove("id").and_then(truthy_id);
        let mut employee: Employee = serde_json::from_value(Value::Object(fields))
            .map_err(|err| RosterError::Format(format!("element {index}: {err}")))?;

        employee.id = match supplied {
            Some(id) if seen.contains(&id) => {
                let fresh = EmployeeId::new();
                warn!(duplicate = %id, replacement = %fresh, index, "Duplicate id in import, assigning a new one");
                fresh
            }
            Some(id) => id,
            None => EmployeeId::new(),
        };
        seen.insert(employee.id.clone());
        records.push(employee);
    }
    debug!(count = records.len(), "Parsed import document");
    Ok(records)
}

fn truthy_id(value: Value) -> Option<EmployeeId> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(EmployeeId::from_raw(text)),
        Value::Number(number)
            if number
                .as_f64()
                .is_some_and(|n| matches!(n.classify(), FpCategory::Zero | FpCategory::Nan)) =>
        {
            None
        }
        other => Some(EmployeeId::from_raw(other.to_string())),
    }
}
