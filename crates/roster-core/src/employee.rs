use serde::{Deserialize, Deserializer, Serialize};

use crate::id::EmployeeId;

/// One employee's full record.
///
/// Optional scalar attributes are plain strings where the empty string means
/// "unset"; this keeps the serialized shape identical for every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned by the store.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: EmployeeId,
    /// Organization-assigned employee number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub nik: String,
    /// Full name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Division the employee belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub division: String,
    /// Job title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    /// Employment status (e.g. `Tetap`, `Kontrak`, `Magang`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Photo URL or inline `data:` URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Date of birth (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub dob: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    /// Hire date (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub hire_date: String,
    /// Contract end date (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub contract_end: String,
    /// Hobbies in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hobbies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: Socials,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emergency: EmergencyContact,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Documents,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instagram: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facebook: String,
}

/// Emergency contact; each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

impl EmergencyContact {
    /// True when no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.relation.is_empty() && self.phone.is_empty()
    }
}

/// Document links attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cv: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contract: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub letter: String,
    /// Additional named documents in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub others: Vec<OtherDocument>,
}

/// A named extra document link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl OtherDocument {
    /// Build a document entry.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl Employee {
    /// The employee's search-relevant fields: name, position, email, nik.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 4] {
        [&self.name, &self.position, &self.email, &self.nik]
    }
}

/// Return `Some(value)` for non-empty strings.
#[must_use]
pub fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
