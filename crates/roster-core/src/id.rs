use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};
use uuid::Uuid;

/// Opaque identifier of an employee record.
///
/// Freshly generated ids are UUID v7 strings, but imported documents may carry
/// any non-empty text, so the id is kept as a string rather than a parsed UUID.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    #[must_use]
    /// Generate a fresh employee identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an existing identifier verbatim.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is unset (an empty string).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_owned()))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_use_uuid_v7() {
        let id = EmployeeId::new();
        let parsed = Uuid::parse_str(id.as_str()).unwrap_or_else(|err| panic!("must parse: {err}"));
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EmployeeId::new();
        let b = EmployeeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn imported_ids_are_kept_verbatim() {
        let id = EmployeeId::from_raw("emp-42");
        assert_eq!(id.to_string(), "emp-42");
        let json = serde_json::to_string(&id).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, "\"emp-42\"");
    }

    #[test]
    fn default_id_is_blank() {
        assert!(EmployeeId::default().is_blank());
        assert!(!EmployeeId::new().is_blank());
    }
}
