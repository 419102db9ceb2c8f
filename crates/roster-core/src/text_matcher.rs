use crate::employee::Employee;

/// Case-insensitive substring matcher for employee search fields.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for empty inputs.
    ///
    /// The query is not trimmed: a query of spaces only matches fields that
    /// contain those spaces.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Determine whether name, position, email or nik contains the query.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        employee
            .search_fields()
            .iter()
            .any(|field| self.matches_field(field))
    }

    fn matches_field(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(query: &str) -> TextMatcher {
        TextMatcher::new(query).unwrap_or_else(|| panic!("matcher must exist for queries with content"))
    }

    #[test]
    fn matcher_skips_empty_queries() {
        assert!(TextMatcher::new("").is_none());
        assert!(TextMatcher::new(" ").is_some());
    }

    #[test]
    fn matcher_finds_text_across_fields() {
        let employee = Employee {
            name: "Siti Rahma".into(),
            position: "HR Generalist".into(),
            email: "siti.rahma@contoh.co".into(),
            nik: "EMP-001".into(),
            address: "Jakarta".into(),
            ..Employee::default()
        };

        assert!(matcher("rahma").matches(&employee));
        assert!(matcher("generalist").matches(&employee));
        assert!(matcher("CONTOH.CO").matches(&employee));
        assert!(matcher("emp-001").matches(&employee));
        assert!(!matcher("jakarta").matches(&employee));
    }

    #[test]
    fn matcher_lowercases_non_ascii_text() {
        let employee = Employee {
            name: "ÇAĞLA Öz".into(),
            ..Employee::default()
        };
        assert!(matcher("çağla").matches(&employee));
    }
}
