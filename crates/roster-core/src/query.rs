//! Derived-view computation: search, division/status filters and sorting.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::date_or_epoch;
use crate::employee::Employee;
use crate::text_matcher::TextMatcher;

/// Sentinel filter value that disables a field filter.
pub const FILTER_ALL: &str = "all";

/// Exact-match filter on a single record field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter {
    /// No filtering.
    #[default]
    All,
    /// Keep records whose field equals the value exactly.
    Exact(String),
}

impl FieldFilter {
    /// Interpret a user-facing filter value. Empty strings and `all` disable the filter.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
            Self::All
        } else {
            Self::Exact(value.to_owned())
        }
    }

    /// Whether `value` passes this filter.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(FILTER_ALL),
            Self::Exact(value) => f.write_str(value),
        }
    }
}

/// Ordering applied to the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Ascending by name.
    #[default]
    Name,
    /// Ascending by division.
    Division,
    /// Ascending by position.
    Position,
    /// Newest hire first; records without a hire date sort last.
    HireDate,
}

/// Error returned when a sort key token is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0} (expected name, division, position or hireDate)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "name" => Ok(Self::Name),
            "division" => Ok(Self::Division),
            "position" => Ok(Self::Position),
            "hiredate" => Ok(Self::HireDate),
            _ => Err(UnknownSortKey(s.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Division => "division",
            Self::Position => "position",
            Self::HireDate => "hireDate",
        })
    }
}

impl SortKey {
    /// Compare two records under this key.
    #[must_use]
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Name => locale_compare(&a.name, &b.name),
            Self::Division => locale_compare(&a.division, &b.division),
            Self::Position => locale_compare(&a.position, &b.position),
            Self::HireDate => date_or_epoch(&b.hire_date).cmp(&date_or_epoch(&a.hire_date)),
        }
    }
}

/// User-editable query state that produces the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Free-text search over name, position, email and nik.
    pub search: String,
    /// Division filter.
    pub division: FieldFilter,
    /// Status filter.
    pub status: FieldFilter,
    /// Sort order.
    pub sort: SortKey,
}

impl ViewQuery {
    /// Whether a record passes every filter (search AND division AND status).
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_with(TextMatcher::new(&self.search).as_ref(), employee)
    }

    fn matches_with(&self, matcher: Option<&TextMatcher>, employee: &Employee) -> bool {
        matcher.is_none_or(|matcher| matcher.matches(employee))
            && self.division.matches(&employee.division)
            && self.status.matches(&employee.status)
    }

    /// True when any filter narrows the view.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.division != FieldFilter::All || self.status != FieldFilter::All
    }
}

/// Compute the filtered, sorted view over `records` without touching the input.
///
/// The sort is stable, so records that compare equal keep their store order.
#[must_use]
pub fn derive_view<'a>(records: &'a [Employee], query: &ViewQuery) -> Vec<&'a Employee> {
    let matcher = TextMatcher::new(&query.search);
    let mut view: Vec<&Employee> = records
        .iter()
        .filter(|employee| query.matches_with(matcher.as_ref(), employee))
        .collect();
    view.sort_by(|a, b| query.sort.compare(a, b));
    view
}

/// Locale-style string ordering: case-insensitive first, raw text as tie-breaker.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Sorted, de-duplicated, non-empty divisions present in `records`.
#[must_use]
pub fn division_options(records: &[Employee]) -> Vec<String> {
    records
        .iter()
        .map(|employee| employee.division.as_str())
        .filter(|division| !division.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, division: &str, status: &str, hire_date: &str) -> Employee {
        Employee {
            name: name.into(),
            division: division.into(),
            position: format!("{division} staff"),
            status: status.into(),
            hire_date: hire_date.into(),
            ..Employee::default()
        }
    }

    fn names(view: &[&Employee]) -> Vec<String> {
        view.iter().map(|e| e.name.clone()).collect()
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee("siti", "HR", "Tetap", "2024-01-10"),
            employee("Andi", "Engineering", "Kontrak", "2024-05-01"),
            employee("Maria", "Finance", "Tetap", ""),
            employee("budi", "Engineering", "Magang", "2023-11-20"),
        ]
    }

    #[test]
    fn field_filter_sentinels_disable_filtering() {
        assert_eq!(FieldFilter::parse(""), FieldFilter::All);
        assert_eq!(FieldFilter::parse("all"), FieldFilter::All);
        assert_eq!(FieldFilter::parse("ALL"), FieldFilter::All);
        assert_eq!(FieldFilter::parse("HR"), FieldFilter::Exact("HR".into()));
        assert!(!FieldFilter::parse("hr").matches("HR"));
    }

    #[test]
    fn sort_key_parses_known_tokens() {
        assert_eq!("hireDate".parse(), Ok(SortKey::HireDate));
        assert_eq!("hire-date".parse(), Ok(SortKey::HireDate));
        assert_eq!(" Division ".parse(), Ok(SortKey::Division));
        assert!("salary".parse::<SortKey>().is_err());
        assert_eq!(SortKey::HireDate.to_string(), "hireDate");
    }

    #[test]
    fn sorts_names_case_insensitively() {
        let records = sample();
        let view = derive_view(&records, &ViewQuery::default());
        assert_eq!(names(&view), vec!["Andi", "budi", "Maria", "siti"]);
    }

    #[test]
    fn hire_date_sorts_newest_first_with_missing_last() {
        let records = sample();
        let query = ViewQuery {
            sort: SortKey::HireDate,
            ..ViewQuery::default()
        };
        let view = derive_view(&records, &query);
        assert_eq!(names(&view), vec!["Andi", "siti", "budi", "Maria"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let records = sample();
        let query = ViewQuery {
            search: "a".into(),
            division: FieldFilter::parse("Engineering"),
            status: FieldFilter::parse("Kontrak"),
            sort: SortKey::Name,
        };
        let view = derive_view(&records, &query);
        assert_eq!(names(&view), vec!["Andi"]);
        assert!(view.iter().all(|e| query.matches(e)));
    }

    #[test]
    fn equal_keys_keep_store_order() {
        let records = sample();
        let query = ViewQuery {
            sort: SortKey::Division,
            ..ViewQuery::default()
        };
        let view = derive_view(&records, &query);
        assert_eq!(names(&view), vec!["Andi", "budi", "Maria", "siti"]);
    }

    #[test]
    fn does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = derive_view(
            &records,
            &ViewQuery {
                sort: SortKey::HireDate,
                ..ViewQuery::default()
            },
        );
        assert_eq!(records, before);
    }

    #[test]
    fn locale_compare_orders_case_variants_deterministically() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "A"), Ordering::Equal);
    }

    #[test]
    fn division_options_are_sorted_and_unique() {
        let mut records = sample();
        records.push(employee("x", "", "Tetap", ""));
        assert_eq!(division_options(&records), vec!["Engineering", "Finance", "HR"]);
    }

    #[test]
    fn view_membership_agrees_with_record_predicate() {
        let records = sample();
        let queries = [
            ViewQuery::default(),
            ViewQuery {
                search: "ENGINEERING".into(),
                ..ViewQuery::default()
            },
            ViewQuery {
                division: FieldFilter::parse("Engineering"),
                status: FieldFilter::parse("Magang"),
                ..ViewQuery::default()
            },
            ViewQuery {
                search: "a".into(),
                status: FieldFilter::parse("Tetap"),
                sort: SortKey::HireDate,
                ..ViewQuery::default()
            },
        ];
        for query in &queries {
            let view = derive_view(&records, query);
            let expected = records.iter().filter(|e| query.matches(e)).count();
            assert_eq!(view.len(), expected, "{query:?}");
            assert!(view.iter().all(|e| query.matches(e)), "{query:?}");
        }
    }
}
