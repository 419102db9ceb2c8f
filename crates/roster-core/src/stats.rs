//! Summary statistics shown above the employee list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::dates::{days_until, parse_date};
use crate::employee::Employee;

/// Day windows used by the "ending soon" and "new hire" counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatWindows {
    /// Contracts ending within this many days are flagged.
    pub contract_warning_days: u32,
    /// Employees hired within this many days count as new hires.
    pub new_hire_days: u32,
}

impl Default for StatWindows {
    fn default() -> Self {
        Self {
            contract_warning_days: 60,
            new_hire_days: 30,
        }
    }
}

/// Aggregate counters over the whole record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of records.
    pub total: usize,
    /// Distinct non-empty divisions.
    pub active_divisions: usize,
    /// Contracts ending within the warning window.
    pub contracts_ending_soon: usize,
    /// Employees hired within the new-hire window.
    pub new_hires: usize,
}

impl DashboardStats {
    /// Compute every counter relative to `now`.
    #[must_use]
    pub fn compute(records: &[Employee], now: OffsetDateTime, windows: StatWindows) -> Self {
        let active_divisions = records
            .iter()
            .map(|e| e.division.as_str())
            .filter(|d| !d.is_empty())
            .collect::<BTreeSet<_>>()
            .len();
        let contracts_ending_soon = records
            .iter()
            .filter(|e| is_contract_ending_soon(e, now, windows.contract_warning_days))
            .count();
        let new_hires = records
            .iter()
            .filter(|e| is_new_hire(e, now, windows.new_hire_days))
            .count();

        Self {
            total: records.len(),
            active_divisions,
            contracts_ending_soon,
            new_hires,
        }
    }
}

/// Whether the record's contract ends between today and `warning_days` from now.
#[must_use]
pub fn is_contract_ending_soon(employee: &Employee, now: OffsetDateTime, warning_days: u32) -> bool {
    parse_date(&employee.contract_end).is_some_and(|end| {
        let remaining = days_until(end, now);
        (0..=i64::from(warning_days)).contains(&remaining)
    })
}

/// Whether the record was hired within the last `window_days` days.
#[must_use]
pub fn is_new_hire(employee: &Employee, now: OffsetDateTime, window_days: u32) -> bool {
    let threshold = now - Duration::days(i64::from(window_days));
    parse_date(&employee.hire_date).is_some_and(|hired| hired >= threshold)
}

/// Up to two upper-cased initials taken from whitespace or hyphen separated name parts.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::offset_days;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2025-06-15 9:30 UTC);

    fn with_dates(division: &str, hire: i64, contract: Option<i64>) -> Employee {
        Employee {
            division: division.into(),
            hire_date: offset_days(NOW, hire),
            contract_end: contract.map(|days| offset_days(NOW, days)).unwrap_or_default(),
            ..Employee::default()
        }
    }

    #[test]
    fn contract_45_days_out_is_flagged_but_90_is_not() {
        let soon = with_dates("HR", -100, Some(45));
        let later = with_dates("HR", -100, Some(90));
        assert!(is_contract_ending_soon(&soon, NOW, 60));
        assert!(!is_contract_ending_soon(&later, NOW, 60));
    }

    #[test]
    fn expired_and_missing_contracts_are_not_flagged() {
        assert!(!is_contract_ending_soon(&with_dates("HR", 0, Some(-3)), NOW, 60));
        assert!(!is_contract_ending_soon(&with_dates("HR", 0, None), NOW, 60));
        assert!(is_contract_ending_soon(&with_dates("HR", 0, Some(60)), NOW, 60));
    }

    #[test]
    fn computes_dashboard_counters() {
        let records = vec![
            with_dates("HR", -120, Some(730)),
            with_dates("Engineering", -20, Some(55)),
            with_dates("Finance", -400, Some(800)),
            with_dates("", -5, None),
        ];
        let stats = DashboardStats::compute(&records, NOW, StatWindows::default());
        assert_eq!(
            stats,
            DashboardStats {
                total: 4,
                active_divisions: 3,
                contracts_ending_soon: 1,
                new_hires: 2,
            }
        );
    }

    #[test]
    fn initials_use_first_two_parts() {
        assert_eq!(initials("Siti Rahma"), "SR");
        assert_eq!(initials("maria chen-wu lee"), "MC");
        assert_eq!(initials("jean-luc"), "JL");
        assert_eq!(initials("  "), "");
    }
}
