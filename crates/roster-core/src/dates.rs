//! Calendar helpers for the `YYYY-MM-DD` date fields on employee records.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

const MILLIS_PER_DAY: i128 = 86_400_000;

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Parse a record date.
///
/// Date-only values are interpreted as UTC midnight. Full RFC 3339 timestamps
/// are accepted as well. Blank or malformed input yields `None`.
#[must_use]
pub fn parse_date(value: &str) -> Option<OffsetDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc());
    }
    OffsetDateTime::parse(trimmed, &Rfc3339).ok()
}

/// Parsed date, or the Unix epoch when the value is missing or invalid.
#[must_use]
pub fn date_or_epoch(value: &str) -> OffsetDateTime {
    parse_date(value).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Whole days from `now` until `end`, rounded up.
#[must_use]
pub fn days_until(end: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let millis = (end - now).whole_milliseconds();
    let mut days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days += 1;
    }
    i64::try_from(days).unwrap_or(if days > 0 { i64::MAX } else { i64::MIN })
}

/// Render `date` as `YYYY-MM-DD`, the storage format of record dates.
#[must_use]
pub fn to_date_string(date: OffsetDateTime) -> String {
    let date = date.date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Today's date shifted by `days`, as `YYYY-MM-DD`.
#[must_use]
pub fn offset_days(now: OffsetDateTime, days: i64) -> String {
    to_date_string(now + Duration::days(days))
}

/// Human-readable date such as `12 Apr 1993`; `-` for missing or invalid dates.
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || "-".to_owned(),
        |parsed| {
            let date = parsed.date();
            let month = MONTHS_ID[usize::from(u8::from(date.month())) - 1];
            format!("{:02} {month} {}", date.day(), date.year())
        },
    )
}
