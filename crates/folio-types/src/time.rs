//! Timestamp encodings shared by the database, the JSON API and the
//! reporting tool.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Fixed-width UTC text form used in SQLite, the same shape SQLAlchemy
/// writes. Lexical order equals chronological order.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Display form, e.g. `March 05, 2025 at 02:07 PM`.
pub const HUMAN_FORMAT: &str = "%B %d, %Y at %I:%M %p";

pub fn to_storage(ts: &DateTime<Utc>) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// Accepts the storage form, RFC 3339 and SQLite's own `datetime('now')`
/// output so rows written by other tools still parse.
pub fn from_storage(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, STORAGE_FORMAT) {
        return Some(ndt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ndt| ndt.and_utc())
}

pub fn iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn human(ts: &DateTime<Utc>) -> String {
    ts.format(HUMAN_FORMAT).to_string()
}
