//! Time related utils.

use chrono::NaiveTime;
use chrono::Utc;

use crate::error::Result;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// The current moment in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Date format: "20170425"
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Time format for ISO 8601 without separators: "20170425T143000Z"
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Time format for RFC 1123 HTTP dates: "Tue, 25 Apr 2017 14:30:00 GMT"
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse a date from its RFC 2822 (HTTP date) or RFC 3339 rendering.
pub fn parse_date(s: &str) -> Result<DateTime> {
    if let Ok(t) = chrono::DateTime::parse_from_rfc2822(s) {
        return Ok(t.with_timezone(&Utc));
    }

    let t = chrono::DateTime::parse_from_rfc3339(s)?;
    Ok(t.with_timezone(&Utc))
}

/// Truncate to the start of the UTC calendar day.
pub fn floor_to_day(t: DateTime) -> DateTime {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}
