//! Timestamp formats used on the wire.

use chrono::{DateTime, NaiveDateTime, Utc};

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// RFC 3339 in UTC with second precision and a literal `Z`: `2009-01-01T00:00:00Z`.
#[must_use]
pub fn rfc3339_seconds(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// IMF-fixdate as used by `Last-Modified`: `Thu, 01 Jan 2009 00:00:00 GMT`.
#[must_use]
pub fn http_date(ts: DateTime<Utc>) -> String {
    ts.format(HTTP_DATE_FORMAT).to_string()
}

/// Parses an IMF-fixdate (`If-Modified-Since`). Other HTTP date forms yield `None`.
#[must_use]
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), HTTP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
