//! Dates
//!
//! Publish dates arrive as free text from authored front matter. They are
//! parsed leniently and a value that cannot be read becomes "no date" rather
//! than an error, so one malformed document never takes a listing down.

use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};

/// Parse a publish date.
///
/// Accepts an RFC 3339 timestamp (`2024-01-15T09:30:00Z`), a civil date-time
/// (`2024-01-15T09:30:00`, read as UTC) or a plain date (`2024-01-15`, midnight
/// UTC). Anything else yields `None`.
pub fn parse_published(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = raw.parse::<DateTime>() {
        return datetime.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }

    raw.parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|z| z.timestamp())
}

/// Publish date, or `fallback` when the record has none.
#[must_use]
pub fn published_or(published_at: Option<Timestamp>, fallback: Timestamp) -> Timestamp {
    published_at.unwrap_or(fallback)
}

/// Long human-readable date, e.g. `January 15, 2024`.
#[must_use]
pub fn format_long(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::UTC)
        .strftime("%B %-d, %Y")
        .to_string()
}

/// Calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn format_ymd(timestamp: Timestamp) -> String {
    timestamp.to_zoned(TimeZone::UTC).date().to_string()
}
