//! Pure parsers for individual raw field values
//!
//! Each function converts one raw string field into a typed value or a
//! "no match" sentinel, independently of row and column context. Parsers are
//! strict: anything that does not match the expected shape is rejected
//! outright rather than guessed at. The lenient exception is the entry-kind
//! resolution in [`TerminTyp::from_status`](crate::app::models::TerminTyp::from_status).

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Coordinates, validate_time};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").expect("date pattern is valid"));

/// Split a `DD.MM.YYYY` date string into numeric day/month/year components.
///
/// Only the lexical shape is checked: 1-2 digit day and month, 4-digit year,
/// dot separators. `30.2.2025` passes here; range validation is the schema's
/// job. Every other shape returns `None`, never a partial parse.
pub fn parse_date_components(value: &str) -> Option<(u8, u8, u16)> {
    let caps = DATE_RE.captures(value.trim())?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    Some((day, month, year))
}

/// Validate an `H:MM`/`HH:MM` time string and return it trimmed.
///
/// Rejects hours above 23, minutes above 59, seconds, and AM/PM markers.
pub fn parse_time(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    validate_time(trimmed).ok()?;
    Some(trimmed)
}

/// Parse a latitude/longitude string pair in decimal format.
///
/// Returns `None` when either field fails to parse as a number or the pair
/// falls outside the buffered Germany bounding box. Callers are responsible
/// for fallback substitution and diagnostic annotation; no default is ever
/// fabricated here.
pub fn parse_coordinates(lat: &str, lng: &str) -> Option<Coordinates> {
    let lat = lat.trim();
    let lng = lng.trim();
    if lat.is_empty() || lng.is_empty() {
        return None;
    }

    let lat: f64 = lat.parse().ok()?;
    let lng: f64 = lng.parse().ok()?;

    let coordinates = Coordinates { lat, lng };
    coordinates.in_germany_bounds().then_some(coordinates)
}
