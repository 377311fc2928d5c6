//! Canonical data model for garden records and their opening dates.
//!
//! Single source of truth for valid shapes: every other component accepts or
//! rejects data through the validators defined here instead of trusting its
//! own parsing. Validators return structured [`Violation`] lists rather than
//! panicking or throwing, so callers can decide between dropping a record and
//! annotating it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BERLIN_CENTER_LAT, BERLIN_CENTER_LNG, GERMANY_LAT_MAX, GERMANY_LAT_MIN, GERMANY_LNG_MAX,
    GERMANY_LNG_MIN, YEAR_MAX, YEAR_MIN,
};

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("time pattern is valid"));

/// One failed schema constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field the constraint applies to (wire name)
    pub field: &'static str,
    /// What was violated
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate an `H:MM`/`HH:MM` time-of-day string.
///
/// Seconds and AM/PM markers are not accepted; hours above 23 and minutes
/// above 59 are rejected.
pub fn validate_time(value: &str) -> Result<(), Violation> {
    let Some(caps) = TIME_RE.captures(value) else {
        return Err(Violation::new(
            "time",
            format!("expected HH:MM (00:00 to 23:59), got \"{value}\""),
        ));
    };

    let hours: u32 = caps[1].parse().unwrap_or(u32::MAX);
    let minutes: u32 = caps[2].parse().unwrap_or(u32::MAX);

    if hours > 23 {
        return Err(Violation::new(
            "time",
            format!("hour out of range in \"{value}\""),
        ));
    }
    if minutes > 59 {
        return Err(Violation::new(
            "time",
            format!("minute out of range in \"{value}\""),
        ));
    }

    Ok(())
}

/// Kind of a date entry, from the DATEN sheet's STATUS column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminTyp {
    /// Regular opening date
    #[default]
    Regeltermin,
    /// Cancelled
    Abgesagt,
    /// Additional date outside the regular schedule
    Zusatztermin,
    /// Rescheduled
    Terminverschiebung,
}

impl TerminTyp {
    /// Exact, case-sensitive match against the closed set
    pub fn parse_exact(value: &str) -> Option<Self> {
        match value {
            "Regeltermin" => Some(Self::Regeltermin),
            "Abgesagt" => Some(Self::Abgesagt),
            "Zusatztermin" => Some(Self::Zusatztermin),
            "Terminverschiebung" => Some(Self::Terminverschiebung),
            _ => None,
        }
    }

    /// Lenient resolution used during ingestion: empty or unrecognized status
    /// strings silently resolve to [`TerminTyp::Regeltermin`]. The default
    /// kind carries no semantic risk, unlike a fabricated date or coordinate.
    pub fn from_status(value: &str) -> Self {
        Self::parse_exact(value.trim()).unwrap_or_default()
    }
}

/// Geographic position of a garden
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Fallback position for records whose source coordinates are unusable.
    /// Substituting it MUST be accompanied by a diagnostic on the record.
    pub const BERLIN_CENTER: Coordinates = Coordinates {
        lat: BERLIN_CENTER_LAT,
        lng: BERLIN_CENTER_LNG,
    };

    /// Check against the buffered Germany bounding box
    pub fn in_germany_bounds(&self) -> bool {
        self.lat >= GERMANY_LAT_MIN
            && self.lat <= GERMANY_LAT_MAX
            && self.lng >= GERMANY_LNG_MIN
            && self.lng <= GERMANY_LNG_MAX
    }

    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.lat < GERMANY_LAT_MIN || self.lat > GERMANY_LAT_MAX || self.lat.is_nan() {
            violations.push(Violation::new(
                "coordinates.lat",
                format!(
                    "must be within [{GERMANY_LAT_MIN}, {GERMANY_LAT_MAX}], got {}",
                    self.lat
                ),
            ));
        }
        if self.lng < GERMANY_LNG_MIN || self.lng > GERMANY_LNG_MAX || self.lng.is_nan() {
            violations.push(Violation::new(
                "coordinates.lng",
                format!(
                    "must be within [{GERMANY_LNG_MIN}, {GERMANY_LNG_MAX}], got {}",
                    self.lng
                ),
            ));
        }
        violations
    }
}

/// One opening-date occurrence of a garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenDate {
    pub day: u8,
    pub month: u8,
    /// Absent entries default to the current year at render time, not here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub termin_typ: TerminTyp,
}

impl GardenDate {
    /// Check field ranges and time shapes. Calendar correctness is out of
    /// scope: day 30 in February passes.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !(1..=31).contains(&self.day) {
            violations.push(Violation::new(
                "day",
                format!("must be between 1 and 31, got {}", self.day),
            ));
        }
        if !(1..=12).contains(&self.month) {
            violations.push(Violation::new(
                "month",
                format!("must be between 1 and 12, got {}", self.month),
            ));
        }
        if let Some(year) = self.year {
            if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
                violations.push(Violation::new(
                    "year",
                    format!("must be between {YEAR_MIN} and {YEAR_MAX}, got {year}"),
                ));
            }
        }
        if let Some(start_time) = &self.start_time {
            if let Err(violation) = validate_time(start_time) {
                violations.push(Violation::new("startTime", violation.message));
            }
        }
        if let Some(end_time) = &self.end_time {
            if let Err(violation) = validate_time(end_time) {
                violations.push(Violation::new("endTime", violation.message));
            }
        }

        violations
    }
}

/// One physical garden with its embedded opening dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: String,
    pub website_slug: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    /// Source order of the DATEN sheet, not chronological
    pub dates: Vec<GardenDate>,
    /// Human-readable diagnostics collected during ingestion; absent means
    /// the record ingested cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl Garden {
    /// Full schema check: required text fields, coordinate bounds, and every
    /// embedded date entry.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.id.trim().is_empty() {
            violations.push(Violation::new("id", "must not be empty"));
        }
        if self.website_slug.trim().is_empty() {
            violations.push(Violation::new("websiteSlug", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            violations.push(Violation::new("name", "must not be empty"));
        }
        if self.address.trim().is_empty() {
            violations.push(Violation::new("address", "must not be empty"));
        }

        violations.extend(self.coordinates.validate());

        for (index, date) in self.dates.iter().enumerate() {
            for violation in date.validate() {
                violations.push(Violation::new(
                    "dates",
                    format!("entry {}: {}", index + 1, violation),
                ));
            }
        }

        violations
    }

    /// Whether any diagnostics were recorded during ingestion
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

/// Validate a full record set, pairing each violation with the garden id
pub fn validate_garden_set(gardens: &[Garden]) -> Vec<(String, Violation)> {
    gardens
        .iter()
        .flat_map(|garden| {
            garden
                .validate()
                .into_iter()
                .map(|violation| (garden.id.clone(), violation))
        })
        .collect()
}
