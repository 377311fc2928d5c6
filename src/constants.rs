//! Shared constants for the garden pipeline.
//!
//! Geographic bounds, required sheet columns, the default spreadsheet
//! configuration, and output artifact names used across the crate.

// =============================================================================
// Geographic bounds
// =============================================================================

/// Minimum accepted latitude (Germany with margin)
pub const GERMANY_LAT_MIN: f64 = 46.0;

/// Maximum accepted latitude (Germany with margin)
pub const GERMANY_LAT_MAX: f64 = 56.0;

/// Minimum accepted longitude (Germany with margin)
pub const GERMANY_LNG_MIN: f64 = 5.0;

/// Maximum accepted longitude (Germany with margin)
pub const GERMANY_LNG_MAX: f64 = 16.0;

/// Fallback latitude for records with unusable coordinates (Berlin center)
pub const BERLIN_CENTER_LAT: f64 = 52.52;

/// Fallback longitude for records with unusable coordinates (Berlin center)
pub const BERLIN_CENTER_LNG: f64 = 13.405;

// =============================================================================
// Date entry bounds
// =============================================================================

/// Earliest accepted year for a date entry
pub const YEAR_MIN: u16 = 2020;

/// Latest accepted year for a date entry
pub const YEAR_MAX: u16 = 2030;

// =============================================================================
// Sheet columns
// =============================================================================

pub const COL_GARTEN_ID: &str = "GARTEN_ID";
pub const COL_NAME: &str = "NAME";
pub const COL_WEBSITE_SLUG: &str = "WEBSITE_SLUG";
pub const COL_LAT: &str = "LAT";
pub const COL_LNG: &str = "LNG";
pub const COL_ADRESSE: &str = "ADRESSE";
pub const COL_TAG: &str = "TAG";
pub const COL_VON: &str = "VON";
pub const COL_BIS: &str = "BIS";
pub const COL_NOTIZ: &str = "NOTIZ";
pub const COL_STATUS: &str = "STATUS";

/// Required columns of the garden metadata sheet (GAERTEN)
pub const GAERTEN_COLUMNS: &[&str] = &[
    COL_GARTEN_ID,
    COL_NAME,
    COL_WEBSITE_SLUG,
    COL_LAT,
    COL_LNG,
    COL_ADRESSE,
];

/// Required columns of the date/occurrence sheet (DATEN)
pub const DATEN_COLUMNS: &[&str] = &[
    COL_GARTEN_ID,
    COL_TAG,
    COL_VON,
    COL_BIS,
    COL_NOTIZ,
    COL_STATUS,
];

// =============================================================================
// Default sources
// =============================================================================

/// Spreadsheet id of the production deployment
pub const DEFAULT_SHEET_ID: &str = "1osuhw20aR0ZwlC-4MwKkO89vuxKqL-meSNXyRy5JHd4";

/// Tab id of the garden metadata sheet
pub const GAERTEN_SHEET_GID: &str = "0";

/// Tab id of the date/occurrence sheet
pub const DATEN_SHEET_GID: &str = "1889715507";

// =============================================================================
// Output artifacts
// =============================================================================

/// File name of the validated garden dataset
pub const GARDENS_JSON_FILE: &str = "gardens-and-dates.json";

/// File name of the last-updated marker
pub const LAST_UPDATED_FILE: &str = "last-updated.json";

/// Default output directory for both artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "data";
