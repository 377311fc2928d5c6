//! Garden record construction from decoded sheet rows
//!
//! Two passes: the date sheet is scanned once to index its rows by garden
//! identifier, then each garden row is turned into a [`Garden`] with its
//! date entries embedded and its diagnostics collected. Emission order is
//! source row order for gardens and for the dates within each garden.

use std::collections::HashMap;

use csv::StringRecord;
use tracing::{debug, warn};

use super::stats::BuildStats;
use crate::app::models::{Coordinates, Garden, GardenDate, TerminTyp};
use crate::app::services::sheet_parser::field_parsers::{
    parse_coordinates, parse_date_components, parse_time,
};
use crate::app::services::sheet_parser::{ColumnMapping, Sheet};
use crate::constants::{
    COL_ADRESSE, COL_BIS, COL_GARTEN_ID, COL_LAT, COL_LNG, COL_NAME, COL_NOTIZ, COL_STATUS,
    COL_TAG, COL_VON, COL_WEBSITE_SLUG, DATEN_COLUMNS, GAERTEN_COLUMNS,
};

/// Join result: emitted records plus build statistics
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Schema-valid garden records in source row order
    pub gardens: Vec<Garden>,

    /// Build statistics
    pub stats: BuildStats,
}

/// Raw cells of one date row, extracted by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDateRow {
    pub garten_id: String,
    pub tag: String,
    pub von: String,
    pub bis: String,
    pub notiz: String,
    pub status: String,
}

impl RawDateRow {
    fn from_record(record: &StringRecord, mapping: &ColumnMapping) -> Self {
        let cell = |name| mapping.cell(record, name).unwrap_or("").to_string();
        Self {
            garten_id: cell(COL_GARTEN_ID),
            tag: cell(COL_TAG),
            von: cell(COL_VON),
            bis: cell(COL_BIS),
            notiz: cell(COL_NOTIZ),
            status: cell(COL_STATUS),
        }
    }

    /// Parse into a validated date entry.
    ///
    /// `None` when the date shape, a non-empty time, or a field range check
    /// fails; invalid rows are dropped from the record's date sequence, never
    /// emitted as placeholders. Empty times stay absent; an unrecognized
    /// status silently resolves to the default kind.
    pub fn parse(&self) -> Option<GardenDate> {
        let (day, month, year) = parse_date_components(&self.tag)?;

        let start_time = if self.von.is_empty() {
            None
        } else {
            Some(parse_time(&self.von)?.to_string())
        };
        let end_time = if self.bis.is_empty() {
            None
        } else {
            Some(parse_time(&self.bis)?.to_string())
        };

        let date = GardenDate {
            day,
            month,
            year: Some(year),
            start_time,
            end_time,
            note: (!self.notiz.is_empty()).then(|| self.notiz.clone()),
            termin_typ: TerminTyp::from_status(&self.status),
        };

        date.validate().is_empty().then_some(date)
    }

    /// Explain which sub-fields of an invalid row failed.
    ///
    /// `ordinal` is the 1-based position within the garden's invalid rows,
    /// matching the count-summary diagnostic that precedes these details.
    pub fn issues(&self, ordinal: usize) -> Vec<String> {
        let mut issues = Vec::new();

        if self.tag.is_empty() {
            issues.push(format!("date {ordinal}: TAG field is empty"));
        } else {
            match parse_date_components(&self.tag) {
                None => issues.push(format!(
                    "date {ordinal}: TAG format invalid (expected DD.MM.YYYY, got \"{}\")",
                    self.tag
                )),
                Some((day, month, year)) => {
                    let probe = GardenDate {
                        day,
                        month,
                        year: Some(year),
                        start_time: None,
                        end_time: None,
                        note: None,
                        termin_typ: TerminTyp::default(),
                    };
                    if !probe.validate().is_empty() {
                        issues.push(format!(
                            "date {ordinal}: TAG values out of range (got \"{}\")",
                            self.tag
                        ));
                    }
                }
            }
        }

        if !self.von.is_empty() && parse_time(&self.von).is_none() {
            issues.push(format!(
                "date {ordinal}: VON format invalid (expected HH:MM, got \"{}\")",
                self.von
            ));
        }
        if !self.bis.is_empty() && parse_time(&self.bis).is_none() {
            issues.push(format!(
                "date {ordinal}: BIS format invalid (expected HH:MM, got \"{}\")",
                self.bis
            ));
        }

        issues
    }
}

/// Merge the two decoded sheets into schema-valid garden records.
///
/// Missing required columns and short rows are logged and tolerated; they
/// surface as diagnostics or skipped rows, never as a crash.
pub fn build_gardens(gaerten: &Sheet, daten: &Sheet) -> BuildResult {
    let mut stats = BuildStats::new();

    let gaerten_mapping = ColumnMapping::resolve(&gaerten.headers, GAERTEN_COLUMNS);
    for name in gaerten_mapping.missing_columns() {
        warn!("{} sheet is missing required column {}", gaerten.name, name);
    }
    let daten_mapping = ColumnMapping::resolve(&daten.headers, DATEN_COLUMNS);
    for name in daten_mapping.missing_columns() {
        warn!("{} sheet is missing required column {}", daten.name, name);
    }

    // Pass 1: index date rows by garden id, preserving source order.
    let mut dates_by_garden: HashMap<String, Vec<RawDateRow>> = HashMap::new();
    for (index, record) in daten.records.iter().enumerate() {
        stats.date_rows += 1;
        if record.len() < daten_mapping.min_row_len() {
            stats.date_rows_skipped += 1;
            debug!(
                "{} sheet: skipping row {} with {} of {} required cells",
                daten.name,
                index + 1,
                record.len(),
                daten_mapping.min_row_len()
            );
            continue;
        }
        let row = RawDateRow::from_record(record, &daten_mapping);
        dates_by_garden
            .entry(row.garten_id.clone())
            .or_default()
            .push(row);
    }

    // Pass 2: build each garden record in source row order.
    let mut gardens = Vec::new();
    for (index, record) in gaerten.records.iter().enumerate() {
        stats.garden_rows += 1;
        if record.len() < gaerten_mapping.min_row_len() {
            stats.garden_rows_skipped += 1;
            debug!(
                "{} sheet: skipping row {} with {} of {} required cells",
                gaerten.name,
                index + 1,
                record.len(),
                gaerten_mapping.min_row_len()
            );
            continue;
        }

        match build_garden(record, &gaerten_mapping, &dates_by_garden, &mut stats) {
            Some(garden) => gardens.push(garden),
            None => stats.gardens_dropped += 1,
        }
    }

    stats.gardens_built = gardens.len();
    stats.gardens_with_errors = gardens.iter().filter(|garden| garden.has_errors()).count();
    stats.date_entries = gardens.iter().map(|garden| garden.dates.len()).sum();

    BuildResult { gardens, stats }
}

/// Build one garden record; `None` when it fails the final schema gate.
fn build_garden(
    record: &StringRecord,
    mapping: &ColumnMapping,
    dates_by_garden: &HashMap<String, Vec<RawDateRow>>,
    stats: &mut BuildStats,
) -> Option<Garden> {
    let cell = |name| mapping.cell(record, name).unwrap_or("");
    let id = cell(COL_GARTEN_ID);
    let name = cell(COL_NAME);
    let website_slug = cell(COL_WEBSITE_SLUG);
    let lat_raw = cell(COL_LAT);
    let lng_raw = cell(COL_LNG);
    let address = cell(COL_ADRESSE);

    let mut errors: Vec<String> = Vec::new();

    // Coordinate fallback is never silent: the substitution always records
    // which of the three failure modes applied.
    let coordinates = match parse_coordinates(lat_raw, lng_raw) {
        Some(coordinates) => coordinates,
        None => {
            errors.push(coordinate_failure(lat_raw, lng_raw).to_string());
            Coordinates::BERLIN_CENTER
        }
    };

    if id.is_empty() {
        errors.push("garden ID is empty or missing".to_string());
    }
    if website_slug.is_empty() {
        errors.push("website slug is empty or missing".to_string());
    }
    if name.is_empty() {
        errors.push("name is empty or missing".to_string());
    }
    if address.is_empty() {
        errors.push("address is empty or missing".to_string());
    }

    let date_rows = dates_by_garden
        .get(id)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut dates = Vec::new();
    let mut invalid_rows = Vec::new();
    for row in date_rows {
        match row.parse() {
            Some(date) => dates.push(date),
            None => invalid_rows.push(row),
        }
    }

    if date_rows.is_empty() {
        errors.push("no dates found in DATEN sheet".to_string());
    }

    if !invalid_rows.is_empty() {
        stats.invalid_date_rows += invalid_rows.len();
        errors.push(format!("{} invalid date entries found", invalid_rows.len()));
        for (index, row) in invalid_rows.iter().enumerate() {
            errors.extend(row.issues(index + 1));
        }
    }

    let garden = Garden {
        id: id.to_string(),
        website_slug: website_slug.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        coordinates,
        dates,
        errors: (!errors.is_empty()).then_some(errors),
    };

    // Final schema gate: the only point where a record is dropped entirely.
    let violations = garden.validate();
    if violations.is_empty() {
        Some(garden)
    } else {
        debug!(
            "dropping garden \"{}\": {}",
            garden.id,
            violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        );
        None
    }
}

/// One of three distinct messages explaining a rejected coordinate pair
fn coordinate_failure(lat: &str, lng: &str) -> &'static str {
    if lat.is_empty() || lng.is_empty() {
        "lat, lng fields are empty"
    } else if lat.parse::<f64>().is_err() || lng.parse::<f64>().is_err() {
        "lat, lng format invalid (expected decimal format like 53.4105003, 13.5593833)"
    } else {
        "lat, lng conversion failed or out of range, falling back to berlin"
    }
}
