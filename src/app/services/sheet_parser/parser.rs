//! Delimited-text decoding for raw sheet exports
//!
//! Turns the raw CSV text of one sheet into a header row plus data rows of
//! trimmed string cells. Quoted fields may contain the delimiter; quoting is
//! the only escape mechanism. The header row is consumed solely to build the
//! column mapping and is never emitted as data.

use csv::StringRecord;
use tracing::{debug, warn};

use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// One decoded sheet: header row plus data rows
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Sheet name used in logs and error messages (e.g. "GAERTEN")
    pub name: String,

    /// Header row, trimmed; consumed only for column resolution
    pub headers: StringRecord,

    /// Data rows in source order, cells trimmed
    pub records: Vec<StringRecord>,
}

/// Decode the raw delimited text of one sheet.
///
/// Rows that fail CSV decoding (broken quoting, invalid UTF-8) are skipped
/// and logged, never fatal. A missing or unreadable header row is fatal: no
/// column can be resolved without it.
pub fn parse_sheet(name: &str, text: &str) -> Result<ParseResult> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(name, "failed to read header row", Some(e)))?
        .clone();

    debug!("{} sheet headers: {:?}", name, headers);

    let mut stats = ParseStats::new();
    let mut records = Vec::new();

    for result in reader.records() {
        stats.total_rows += 1;
        match result {
            Ok(record) => {
                records.push(record);
                stats.rows_decoded += 1;
            }
            Err(e) => {
                stats.rows_skipped += 1;
                stats
                    .errors
                    .push(format!("row {}: {}", stats.total_rows, e));
                warn!("{} sheet: skipping undecodable row {}: {}", name, stats.total_rows, e);
            }
        }
    }

    debug!(
        "{} sheet: decoded {} of {} rows",
        name, stats.rows_decoded, stats.total_rows
    );

    Ok(ParseResult {
        sheet: Sheet {
            name: name.to_string(),
            headers,
            records,
        },
        stats,
    })
}
