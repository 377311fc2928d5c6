//! Pipeline configuration.
//!
//! Source locations and output paths are explicit values handed to the
//! orchestrator at invocation time, so tests can point a run at fixture
//! files instead of the production spreadsheet.

use std::path::PathBuf;

use crate::constants::{
    DATEN_SHEET_GID, DEFAULT_OUTPUT_DIR, DEFAULT_SHEET_ID, GAERTEN_SHEET_GID, GARDENS_JSON_FILE,
    LAST_UPDATED_FILE,
};

/// Location of one raw sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl SheetSource {
    /// Build the CSV export source for one tab of a Google spreadsheet
    pub fn sheets_export(sheet_id: &str, gid: &str) -> Self {
        SheetSource::Url(format!(
            "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&gid={gid}"
        ))
    }

    /// Interpret a CLI source argument: http(s) schemes are URLs, everything
    /// else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            SheetSource::Url(arg.to_string())
        } else {
            SheetSource::File(PathBuf::from(arg))
        }
    }

}

/// Full configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct Config {
    /// Source of the garden metadata sheet (GAERTEN)
    pub gaerten_source: SheetSource,

    /// Source of the date/occurrence sheet (DATEN)
    pub daten_source: SheetSource,

    /// Directory both output artifacts are written to
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gaerten_source: SheetSource::sheets_export(DEFAULT_SHEET_ID, GAERTEN_SHEET_GID),
            daten_source: SheetSource::sheets_export(DEFAULT_SHEET_ID, DATEN_SHEET_GID),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Configuration with a custom garden sheet source
    pub fn with_gaerten_source(mut self, source: SheetSource) -> Self {
        self.gaerten_source = source;
        self
    }

    /// Configuration with a custom date sheet source
    pub fn with_daten_source(mut self, source: SheetSource) -> Self {
        self.daten_source = source;
        self
    }

    /// Configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Path of the garden dataset artifact
    pub fn gardens_json_path(&self) -> PathBuf {
        self.output_dir.join(GARDENS_JSON_FILE)
    }

    /// Path of the last-updated marker artifact
    pub fn last_updated_path(&self) -> PathBuf {
        self.output_dir.join(LAST_UPDATED_FILE)
    }
}
