//! Command-line argument definitions for the garden processor
//!
//! A single pipeline entry point: every flag is an override for testing or
//! one-off runs, and a bare invocation processes the production spreadsheet.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, SheetSource};
use crate::constants::{DATEN_SHEET_GID, DEFAULT_OUTPUT_DIR, DEFAULT_SHEET_ID, GAERTEN_SHEET_GID};
use crate::{Error, Result};

/// CLI arguments for the garden data pipeline
///
/// Fetches the garden and date sheets, validates and joins them, and writes
/// the JSON dataset consumed by the map UI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "garden-processor",
    version,
    about = "Fetch, validate and join open-garden sheet data into the map's JSON dataset",
    long_about = "Fetches the garden metadata and opening-date sheets, parses their raw fields \
                  (German dates, times, coordinates, status codes), joins them by garden id, \
                  annotates records with diagnostics, and writes the validated JSON dataset plus \
                  a last-updated marker. Records with diagnostics are still written; only fetch \
                  and write failures abort the run."
)]
pub struct Args {
    /// Garden metadata sheet source (URL or file path)
    ///
    /// Defaults to the CSV export of the production spreadsheet's GAERTEN tab.
    #[arg(
        long = "gaerten",
        value_name = "URL|PATH",
        help = "Garden metadata sheet source (URL or file path)"
    )]
    pub gaerten_source: Option<String>,

    /// Date/occurrence sheet source (URL or file path)
    ///
    /// Defaults to the CSV export of the production spreadsheet's DATEN tab.
    #[arg(
        long = "daten",
        value_name = "URL|PATH",
        help = "Date sheet source (URL or file path)"
    )]
    pub daten_source: Option<String>,

    /// Spreadsheet id used when building the default export URLs
    #[arg(
        long = "sheet-id",
        value_name = "ID",
        help = "Spreadsheet id for the default export URLs"
    )]
    pub sheet_id: Option<String>,

    /// Output directory for both JSON artifacts
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for the JSON artifacts"
    )]
    pub output_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also suppresses the end-of-run summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for (flag, value) in [
            ("--gaerten", &self.gaerten_source),
            ("--daten", &self.daten_source),
        ] {
            if let Some(arg) = value {
                if let SheetSource::File(path) = SheetSource::from_arg(arg) {
                    if !path.exists() {
                        return Err(Error::configuration(format!(
                            "{flag} file does not exist: {}",
                            path.display()
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the run configuration from defaults and overrides
    pub fn to_config(&self) -> Config {
        let sheet_id = self.sheet_id.as_deref().unwrap_or(DEFAULT_SHEET_ID);

        let gaerten_source = match &self.gaerten_source {
            Some(arg) => SheetSource::from_arg(arg),
            None => SheetSource::sheets_export(sheet_id, GAERTEN_SHEET_GID),
        };
        let daten_source = match &self.daten_source {
            Some(arg) => SheetSource::from_arg(arg),
            None => SheetSource::sheets_export(sheet_id, DATEN_SHEET_GID),
        };
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Config {
            gaerten_source,
            daten_source,
            output_dir,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the end-of-run summary should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            gaerten_source: None,
            daten_source: None,
            sheet_id: None,
            output_dir: None,
            verbose: 0,
            quiet: false,
        }
    }
}
