//! Garden Processor Library
//!
//! A Rust library for building the open-garden map dataset from raw
//! spreadsheet exports.
//!
//! This library provides tools for:
//! - Fetching the garden and date sheets from Google Sheets CSV exports or
//!   local files
//! - Decoding delimited text with position-independent column resolution
//! - Parsing error-prone raw fields (German `DD.MM.YYYY` dates, `HH:MM`
//!   times, decimal coordinates, status codes)
//! - Joining date rows onto garden records with per-record diagnostics
//! - Validating every record against the canonical schema before emission
//! - Writing the pretty-printed JSON dataset and last-updated marker

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod artifact_writer;
        pub mod fetcher;
        pub mod garden_builder;
        pub mod sheet_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinates, Garden, GardenDate, TerminTyp};
pub use config::{Config, SheetSource};

/// Result type alias for the garden processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for garden pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A raw sheet could not be fetched; fatal to the whole run
    #[error("failed to fetch {sheet} sheet: {message}")]
    SourceFetch { sheet: String, message: String },

    /// CSV decoding error
    #[error("CSV parsing error in {sheet} sheet: {message}")]
    CsvParsing {
        sheet: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// An output artifact could not be written; fatal to the whole run
    #[error("failed to write artifact {path}: {message}")]
    ArtifactWrite {
        path: String,
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source fetch error
    pub fn source_fetch(sheet: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceFetch {
            sheet: sheet.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        sheet: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            sheet: sheet.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an artifact write error
    pub fn artifact_write(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ArtifactWrite {
            path: path.into(),
            message: message.into(),
            source,
        }
    }
}
