//! Shared CLI components: logging setup and the run summary
//!
//! The summary is the operator's audit surface: it lists every record that
//! carries at least one diagnostic with the full diagnostic text, so a human
//! can correct the source rows upstream.

use colored::*;
use indicatif::HumanDuration;
use tracing::debug;

use crate::Result;
use crate::app::models::Garden;
use crate::app::services::garden_builder::BuildStats;
use crate::cli::args::Args;

/// Statistics of one full pipeline run, for reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Garden data rows seen in the source sheet
    pub garden_rows: usize,
    /// Date data rows seen in the source sheet
    pub date_rows: usize,
    /// Records written to the dataset artifact
    pub gardens_written: usize,
    /// Records dropped by the final schema gate
    pub gardens_dropped: usize,
    /// Valid date entries across all written records
    pub date_entries: usize,
    /// Written records carrying at least one diagnostic
    pub gardens_with_errors: usize,
    /// Date rows that matched a garden but failed validation
    pub invalid_date_rows: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunStats {
    /// Derive run statistics from the join engine's build statistics
    pub fn from_build(build: &BuildStats, processing_time: std::time::Duration) -> Self {
        Self {
            garden_rows: build.garden_rows,
            date_rows: build.date_rows,
            gardens_written: build.gardens_built,
            gardens_dropped: build.gardens_dropped,
            date_entries: build.date_entries,
            gardens_with_errors: build.gardens_with_errors,
            invalid_date_rows: build.invalid_date_rows,
            processing_time,
        }
    }
}

/// Set up structured logging based on CLI verbosity flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("garden_processor={log_level}")));

    // try_init: repeated initialization (tests, embedding) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the operator-facing end-of-run summary
pub fn print_summary(stats: &RunStats, gardens: &[Garden]) {
    println!();
    println!("{}", "Garden processing complete".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Gardens written:        {}", stats.gardens_written);
    println!("  Date entries:           {}", stats.date_entries);

    let with_errors = stats.gardens_with_errors.to_string();
    println!(
        "  Gardens with warnings:  {}",
        if stats.gardens_with_errors > 0 {
            with_errors.yellow()
        } else {
            with_errors.normal()
        }
    );

    let dropped = stats.gardens_dropped.to_string();
    println!(
        "  Dropped by validation:  {}",
        if stats.gardens_dropped > 0 {
            dropped.red()
        } else {
            dropped.normal()
        }
    );
    println!("  Finished in {}", HumanDuration(stats.processing_time));

    let flagged: Vec<&Garden> = gardens.iter().filter(|garden| garden.has_errors()).collect();
    if !flagged.is_empty() {
        println!();
        println!("{}", "Gardens with diagnostics:".yellow().bold());
        for garden in flagged {
            println!("  Garden {} ({}):", garden.id, garden.name);
            for error in garden.errors.iter().flatten() {
                println!("    - {error}");
            }
        }
    }
}
