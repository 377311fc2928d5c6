//! Pipeline orchestration: fetch, parse, join, validate, write
//!
//! A strictly sequential batch run. Either source failing to fetch aborts
//! the whole run; records flagged with diagnostics are still written and do
//! not affect the exit code.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::shared::{RunStats, print_summary, setup_logging};
use crate::Result;
use crate::app::models::validate_garden_set;
use crate::app::services::artifact_writer::write_artifacts;
use crate::app::services::fetcher::fetch_sheet;
use crate::app::services::garden_builder::build_gardens;
use crate::app::services::sheet_parser::parse_sheet;
use crate::cli::args::Args;

/// Run the full pipeline end-to-end
pub async fn run_process(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting garden processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    debug!("Run configuration: {:?}", config);

    // Fetch both raw sources; either failure is fatal, no partial-source mode.
    let gaerten_text = fetch_sheet("GAERTEN", &config.gaerten_source).await?;
    let daten_text = fetch_sheet("DATEN", &config.daten_source).await?;

    let gaerten = parse_sheet("GAERTEN", &gaerten_text)?;
    let daten = parse_sheet("DATEN", &daten_text)?;
    info!(
        "Fetched {} garden rows and {} date rows",
        gaerten.sheet.records.len(),
        daten.sheet.records.len()
    );

    let result = build_gardens(&gaerten.sheet, &daten.sheet);
    info!(
        "Built {} gardens ({} dropped, {:.0}% with diagnostics)",
        result.stats.gardens_built,
        result.stats.gardens_dropped,
        result.stats.diagnostics_rate()
    );

    // Whole-set validation pass: every record already passed the gate
    // individually, so findings here are logged but never block the write.
    let violations = validate_garden_set(&result.gardens);
    if !violations.is_empty() {
        warn!(
            "Final validation pass flagged {} issue(s) on individually validated records",
            violations.len()
        );
        for (id, violation) in &violations {
            warn!("garden {}: {}", id, violation);
        }
    }

    write_artifacts(&config, &result.gardens).await?;

    let stats = RunStats::from_build(&result.stats, start_time.elapsed());
    if args.show_summary() {
        print_summary(&stats, &result.gardens);
    }

    Ok(stats)
}
