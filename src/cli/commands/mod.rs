//! Command implementation for the garden processor CLI
//!
//! The pipeline has a single end-to-end command; `process` holds the
//! orchestration and `shared` the logging setup and operator-facing summary.

pub mod process;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Args;

/// Run the full pipeline for the given CLI arguments
pub async fn run(args: Args) -> Result<RunStats> {
    process::run_process(args).await
}
