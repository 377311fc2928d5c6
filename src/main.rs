use clap::Parser;
use garden_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create async runtime and run the pipeline
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command.
            // Records carrying diagnostics do not affect the exit code.
            process::exit(0);
        }
        Err(error) => {
            // Fatal fetch/write failure - print to stderr and exit non-zero
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
