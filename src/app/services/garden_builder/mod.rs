//! Join engine: merges the two sheets into nested garden records
//!
//! The central business logic of the pipeline. Date rows are grouped by
//! garden identifier and attached to their garden's metadata row; every
//! recoverable problem along the way (coordinate fallback, empty required
//! fields, missing or invalid date rows) becomes a human-readable diagnostic
//! on the record instead of an error. The final schema gate is the only
//! point where a record can be dropped from the output entirely.

pub mod builder;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{BuildResult, RawDateRow, build_gardens};
pub use stats::BuildStats;
