//! Decoding statistics for sheet parsing

use super::parser::Sheet;

/// Decoding result with the sheet rows and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Decoded sheet with header row and data rows
    pub sheet: Sheet,

    /// Basic decoding statistics
    pub stats: ParseStats,
}

/// Simple decoding statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of rows decoded successfully
    pub rows_decoded: usize,

    /// Number of rows skipped due to decoding errors
    pub rows_skipped: usize,

    /// List of decoding errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate decoding success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_decoded as f64 / self.total_rows as f64) * 100.0
        }
    }
}
