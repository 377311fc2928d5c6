//! Build statistics for the join engine

/// Statistics of one join/aggregation run
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BuildStats {
    /// Garden data rows seen (header excluded)
    pub garden_rows: usize,

    /// Garden rows skipped because they were too short for the required columns
    pub garden_rows_skipped: usize,

    /// Date data rows seen (header excluded)
    pub date_rows: usize,

    /// Date rows skipped because they were too short for the required columns
    pub date_rows_skipped: usize,

    /// Garden records that passed the final schema gate
    pub gardens_built: usize,

    /// Garden records dropped by the final schema gate
    pub gardens_dropped: usize,

    /// Valid date entries attached across all emitted records
    pub date_entries: usize,

    /// Date rows that matched a garden but failed validation
    pub invalid_date_rows: usize,

    /// Emitted records carrying at least one diagnostic
    pub gardens_with_errors: usize,
}

impl BuildStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of emitted records carrying diagnostics, as a percentage
    pub fn diagnostics_rate(&self) -> f64 {
        if self.gardens_built == 0 {
            0.0
        } else {
            (self.gardens_with_errors as f64 / self.gardens_built as f64) * 100.0
        }
    }
}
