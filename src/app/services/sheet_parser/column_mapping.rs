//! Column-name to index resolution
//!
//! The source spreadsheet may reorder or add columns at any time; downstream
//! code addresses cells exclusively by name through this mapping, never by
//! hard-coded position.

use std::collections::HashMap;

use csv::StringRecord;

/// Mapping from required column names to positional indices
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    name_to_index: HashMap<&'static str, usize>,
    required: &'static [&'static str],
}

impl ColumnMapping {
    /// Resolve the given required column names against a header row.
    ///
    /// A name absent from the headers simply gets no entry; callers must
    /// treat [`ColumnMapping::index_of`] returning `None` as "column not
    /// found" rather than crashing.
    pub fn resolve(headers: &StringRecord, required: &'static [&'static str]) -> Self {
        let mut name_to_index = HashMap::new();
        for name in required {
            if let Some(index) = headers.iter().position(|header| header.trim() == *name) {
                name_to_index.insert(*name, index);
            }
        }
        Self {
            name_to_index,
            required,
        }
    }

    /// Get the index for a given column name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Required names that were not present in the header row
    pub fn missing_columns(&self) -> Vec<&'static str> {
        self.required
            .iter()
            .filter(|name| !self.name_to_index.contains_key(*name))
            .copied()
            .collect()
    }

    /// Smallest row length that covers every resolved column; shorter rows
    /// cannot supply all required cells and are skipped by the join engine
    pub fn min_row_len(&self) -> usize {
        self.name_to_index
            .values()
            .max()
            .map(|index| index + 1)
            .unwrap_or(0)
    }

    /// Trimmed cell value for a named column, `None` when the column is
    /// unresolved or the row is too short
    pub fn cell<'a>(&self, record: &'a StringRecord, name: &str) -> Option<&'a str> {
        self.index_of(name)
            .and_then(|index| record.get(index))
            .map(str::trim)
    }
}
