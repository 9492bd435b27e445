//! FILENAME: core/pivot-engine/src/definition.rs
//! Pivot Table Definition - The computed table handed to callers.
//!
//! A `PivotTable` is recomputed from the full record set after every change.
//! It is a plain value: nothing caches it and nothing shares it.

use serde::{Deserialize, Serialize};

/// Header of the trailing column present on every non-empty pivot. Item
/// catalogs and form validation refuse it as an item type.
pub use engine::TOTALS_COLUMN;

/// Text placed in the totals column of the totals row.
pub const TOTAL_LABEL: &str = "Total";

/// One row of cells, aligned with `PivotTable::columns`.
pub type RowValues = Vec<String>;

/// Tickets grouped by item type, one column per type.
///
/// `columns` lists the item types in first-seen order followed by
/// [`TOTALS_COLUMN`]. Each entry of `rows` has exactly `columns.len()` cells.
/// An empty pivot has no columns, no rows and no totals row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotTable {
    pub columns: Vec<String>,
    pub rows: Vec<RowValues>,
    pub totals_row: Option<RowValues>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns without the trailing totals column.
    pub fn item_columns(&self) -> &[String] {
        match self.columns.split_last() {
            Some((last, rest)) if last == TOTALS_COLUMN => rest,
            _ => &self.columns,
        }
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Number of tickets recorded for `item_type`, read from the totals row.
    pub fn count_for(&self, item_type: &str) -> Option<usize> {
        let idx = self.item_columns().iter().position(|c| c == item_type)?;
        self.totals_row.as_ref()?.get(idx)?.parse().ok()
    }

    /// Cell text of data row `row` under `column`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Total number of tickets across all item columns.
    pub fn record_count(&self) -> usize {
        self.item_columns()
            .iter()
            .filter_map(|c| self.count_for(c))
            .sum()
    }
}
