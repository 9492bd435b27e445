//! FILENAME: app/src/api_types.rs
// PURPOSE: Values returned by command handlers.
// CONTEXT: Structs use camelCase serialization so `show --json` output is
// directly consumable by scripts and web front ends.

use std::path::PathBuf;

use pivot_engine::PivotTable;
use serde::{Deserialize, Serialize};

/// The pivot as handed to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotViewResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// None when there are no tickets.
    pub totals_row: Option<Vec<String>>,
    pub record_count: usize,
}

impl PivotViewResponse {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_table(&self) -> PivotTable {
        PivotTable {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
            totals_row: self.totals_row.clone(),
        }
    }
}

impl From<PivotTable> for PivotViewResponse {
    fn from(table: PivotTable) -> Self {
        let record_count = table.record_count();
        PivotViewResponse {
            columns: table.columns,
            rows: table.rows,
            totals_row: table.totals_row,
            record_count,
        }
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub path: PathBuf,
    /// Lines written after the header (data rows plus the totals row).
    pub row_count: usize,
    pub column_count: usize,
}
