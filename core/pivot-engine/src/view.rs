//! FILENAME: core/pivot-engine/src/view.rs
//! Pivot View - A flat header + rows grid built from a `PivotTable`.
//!
//! The grid is what gets written to disk and what the CLI prints: the header,
//! then every data row, then the totals row last.

use serde::{Deserialize, Serialize};

use crate::definition::PivotTable;

/// Column separator used by `render_text`.
const TEXT_COLUMN_GAP: &str = "  ";

/// Header plus body rows, every row as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PivotGrid {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Display width of each column, in chars.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Renders the grid as left-aligned plain text, one line per row, with a
    /// dashed rule under the header. Trailing spaces are trimmed.
    pub fn render_text(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let mut out = String::new();

        push_line(&mut out, &self.header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(TEXT_COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

impl PivotTable {
    /// Flattens the pivot for export: header, data rows, then the totals row.
    pub fn to_grid(&self) -> PivotGrid {
        let mut rows = self.rows.clone();
        if let Some(totals) = &self.totals_row {
            rows.push(totals.clone());
        }
        PivotGrid {
            header: self.columns.clone(),
            rows,
        }
    }
}
