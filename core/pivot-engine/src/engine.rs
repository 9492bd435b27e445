//! FILENAME: core/pivot-engine/src/engine.rs
//! Pivot Engine - Groups ticket numbers by item type and aligns the groups.
//!
//! Algorithm:
//! 1. Group ticket numbers by item type, keeping input order inside each group
//! 2. Order columns by the first time each item type is seen, then add "Totals"
//! 3. Emit max(group size) data rows, padding short columns with ""
//! 4. Emit the totals row with each group's size and the "Total" label

use rustc_hash::FxHashMap;

use engine::TicketEntry;

use crate::definition::{PivotTable, RowValues, TOTALS_COLUMN, TOTAL_LABEL};

// ============================================================================
// PIVOT CALCULATOR
// ============================================================================

/// Accumulates (ticket, item type) pairs in a single pass.
///
/// `groups` maps a discovered item type to the position of its group in
/// `columns`; the key set is not known ahead of time.
#[derive(Debug, Default)]
struct PivotCalculator {
    /// Item types in first-seen order.
    columns: Vec<String>,

    /// Ticket numbers per column, same indexing as `columns`.
    tickets: Vec<Vec<String>>,

    /// Item type -> index into `columns`.
    groups: FxHashMap<String, usize>,
}

impl PivotCalculator {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, ticket_number: &str, item_type: &str) {
        let idx = match self.groups.get(item_type) {
            Some(&idx) => idx,
            None => {
                let idx = self.columns.len();
                self.columns.push(item_type.to_string());
                self.tickets.push(Vec::new());
                self.groups.insert(item_type.to_string(), idx);
                idx
            }
        };
        self.tickets[idx].push(ticket_number.to_string());
    }

    fn row_count(&self) -> usize {
        self.tickets.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn calculate(self) -> PivotTable {
        if self.columns.is_empty() {
            return PivotTable::default();
        }

        let row_count = self.row_count();
        let width = self.columns.len() + 1;

        let mut rows: Vec<RowValues> = Vec::with_capacity(row_count);
        for i in 0..row_count {
            let mut row = Vec::with_capacity(width);
            for group in &self.tickets {
                row.push(group.get(i).cloned().unwrap_or_default());
            }
            row.push(String::new());
            rows.push(row);
        }

        let mut totals_row: RowValues = self
            .tickets
            .iter()
            .map(|group| group.len().to_string())
            .collect();
        totals_row.push(TOTAL_LABEL.to_string());

        let mut columns = self.columns;
        columns.push(TOTALS_COLUMN.to_string());

        PivotTable {
            columns,
            rows,
            totals_row: Some(totals_row),
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Builds the pivot for a sequence of (ticket number, item type) pairs.
///
/// Item types are expected to have passed `TicketForm::validate`, which
/// never yields [`TOTALS_COLUMN`]; that name would otherwise appear twice.
pub fn build_pivot<I, T, S>(entries: I) -> PivotTable
where
    I: IntoIterator<Item = (T, S)>,
    T: AsRef<str>,
    S: AsRef<str>,
{
    let mut calculator = PivotCalculator::new();
    for (ticket_number, item_type) in entries {
        calculator.add(ticket_number.as_ref(), item_type.as_ref());
    }
    calculator.calculate()
}

/// Builds the pivot straight from stored entries. Quantity is not aggregated;
/// each entry counts once.
pub fn build_pivot_from_entries(entries: &[TicketEntry]) -> PivotTable {
    build_pivot(entries.iter().map(TicketEntry::pair))
}

// ============================================================================
// TESTS
// ============================================================================
