//! FILENAME: app/src/commands.rs
// PURPOSE: Command handlers, one per user action.
// CONTEXT: Each handler takes the state plus its input and returns the freshly
// rebuilt pivot (or an export summary). A failed command never returns a
// view, so a caller cannot show a table that disagrees with the store.

use std::path::Path;
use std::sync::MutexGuard;

use engine::TicketForm;
use persistence::{ensure_csv_extension, export_pivot, TicketStore};
use pivot_engine::{build_pivot_from_entries, PivotTable};

use crate::api_types::{ExportResult, PivotViewResponse};
use crate::error::CommandError;
use crate::{log_enter, log_exit, log_info, log_warn, AppState};

// ============================================================================
// HELPERS
// ============================================================================

fn lock_store<'a>(
    state: &'a AppState,
    operation: &'static str,
) -> Result<MutexGuard<'a, TicketStore>, CommandError> {
    state
        .store
        .lock()
        .map_err(|_| CommandError::StatePoisoned { operation })
}

/// Rebuilds the pivot from everything currently stored.
fn rebuild(store: &TicketStore, operation: &'static str) -> Result<PivotTable, CommandError> {
    let entries = store
        .fetch_all()
        .map_err(|source| CommandError::Persistence { operation, source })?;
    Ok(build_pivot_from_entries(&entries))
}

/// Prepends `prefix` to ticket numbers typed as bare digits ("123" -> "SC-123").
pub fn apply_ticket_prefix(prefix: &str, ticket_number: &str) -> String {
    let trimmed = ticket_number.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("{}{}", prefix, trimmed)
    } else {
        ticket_number.to_string()
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Operation name reported when `add_ticket` stored its ticket but could not
/// rebuild the pivot afterwards.
pub const ADD_REBUILD_OP: &str = "add_ticket/rebuild";

/// Validates the form, stores the ticket and returns the rebuilt pivot.
pub fn add_ticket(state: &AppState, form: TicketForm) -> Result<PivotViewResponse, CommandError> {
    const OP: &str = "add_ticket";
    log_enter!("CMD", OP, "ticket={} type={}", form.ticket_number, form.item_type);

    let ticket = form.validate(&state.catalog).map_err(|source| {
        log_warn!("CMD", "{} rejected: {}", OP, source);
        CommandError::Validation { operation: OP, source }
    })?;

    let store = lock_store(state, OP)?;
    let id = store
        .insert(&ticket)
        .map_err(|source| CommandError::Persistence { operation: OP, source })?;
    // The ticket is committed from here on; a failed rebuild must not read
    // as a failed insert.
    let pivot = rebuild(&store, ADD_REBUILD_OP).map_err(|err| {
        log_warn!("CMD", "{} stored id={} but rebuild failed: {}", OP, id, err);
        err
    })?;

    log_exit!("CMD", OP, "id={} columns={}", id, pivot.item_columns().len());
    Ok(pivot.into())
}

/// Deletes every ticket and returns the (now empty) pivot.
pub fn reset_tickets(state: &AppState) -> Result<PivotViewResponse, CommandError> {
    const OP: &str = "reset_tickets";
    log_enter!("CMD", OP);

    let store = lock_store(state, OP)?;
    let removed = store
        .delete_all()
        .map_err(|source| CommandError::Persistence { operation: OP, source })?;
    let pivot = rebuild(&store, OP)?;

    log_info!("CMD", "{} removed {} tickets", OP, removed);
    Ok(pivot.into())
}

/// Returns the pivot for the current record set.
pub fn get_pivot(state: &AppState) -> Result<PivotViewResponse, CommandError> {
    const OP: &str = "get_pivot";
    let store = lock_store(state, OP)?;
    Ok(rebuild(&store, OP)?.into())
}

/// Writes the current pivot to `path` (".csv" appended when no extension).
pub fn export_pivot_csv(state: &AppState, path: &Path) -> Result<ExportResult, CommandError> {
    const OP: &str = "export_pivot_csv";
    log_enter!("CMD", OP, "path={}", path.display());

    let pivot = {
        let store = lock_store(state, OP)?;
        rebuild(&store, OP)?
    };

    let destination = ensure_csv_extension(path);
    export_pivot(&pivot, &destination)
        .map_err(|source| CommandError::Export { operation: OP, source })?;

    let result = ExportResult {
        row_count: pivot.rows.len() + usize::from(pivot.totals_row.is_some()),
        column_count: pivot.columns.len(),
        path: destination,
    };
    log_exit!("CMD", OP, "rows={} path={}", result.row_count, result.path.display());
    Ok(result)
}

/// Item types accepted by `add_ticket`, in catalog order.
pub fn list_item_types(state: &AppState) -> Vec<String> {
    state.catalog.to_vec()
}
