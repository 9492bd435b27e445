//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (presentation adapter over the core crates).
// CONTEXT: Owns the application state and the command handlers; the CLI in
// `cli` is one front end over them.

use std::sync::Mutex;

use engine::ItemCatalog;
use persistence::TicketStore;

pub mod api_types;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use api_types::{ExportResult, PivotViewResponse};
pub use cli::run;
pub use commands::{
    add_ticket, apply_ticket_prefix, export_pivot_csv, get_pivot, list_item_types,
    reset_tickets, ADD_REBUILD_OP,
};
pub use config::AppConfig;
pub use error::{CommandError, ConfigError};
pub use logging::{init_log_file, init_logger, next_seq, write_log};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Everything a command needs. The store sits behind a mutex so mutations are
/// serialized and every rebuild reads a committed snapshot.
pub struct AppState {
    pub store: Mutex<TicketStore>,
    pub catalog: ItemCatalog,
}

impl AppState {
    pub fn new(store: TicketStore, catalog: ItemCatalog) -> Self {
        AppState {
            store: Mutex::new(store),
            catalog,
        }
    }
}

/// Opens the database named by `config` and builds the state around it.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, CommandError> {
    log_info!("SYS", "Creating AppState db={}", config.database_path.display());
    let store = TicketStore::open(&config.database_path).map_err(|source| {
        CommandError::Persistence {
            operation: "open_store",
            source,
        }
    })?;
    Ok(AppState::new(store, config.item_types.clone()))
}

/// State over an in-memory database; nothing outlives the process.
pub fn create_app_state_in_memory(catalog: ItemCatalog) -> Result<AppState, CommandError> {
    log_info!("SYS", "Creating in-memory AppState");
    let store = TicketStore::open_in_memory().map_err(|source| CommandError::Persistence {
        operation: "open_store",
        source,
    })?;
    Ok(AppState::new(store, catalog))
}
