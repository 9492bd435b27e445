//! FILENAME: core/persistence/src/lib.rs
//! Ticket Persistence Module
//!
//! Stores ticket entries in SQLite and exports pivot tables as
//! semicolon-delimited CSV that spreadsheet tools open cleanly.

mod csv_reader;
mod csv_writer;
mod error;
mod store;

pub use csv_reader::load_table;
pub use csv_writer::{ensure_csv_extension, export_pivot, export_table};
pub use error::{ExportError, PersistenceError};
pub use store::TicketStore;

// ============================================================================
// CSV FORMAT
// ============================================================================

/// Field delimiter of exported files.
pub const CSV_DELIMITER: u8 = b';';

/// UTF-8 byte-order mark written at the start of every export so spreadsheet
/// tools detect the encoding of accented item names.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Extension appended to export paths that have none.
pub const CSV_EXTENSION: &str = "csv";
