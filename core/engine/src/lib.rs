//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the ticket domain.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod catalog;
pub mod error;
pub mod ticket;

// Re-export commonly used types at the crate root
pub use catalog::{ItemCatalog, DEFAULT_ITEM_TYPES, TOTALS_COLUMN};
pub use error::ValidationError;
pub use ticket::{NewTicket, TicketEntry, TicketForm, DEFAULT_QUANTITY, DEFAULT_TICKET_PREFIX};
