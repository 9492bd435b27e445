//! FILENAME: core/pivot-engine/src/lib.rs
//! Ticket pivot subsystem.
//!
//! Turns the flat list of stored tickets into a column-per-item-type table.
//! It depends on `engine` only for the shared `TicketEntry` type.
//!
//! Layers:
//! - `definition`: The pivot table value (WHAT the pivot IS)
//! - `engine`: Grouping and row alignment (HOW we calculate)
//! - `view`: Header + rows grid for export and text rendering (WHAT we display)

pub mod definition;
pub mod engine;
pub mod view;

pub use definition::*;
pub use view::*;
pub use self::engine::{build_pivot, build_pivot_from_entries};
