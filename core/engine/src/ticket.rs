//! FILENAME: core/engine/src/ticket.rs
//! PURPOSE: Ticket records and the form they are created from.
//! CONTEXT: A `TicketForm` holds raw user input. Validation turns it into a
//! `NewTicket`; the store assigns an id and hands back `TicketEntry` values.
//! Entries are never edited after creation.

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemCatalog, TOTALS_COLUMN};
use crate::error::ValidationError;

/// Prefix the ticket number field starts with.
pub const DEFAULT_TICKET_PREFIX: &str = "SC-";

/// Quantity the form starts with.
pub const DEFAULT_QUANTITY: &str = "1";

/// A stored ticket entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketEntry {
    pub id: i64,
    pub ticket_number: String,
    pub item_type: String,
    pub quantity: u32,
}

impl TicketEntry {
    pub fn from_new(id: i64, ticket: NewTicket) -> Self {
        TicketEntry {
            id,
            ticket_number: ticket.ticket_number,
            item_type: ticket.item_type,
            quantity: ticket.quantity,
        }
    }

    /// The (ticket number, item type) pair the pivot groups on.
    pub fn pair(&self) -> (&str, &str) {
        (&self.ticket_number, &self.item_type)
    }
}

/// A validated entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub ticket_number: String,
    pub item_type: String,
    pub quantity: u32,
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketForm {
    pub ticket_number: String,
    pub item_type: String,
    pub quantity: String,
}

impl TicketForm {
    pub fn new(
        ticket_number: impl Into<String>,
        item_type: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        TicketForm {
            ticket_number: ticket_number.into(),
            item_type: item_type.into(),
            quantity: quantity.into(),
        }
    }

    /// Checks presence of every field, membership of the item type in the
    /// catalog and that quantity is an integer >= 1. The totals column name
    /// is refused even when asked for explicitly.
    pub fn validate(&self, catalog: &ItemCatalog) -> Result<NewTicket, ValidationError> {
        let ticket_number = self.ticket_number.trim();
        let item_type = self.item_type.trim();
        let quantity = self.quantity.trim();

        if ticket_number.is_empty() {
            return Err(ValidationError::MissingField("ticket_number"));
        }
        if item_type.is_empty() {
            return Err(ValidationError::MissingField("item_type"));
        }
        if quantity.is_empty() {
            return Err(ValidationError::MissingField("quantity"));
        }

        if item_type == TOTALS_COLUMN {
            return Err(ValidationError::ReservedItemType(item_type.to_string()));
        }
        if !catalog.contains(item_type) {
            return Err(ValidationError::UnknownItemType(item_type.to_string()));
        }

        let quantity = match quantity.parse::<u32>() {
            Ok(q) if q >= 1 => q,
            _ => return Err(ValidationError::InvalidQuantity(quantity.to_string())),
        };

        Ok(NewTicket {
            ticket_number: ticket_number.to_string(),
            item_type: item_type.to_string(),
            quantity,
        })
    }
}

impl Default for TicketForm {
    fn default() -> Self {
        TicketForm {
            ticket_number: DEFAULT_TICKET_PREFIX.to_string(),
            item_type: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
        }
    }
}
