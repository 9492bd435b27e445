//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

/// Rejection of a ticket form before anything touches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Item type name is reserved: {0}")]
    ReservedItemType(String),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Quantity must be a positive integer, got '{0}'")]
    InvalidQuantity(String),
}
