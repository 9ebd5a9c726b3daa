use thiserror::Error;

use crate::domain::item::models::ItemId;

/// Error type for ItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for ItemTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemTitleError {
    #[error("Item title is empty")]
    Empty,

    #[error("Item title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for ItemStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemStatusError {
    #[error("Unknown item status: {0}")]
    Unknown(String),
}

/// Top-level error type for all item-related operations
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error("Invalid item ID: {0}")]
    InvalidItemId(#[from] ItemIdError),

    #[error("Invalid item title: {0}")]
    InvalidTitle(#[from] ItemTitleError),

    #[error("Invalid item status: {0}")]
    InvalidStatus(#[from] ItemStatusError),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item {0} belongs to another user")]
    Forbidden(ItemId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
