//! Store error types.

use cull_core::RowId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown table: {table}")]
    UnknownTable { table: String },

    #[error("Unknown field: {field} on table {table}")]
    UnknownField { table: String, field: String },

    #[error("Row not found: {table}/{id}")]
    RowNotFound { table: String, id: RowId },

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unknown_table(table: impl Into<String>) -> Self {
        Self::UnknownTable {
            table: table.into(),
        }
    }

    pub fn unknown_field(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            table: table.into(),
            field: field.into(),
        }
    }

    pub fn row_not_found(table: impl Into<String>, id: RowId) -> Self {
        Self::RowNotFound {
            table: table.into(),
            id,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
