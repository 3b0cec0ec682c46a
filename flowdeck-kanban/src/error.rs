//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Card not found where the caller said it would be
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Index outside the valid range for a column's card sequence
    #[error("index {index} out of range for column '{column}' (length {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Malformed snapshot
    #[error("snapshot decode error: {message}")]
    Decode { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a snapshot decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether this error is a caller contract violation (bad id, bad index,
    /// empty required field) as opposed to a decode or IO fault.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            Self::ColumnNotFound { .. }
                | Self::CardNotFound { .. }
                | Self::IndexOutOfRange { .. }
                | Self::MissingField { .. }
                | Self::InvalidValue { .. }
        )
    }
}
