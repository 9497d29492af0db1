use thiserror::Error;

use crate::id::RecordId;
use crate::record::EntityKind;

/// Errors produced by domain operations.
///
/// Every variant is recoverable at the request boundary. The `Display` form
/// is the human-readable detail shown to API clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The input could not be parsed into the expected shape.
    #[error("{0}")]
    MalformedInput(String),

    /// A required field is missing, a value is out of range, or a
    /// uniqueness rule was violated.
    #[error("{reason}")]
    ValidationFailed { field: String, reason: String },

    /// A foreign-key field names a record that does not exist.
    #[error("{kind} ID {id} not found")]
    ReferenceNotFound { kind: EntityKind, id: RecordId },

    /// A direct lookup by identifier missed.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: RecordId },

    /// A purchase asked for more units than are in stock.
    #[error("Available stock: {available}, requested: {requested}")]
    InsufficientStock { available: u32, requested: u32 },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: &RecordId) -> Self {
        Self::NotFound {
            kind,
            id: id.clone(),
        }
    }

    pub fn missing_reference(kind: EntityKind, id: &RecordId) -> Self {
        Self::ReferenceNotFound {
            kind,
            id: id.clone(),
        }
    }
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
