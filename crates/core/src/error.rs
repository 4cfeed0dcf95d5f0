//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records). Persistence concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed date).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A numeric form field did not contain a number.
    #[error("invalid numeric input for `{field}`: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Update/delete referenced an id that is not in the collection.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: RecordId },

    /// The collection already handed out the largest representable id.
    #[error("no {entity} ids left to assign")]
    IdsExhausted { entity: &'static str },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(entity: &'static str, id: RecordId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn ids_exhausted(entity: &'static str) -> Self {
        Self::IdsExhausted { entity }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
