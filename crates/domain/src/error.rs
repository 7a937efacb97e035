//! Unified error types for the domain layer
//!
//! The filter engine and the timeline never fail; these errors come from
//! constructing validated values and loading the catalog.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Two entities share an identifier that must be unique
    #[error("Duplicate {entity_type} id: {id}")]
    Duplicate {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if english.is_empty() {
    ///     return Err(DomainError::validation("English name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate identifier error
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used by `FromStr` implementations for value objects that have no
    /// forward-compatible fallback variant (facet names, settings ids).
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
