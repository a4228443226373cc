//! Error taxonomy shared by the stores and the services

use thiserror::Error;

/// Result type for store and service operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store and service operations.
///
/// Lookups never produce `NotFound`; an unknown identifier is reported as
/// `None` by the `find_*` family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint is already held by another identifier.
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },
    /// A write or service operation targeted an unknown identifier.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    /// Input rejected by a domain constructor or a business rule.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        StoreError::DuplicateKey { key: key.into() }
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }
}
