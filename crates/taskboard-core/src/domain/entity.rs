//! Domain Layer - Core Entity Trait
//!
//! Basic contract for entities and the domain error type.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// None of these reach callers of the board's mutating operations; they are
/// produced by the persistence layer and logged there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The backing store rejected a read or write (quota, access denied)
    #[error("Storage error: {0}")]
    Storage(String),
    /// The task list could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// No backing store exists in this environment
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
