//! Domain Layer - Core Entity Traits
//!
//! Basic contracts for all persisted rows.
//! Rows are identified by backend-generated string ids and are
//! thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Row that lives in an ordered container.
///
/// Positions are dense and zero-based within the owning container; the
/// engine renumbers them after every mutation.
pub trait Positioned: Entity<Id = String> {
    fn position(&self) -> i32;

    fn set_position(&mut self, position: i32);

    /// Assign the backend-generated id (insert path).
    fn set_id(&mut self, id: String);

    /// Key of the owning container, when the row has one
    /// (a card's column, a column's board).
    fn container_key(&self) -> Option<&str> {
        None
    }

    /// Re-home the row into another container.
    fn set_container_key(&mut self, _key: &str) {}
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
