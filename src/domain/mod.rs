//! Domain Layer
//!
//! Contains the persisted row types and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for
//! serialization).

mod board;
mod entity;
mod grid_item;
mod list_item;

pub use board::{Board, Card, Column};
pub use entity::{DomainError, DomainResult, Entity, Positioned};
pub use grid_item::GridItem;
pub use list_item::ListItem;
