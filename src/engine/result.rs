//! Engine Deltas

use serde::{Deserialize, Serialize};

/// One persisted-position update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionChange {
    pub item_id: String,
    /// Set when the row is scoped to a container (a card's column);
    /// carries the *new* container for cross-container moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub new_position: i32,
}

/// Minimal delta produced by one engine operation.
///
/// The updated orderings themselves live in the caller-owned sequences
/// the engine mutated in place; this is only what must be sent to the
/// persistence service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    pub changes: Vec<PositionChange>,
}

impl MoveResult {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Change recorded for `item_id`, if its position or container moved.
    pub fn change_for(&self, item_id: &str) -> Option<&PositionChange> {
        self.changes.iter().find(|c| c.item_id == item_id)
    }
}
