//! Reorder/Move Engine
//!
//! Pure data transformations from drop outcomes to new orderings.
//! Every operation mutates the caller-owned sequences in place, restores
//! dense zero-based positions, and returns the minimal delta to persist.
//! `None` means the drop was a pure no-op and nothing may be persisted.

mod board;
mod grid;
mod list;
mod result;

pub use board::{move_card, reorder_columns, CardDropTarget};
pub use grid::swap_by_key;
pub use list::reorder_within;
pub use result::{MoveResult, PositionChange};

use crate::domain::Positioned;

/// Renumber `items` to positions `0..N-1`, collecting a change for every
/// row whose position moved. `force_id` is always included even when its
/// index is unchanged (a row whose container changed).
pub(crate) fn renumber<T: Positioned>(
    items: &mut [T],
    container_id: Option<&str>,
    force_id: Option<&str>,
) -> Vec<PositionChange> {
    let mut changes = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        let new_position = index as i32;
        let id = item.id();
        let moved = item.position() != new_position;
        item.set_position(new_position);
        if moved || force_id == Some(id.as_str()) {
            changes.push(PositionChange {
                item_id: id,
                container_id: container_id.map(str::to_string),
                new_position,
            });
        }
    }
    changes
}
