//! Same-Container Reorder

use reorder::{reorder, reorder_destination_index, Axis, Edge};

use super::{renumber, MoveResult};
use crate::domain::Positioned;

/// Reorder one row within its container.
///
/// Resolves the drop to a destination index via the closest-edge hint,
/// removes the row from `source_index` and reinserts it there, then
/// renumbers the whole sequence. Returns `None` when the drop resolves to
/// the row's current slot or the indices do not address the sequence
/// (stale drag data).
pub fn reorder_within<T: Positioned>(
    items: &mut Vec<T>,
    source_index: usize,
    target_index: usize,
    closest_edge: Option<Edge>,
    axis: Axis,
    container_id: Option<&str>,
) -> Option<MoveResult> {
    if source_index >= items.len() || target_index >= items.len() {
        return None;
    }

    let finish_index = reorder_destination_index(source_index, target_index, closest_edge, axis);
    if finish_index == source_index {
        return None;
    }

    reorder(items, source_index, finish_index);
    let changes = renumber(items, container_id, None);
    Some(MoveResult { changes })
}
