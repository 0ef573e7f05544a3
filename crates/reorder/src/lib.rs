//! Reorder Utilities
//!
//! Index arithmetic for drag-and-drop reordering.
//! Follows the closest-edge conventions of pragmatic drag-and-drop
//! monitors: a drop target carries an optional hint saying whether the
//! dragged element should land before or after it.

use serde::{Deserialize, Serialize};

/// Side of the drop target the dragged element is closest to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Before,
    After,
}

/// Layout axis of the container being reordered.
///
/// Documentation only: the destination arithmetic is identical for
/// vertical lists and horizontal rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Destination index for a remove-then-reinsert reorder.
///
/// Returns the index at which the element starting at `start_index`
/// should be reinserted (after removal) so that it lands on the hinted
/// side of the target. Dropping an element on the side of a neighbour it
/// already occupies resolves back to `start_index`, letting callers treat
/// that case as a no-op.
pub fn reorder_destination_index(
    start_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
    _axis: Axis,
) -> usize {
    // targeting our own slot
    if start_index == index_of_target {
        return start_index;
    }

    let Some(edge) = closest_edge else {
        return index_of_target;
    };

    if start_index < index_of_target {
        // moving forward
        match edge {
            Edge::After => index_of_target,
            Edge::Before => index_of_target - 1,
        }
    } else {
        // moving backwards
        match edge {
            Edge::After => index_of_target + 1,
            Edge::Before => index_of_target,
        }
    }
}

/// Remove the element at `start_index` and reinsert it at `finish_index`.
/// Out-of-range indices leave the list untouched.
pub fn reorder<T>(list: &mut Vec<T>, start_index: usize, finish_index: usize) {
    if start_index == finish_index || start_index >= list.len() || finish_index >= list.len() {
        return;
    }
    let item = list.remove(start_index);
    list.insert(finish_index, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_edge_lands_on_target() {
        assert_eq!(reorder_destination_index(0, 2, None, Axis::Vertical), 2);
        assert_eq!(reorder_destination_index(3, 1, None, Axis::Vertical), 1);
    }

    #[test]
    fn test_same_index_is_identity() {
        assert_eq!(
            reorder_destination_index(1, 1, Some(Edge::After), Axis::Vertical),
            1
        );
    }

    #[test]
    fn test_moving_forward() {
        // [a, b, c]: dragging a past c
        assert_eq!(
            reorder_destination_index(0, 2, Some(Edge::After), Axis::Vertical),
            2
        );
        assert_eq!(
            reorder_destination_index(0, 2, Some(Edge::Before), Axis::Vertical),
            1
        );
    }

    #[test]
    fn test_moving_backwards() {
        // [a, b, c]: dragging c before a
        assert_eq!(
            reorder_destination_index(2, 0, Some(Edge::Before), Axis::Horizontal),
            0
        );
        assert_eq!(
            reorder_destination_index(2, 0, Some(Edge::After), Axis::Horizontal),
            1
        );
    }

    #[test]
    fn test_adjacent_same_side_resolves_to_start() {
        // element 0 dropped on the top half of element 1: already there
        assert_eq!(
            reorder_destination_index(0, 1, Some(Edge::Before), Axis::Vertical),
            0
        );
        // element 2 dropped on the bottom half of element 1: already there
        assert_eq!(
            reorder_destination_index(2, 1, Some(Edge::After), Axis::Vertical),
            2
        );
    }

    #[test]
    fn test_reorder_moves_element() {
        let mut list = vec!["a", "b", "c", "d"];
        reorder(&mut list, 0, 2);
        assert_eq!(list, vec!["b", "c", "a", "d"]);

        let mut list = vec!["a", "b", "c", "d"];
        reorder(&mut list, 3, 1);
        assert_eq!(list, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_ignores_out_of_range() {
        let mut list = vec!["a", "b"];
        reorder(&mut list, 0, 5);
        assert_eq!(list, vec!["a", "b"]);
        reorder(&mut list, 7, 0);
        assert_eq!(list, vec!["a", "b"]);
    }
}
