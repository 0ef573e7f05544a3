//! Grid Swap
//!
//! The grid exchanges slots instead of remove-and-reinsert: the two
//! tiles trade places and every other tile keeps its relative order.

use super::{renumber, MoveResult};
use crate::domain::Positioned;

/// Exchange the slots of two rows identified by a content key.
///
/// `key` projects the attribute the drag payloads carry (the grid uses
/// the tile's `src`, not its id). Self-drops and keys that do not resolve
/// are no-ops.
pub fn swap_by_key<T, F>(
    items: &mut [T],
    key: F,
    source_key: &str,
    target_key: &str,
) -> Option<MoveResult>
where
    T: Positioned,
    F: Fn(&T) -> &str,
{
    if source_key == target_key {
        return None;
    }
    let source_index = items.iter().position(|item| key(item) == source_key)?;
    let target_index = items.iter().position(|item| key(item) == target_key)?;

    items.swap(source_index, target_index);
    let changes = renumber(items, None, None);
    Some(MoveResult { changes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridItem;

    fn make_grid(srcs: &[&str]) -> Vec<GridItem> {
        srcs.iter()
            .enumerate()
            .map(|(index, src)| GridItem {
                id: format!("g{}", index),
                ..GridItem::new(*src, index as i32)
            })
            .collect()
    }

    fn srcs(items: &[GridItem]) -> Vec<&str> {
        items.iter().map(|i| i.src.as_str()).collect()
    }

    #[test]
    fn test_swap_exchanges_only_the_pair() {
        let mut items = make_grid(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);

        let result =
            swap_by_key(&mut items, |i| &i.src, "a.jpg", "c.jpg").expect("should swap");

        assert_eq!(srcs(&items), vec!["c.jpg", "b.jpg", "a.jpg", "d.jpg"]);
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.position, index as i32);
        }
        assert_eq!(result.changes.len(), 2);
        assert!(result.change_for("g1").is_none());
        assert!(result.change_for("g3").is_none());
    }

    #[test]
    fn test_swap_twice_is_involution() {
        let mut items = make_grid(&["a.jpg", "b.jpg", "c.jpg"]);
        let before = items.clone();

        swap_by_key(&mut items, |i| &i.src, "b.jpg", "c.jpg").expect("first swap");
        swap_by_key(&mut items, |i| &i.src, "b.jpg", "c.jpg").expect("second swap");

        assert_eq!(items, before);
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut items = make_grid(&["a.jpg", "b.jpg"]);
        let before = items.clone();

        assert!(swap_by_key(&mut items, |i| &i.src, "a.jpg", "a.jpg").is_none());
        assert_eq!(items, before);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut items = make_grid(&["a.jpg", "b.jpg"]);
        let before = items.clone();

        assert!(swap_by_key(&mut items, |i| &i.src, "ghost.jpg", "b.jpg").is_none());
        assert!(swap_by_key(&mut items, |i| &i.src, "a.jpg", "ghost.jpg").is_none());
        assert_eq!(items, before);
    }
}
