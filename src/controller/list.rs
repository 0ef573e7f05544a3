//! List Controller
//!
//! Owns the sortable list's rows and translates monitor drops into
//! same-container reorders.

use reorder::Axis;

use crate::dnd::{extract_closest_edge, DragData, DragPayload, DropTargetData, InstanceId};
use crate::domain::{DomainResult, ListItem};
use crate::engine::{reorder_within, MoveResult};
use crate::repository::PositionedRepository;

pub struct ListController {
    instance: InstanceId,
    items: Vec<ListItem>,
}

impl ListController {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            instance: InstanceId::new(),
            items,
        }
    }

    /// Fetch all rows ordered by position.
    pub async fn load<R>(repo: &R) -> DomainResult<Self>
    where
        R: PositionedRepository<ListItem>,
    {
        Ok(Self::new(repo.fetch_ordered(None).await?))
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Monitor accept predicate: only payloads from this mounted list.
    pub fn can_monitor(&self, payload: &DragPayload) -> bool {
        payload.instance == self.instance
    }

    /// Handle a completed drop.
    ///
    /// Local state is already reordered when this returns; the caller
    /// persists the delta. `None` is a pure no-op with nothing to persist.
    pub fn on_drop(
        &mut self,
        payload: &DragPayload,
        drop_targets: &[DropTargetData],
    ) -> Option<MoveResult> {
        if !self.can_monitor(payload) {
            return None;
        }
        let target = drop_targets.first()?;

        let DragData::ListItem {
            index: source_index,
            ..
        } = &payload.data
        else {
            return None;
        };
        let DragData::ListItem {
            index: target_index,
            ..
        } = &target.data
        else {
            return None;
        };

        reorder_within(
            &mut self.items,
            *source_index,
            *target_index,
            extract_closest_edge(target),
            Axis::Vertical,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::attach_closest_edge;
    use crate::repository::MemoryTable;
    use reorder::Edge;

    fn make_item(id: &str, position: i32) -> ListItem {
        ListItem {
            id: id.to_string(),
            ..ListItem::new(format!("Item {}", id.to_uppercase()), position)
        }
    }

    fn item_payload(controller: &ListController, id: &str, index: usize) -> DragPayload {
        DragPayload::new(
            controller.instance(),
            DragData::ListItem {
                id: id.to_string(),
                index,
            },
        )
    }

    #[test]
    fn test_drop_reorders_local_state() {
        let mut controller =
            ListController::new(vec![make_item("a", 0), make_item("b", 1), make_item("c", 2)]);

        let payload = item_payload(&controller, "a", 0);
        let target = attach_closest_edge(
            DragData::ListItem {
                id: "c".to_string(),
                index: 2,
            },
            Some(Edge::After),
        );

        let result = controller.on_drop(&payload, &[target]).expect("should move");
        let ids: Vec<&str> = controller.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(result.changes.len(), 3);
    }

    #[test]
    fn test_foreign_instance_is_ignored() {
        let mut controller = ListController::new(vec![make_item("a", 0), make_item("b", 1)]);
        let other = ListController::new(Vec::new());

        let payload = item_payload(&other, "a", 0);
        let target = attach_closest_edge(
            DragData::ListItem {
                id: "b".to_string(),
                index: 1,
            },
            Some(Edge::After),
        );

        assert!(controller.on_drop(&payload, &[target]).is_none());
    }

    #[test]
    fn test_drop_without_target_is_ignored() {
        let mut controller = ListController::new(vec![make_item("a", 0)]);
        let payload = item_payload(&controller, "a", 0);
        assert!(controller.on_drop(&payload, &[]).is_none());
    }

    #[test]
    fn test_non_list_payload_is_ignored() {
        let mut controller = ListController::new(vec![make_item("a", 0), make_item("b", 1)]);
        let payload = DragPayload::new(
            controller.instance(),
            DragData::GridItem {
                id: "g".to_string(),
                src: "x.jpg".to_string(),
            },
        );
        let target = attach_closest_edge(
            DragData::ListItem {
                id: "b".to_string(),
                index: 1,
            },
            None,
        );
        assert!(controller.on_drop(&payload, &[target]).is_none());
    }

    #[tokio::test]
    async fn test_drop_then_persist_round_trips() {
        let table = MemoryTable::with_rows(vec![
            make_item("a", 0),
            make_item("b", 1),
            make_item("c", 2),
        ]);
        let mut controller = ListController::load(&table).await.expect("load failed");

        let payload = item_payload(&controller, "a", 0);
        let target = attach_closest_edge(
            DragData::ListItem {
                id: "c".to_string(),
                index: 2,
            },
            Some(Edge::After),
        );
        let result = controller.on_drop(&payload, &[target]).expect("should move");
        table.persist_changes(&result).await;

        let reloaded = ListController::load(&table).await.expect("reload failed");
        let ids: Vec<&str> = reloaded.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
