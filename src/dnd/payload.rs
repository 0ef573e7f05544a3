//! Drag Payloads
//!
//! Typed records attached to draggables and drop targets, plus the
//! closest-edge attachment/extraction helpers.

use reorder::Edge;
use serde::{Deserialize, Serialize};

use super::instance::InstanceId;

/// Typed payload carried by a draggable or drop target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragData {
    ListItem { id: String, index: usize },
    Card { id: String, column_id: String, index: usize },
    Column { id: String, index: usize },
    GridItem { id: String, src: String },
}

/// Payload attached to the dragged element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub instance: InstanceId,
    pub data: DragData,
}

impl DragPayload {
    pub fn new(instance: InstanceId, data: DragData) -> Self {
        Self { instance, data }
    }
}

/// Resolved drop target with its closest-edge hint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropTargetData {
    pub data: DragData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_edge: Option<Edge>,
}

/// Decorate target data with the edge the pointer is closest to.
pub fn attach_closest_edge(data: DragData, closest_edge: Option<Edge>) -> DropTargetData {
    DropTargetData { data, closest_edge }
}

/// Read back the hint attached by [`attach_closest_edge`].
pub fn extract_closest_edge(target: &DropTargetData) -> Option<Edge> {
    target.closest_edge
}
