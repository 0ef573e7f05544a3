//! DnD Adapter Seam
//!
//! Payload types exchanged with the drag-and-drop library and the
//! per-surface session token checked by monitor accept predicates.
//! The library itself (hit-testing, auto-scroll, accessibility) stays
//! external; only the opaque typed records cross this boundary.

mod instance;
mod payload;

pub use instance::InstanceId;
pub use payload::{attach_closest_edge, extract_closest_edge, DragData, DragPayload, DropTargetData};
