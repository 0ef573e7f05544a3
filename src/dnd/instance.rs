//! Drag Session Tokens

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Opaque token scoping which draggables and drop targets may interact.
///
/// One token is created per mounted surface (list, board, grid) and
/// threaded through every registration; the monitor accepts a payload
/// only when the tokens compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn new() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}
