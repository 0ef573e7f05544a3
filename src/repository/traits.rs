//! Repository Layer - Persistence Seam
//!
//! Abstract interface over one backend table of positioned rows.
//! Implementations can be an in-memory table, a generated backend
//! client, etc. All operations are async to support remote backends.

use async_trait::async_trait;
use log::error;

use crate::domain::{DomainResult, Positioned};
use crate::engine::MoveResult;

/// Ordered CRUD over one backend table of positioned rows
#[async_trait]
pub trait PositionedRepository<T: Positioned>: Send + Sync {
    /// Rows ordered by position ascending, optionally scoped to one
    /// container (a column's cards, a board's columns).
    async fn fetch_ordered(&self, container_key: Option<&str>) -> DomainResult<Vec<T>>;

    /// Single-row position update; re-homes the row when `container_key`
    /// is set.
    async fn update_position(
        &self,
        id: &str,
        container_key: Option<&str>,
        position: i32,
    ) -> DomainResult<()>;

    /// Insert rows, assigning backend ids to rows that have none.
    /// Used only for first-run seeding.
    async fn insert_rows(&self, rows: Vec<T>) -> DomainResult<Vec<T>>;

    /// Push an engine delta to the backend, one independent update per
    /// row. Local state is already current when this runs: failures are
    /// logged, not retried and not rolled back, so the store may lag the
    /// in-memory ordering until the next full reload.
    async fn persist_changes(&self, result: &MoveResult) {
        for change in &result.changes {
            if let Err(err) = self
                .update_position(
                    &change.item_id,
                    change.container_id.as_deref(),
                    change.new_position,
                )
                .await
            {
                error!(
                    "failed to persist position {} for row {}: {}",
                    change.new_position, change.item_id, err
                );
            }
        }
    }
}
