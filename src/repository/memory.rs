//! In-Memory Table
//!
//! Mutex-guarded row store standing in for the hosted backend.
//! Clones share the underlying rows, so a controller and a test can
//! observe the same table.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::PositionedRepository;
use crate::domain::{DomainError, DomainResult, Positioned};

pub struct MemoryTable<T> {
    state: Arc<Mutex<TableState<T>>>,
}

struct TableState<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T: Positioned> MemoryTable<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            state: Arc::new(Mutex::new(TableState { rows, next_id: 0 })),
        }
    }
}

impl<T: Positioned> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl<T: Positioned + 'static> PositionedRepository<T> for MemoryTable<T> {
    async fn fetch_ordered(&self, container_key: Option<&str>) -> DomainResult<Vec<T>> {
        let state = self.state.lock().await;
        let mut rows: Vec<T> = state
            .rows
            .iter()
            .filter(|row| container_key.map_or(true, |key| row.container_key() == Some(key)))
            .cloned()
            .collect();
        // id as tiebreak, matching the backend's stable ordering
        rows.sort_by(|a, b| a.position().cmp(&b.position()).then_with(|| a.id().cmp(&b.id())));
        Ok(rows)
    }

    async fn update_position(
        &self,
        id: &str,
        container_key: Option<&str>,
        position: i32,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("row {} not found", id)))?;

        if let Some(key) = container_key {
            row.set_container_key(key);
        }
        row.set_position(position);
        Ok(())
    }

    async fn insert_rows(&self, mut rows: Vec<T>) -> DomainResult<Vec<T>> {
        let mut state = self.state.lock().await;
        for row in rows.iter_mut() {
            if row.id().is_empty() {
                state.next_id += 1;
                let id = format!("row-{}", state.next_id);
                row.set_id(id);
            }
        }
        state.rows.extend(rows.iter().cloned());
        Ok(rows)
    }
}
