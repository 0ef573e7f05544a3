//! Grid Controller
//!
//! Owns the image grid's tiles and translates monitor drops into
//! position swaps. Seeds a default tile set on first run.

use crate::dnd::{DragData, DragPayload, DropTargetData, InstanceId};
use crate::domain::{DomainResult, GridItem};
use crate::engine::{swap_by_key, MoveResult};
use crate::repository::PositionedRepository;

/// Tile sources inserted when the table is empty on first load.
pub const DEFAULT_GRID_SOURCES: [&str; 6] = [
    "https://images.pexels.com/photos/1170686/pexels-photo-1170686.jpeg?w=300",
    "https://images.pexels.com/photos/1181357/pexels-photo-1181357.jpeg?w=300",
    "https://images.pexels.com/photos/1181676/pexels-photo-1181676.jpeg?w=300",
    "https://images.pexels.com/photos/1370704/pexels-photo-1370704.jpeg?w=300",
    "https://images.pexels.com/photos/1591373/pexels-photo-1591373.jpeg?w=300",
    "https://images.pexels.com/photos/1758531/pexels-photo-1758531.jpeg?w=300",
];

pub struct GridController {
    instance: InstanceId,
    items: Vec<GridItem>,
}

impl GridController {
    pub fn new(items: Vec<GridItem>) -> Self {
        Self {
            instance: InstanceId::new(),
            items,
        }
    }

    /// Fetch all tiles, inserting `default_sources` when the table is
    /// empty (first run).
    pub async fn load_or_seed<R>(repo: &R, default_sources: &[&str]) -> DomainResult<Self>
    where
        R: PositionedRepository<GridItem>,
    {
        let rows = repo.fetch_ordered(None).await?;
        if !rows.is_empty() {
            return Ok(Self::new(rows));
        }

        let seed: Vec<GridItem> = default_sources
            .iter()
            .enumerate()
            .map(|(index, src)| GridItem::new(*src, index as i32))
            .collect();
        Ok(Self::new(repo.insert_rows(seed).await?))
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Monitor accept predicate: only payloads from this mounted grid.
    pub fn can_monitor(&self, payload: &DragPayload) -> bool {
        payload.instance == self.instance
    }

    /// Handle a completed drop. Tiles are matched by content key (`src`),
    /// not id; the two resolved tiles trade slots.
    pub fn on_drop(
        &mut self,
        payload: &DragPayload,
        drop_targets: &[DropTargetData],
    ) -> Option<MoveResult> {
        if !self.can_monitor(payload) {
            return None;
        }
        let target = drop_targets.first()?;

        let DragData::GridItem { src: source_src, .. } = &payload.data else {
            return None;
        };
        let DragData::GridItem { src: target_src, .. } = &target.data else {
            return None;
        };

        swap_by_key(&mut self.items, |item| &item.src, source_src, target_src)
    }
}
