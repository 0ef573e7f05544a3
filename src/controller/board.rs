//! Board Controller
//!
//! Owns the board's columns (with their cards grouped in) and dispatches
//! monitor drops by source payload type: dragged columns reorder the
//! board, dragged cards move within or across columns.

use crate::dnd::{extract_closest_edge, DragData, DragPayload, DropTargetData, InstanceId};
use crate::domain::{Board, Card, Column, DomainResult};
use crate::engine::{move_card, reorder_columns, CardDropTarget, MoveResult};
use crate::repository::PositionedRepository;

/// Delta tagged with the table it belongs to, so the caller persists
/// column moves and card moves to the right repository.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardMove {
    Columns(MoveResult),
    Cards(MoveResult),
}

pub struct BoardController {
    instance: InstanceId,
    board: Board,
    columns: Vec<Column>,
}

impl BoardController {
    pub fn new(board: Board, columns: Vec<Column>) -> Self {
        Self {
            instance: InstanceId::new(),
            board,
            columns,
        }
    }

    /// Assemble the board: ordered columns, then each column's cards.
    pub async fn load<RC, RK>(board: Board, column_repo: &RC, card_repo: &RK) -> DomainResult<Self>
    where
        RC: PositionedRepository<Column>,
        RK: PositionedRepository<Card>,
    {
        let mut columns = column_repo.fetch_ordered(Some(board.id.as_str())).await?;
        for column in columns.iter_mut() {
            column.cards = card_repo.fetch_ordered(Some(column.id.as_str())).await?;
        }
        Ok(Self::new(board, columns))
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Monitor accept predicate: only payloads from this mounted board.
    pub fn can_monitor(&self, payload: &DragPayload) -> bool {
        payload.instance == self.instance
    }

    /// Handle a completed drop, dispatching on what was dragged.
    pub fn on_drop(
        &mut self,
        payload: &DragPayload,
        drop_targets: &[DropTargetData],
    ) -> Option<BoardMove> {
        if !self.can_monitor(payload) {
            return None;
        }
        let target = drop_targets.first()?;

        match &payload.data {
            DragData::Column { index, .. } => self
                .handle_column_drop(*index, target)
                .map(BoardMove::Columns),
            DragData::Card {
                id,
                column_id,
                index,
            } => self
                .handle_card_drop(id, column_id, *index, target)
                .map(BoardMove::Cards),
            _ => None,
        }
    }

    fn handle_column_drop(
        &mut self,
        source_index: usize,
        target: &DropTargetData,
    ) -> Option<MoveResult> {
        let DragData::Column {
            index: target_index,
            ..
        } = &target.data
        else {
            return None;
        };
        reorder_columns(
            &mut self.columns,
            source_index,
            *target_index,
            extract_closest_edge(target),
        )
    }

    fn handle_card_drop(
        &mut self,
        card_id: &str,
        source_column_id: &str,
        source_index: usize,
        target: &DropTargetData,
    ) -> Option<MoveResult> {
        let resolved = match &target.data {
            DragData::Column { id, .. } => CardDropTarget::Column { column_id: id },
            DragData::Card {
                column_id, index, ..
            } => CardDropTarget::Card {
                column_id,
                index: *index,
                closest_edge: extract_closest_edge(target),
            },
            _ => return None,
        };
        move_card(
            &mut self.columns,
            card_id,
            source_column_id,
            source_index,
            resolved,
        )
    }
}
