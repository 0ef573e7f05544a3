//! Board Moves
//!
//! Column reorder plus the three mutually exclusive card-drop cases:
//! card on a column surface, card on a card in the same column, and card
//! on a card in another column. Inconsistent drag data (ids that do not
//! resolve against the board) aborts with no partial mutation.

use reorder::{Axis, Edge};

use super::{renumber, reorder_within, MoveResult};
use crate::domain::Column;

/// Drop target resolved for a dragged card
#[derive(Clone, Debug, PartialEq)]
pub enum CardDropTarget<'a> {
    /// Dropped on a column surface, not on another card
    Column { column_id: &'a str },
    /// Dropped on another card
    Card {
        column_id: &'a str,
        index: usize,
        closest_edge: Option<Edge>,
    },
}

/// Reorder the board's columns themselves.
///
/// Same index operation as a list reorder; the horizontal axis changes
/// nothing about the arithmetic. Column updates carry no container key.
pub fn reorder_columns(
    columns: &mut Vec<Column>,
    source_index: usize,
    target_index: usize,
    closest_edge: Option<Edge>,
) -> Option<MoveResult> {
    reorder_within(
        columns,
        source_index,
        target_index,
        closest_edge,
        Axis::Horizontal,
        None,
    )
}

/// Move a card according to the resolved drop target.
///
/// A card's position stays local to its current column: moving across
/// columns re-homes the card and renumbers both columns independently.
pub fn move_card(
    columns: &mut Vec<Column>,
    card_id: &str,
    source_column_id: &str,
    source_index: usize,
    target: CardDropTarget<'_>,
) -> Option<MoveResult> {
    match target {
        CardDropTarget::Column { column_id } => {
            // dropping on the column the card already lives in changes nothing
            if column_id == source_column_id {
                return None;
            }
            move_card_across(columns, card_id, source_column_id, column_id, None)
        }
        CardDropTarget::Card {
            column_id,
            index,
            closest_edge,
        } => {
            if column_id == source_column_id {
                let column = columns.iter_mut().find(|c| c.id == column_id)?;
                let column_id = column.id.clone();
                reorder_within(
                    &mut column.cards,
                    source_index,
                    index,
                    closest_edge,
                    Axis::Vertical,
                    Some(column_id.as_str()),
                )
            } else {
                move_card_across(
                    columns,
                    card_id,
                    source_column_id,
                    column_id,
                    Some((index, closest_edge)),
                )
            }
        }
    }
}

/// Cross-column move. `slot` is the target card's index and edge hint;
/// `None` appends at the end of the target column.
fn move_card_across(
    columns: &mut Vec<Column>,
    card_id: &str,
    source_column_id: &str,
    target_column_id: &str,
    slot: Option<(usize, Option<Edge>)>,
) -> Option<MoveResult> {
    // resolve both ends before touching anything
    let target_at = columns.iter().position(|c| c.id == target_column_id)?;
    let source_at = columns.iter().position(|c| c.id == source_column_id)?;
    let card_at = columns[source_at]
        .cards
        .iter()
        .position(|c| c.id == card_id)?;

    let mut card = columns[source_at].cards.remove(card_at);
    let mut changes = renumber(&mut columns[source_at].cards, Some(source_column_id), None);

    let target = &mut columns[target_at];
    let insert_index = match slot {
        Some((index, Some(Edge::After))) => index + 1,
        Some((index, _)) => index,
        None => target.cards.len(),
    }
    .min(target.cards.len());

    card.column_id = target_column_id.to_string();
    target.cards.insert(insert_index, card);
    changes.extend(renumber(
        &mut target.cards,
        Some(target_column_id),
        Some(card_id),
    ));

    Some(MoveResult { changes })
}
