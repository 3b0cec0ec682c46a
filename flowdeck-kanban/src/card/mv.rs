//! MoveCard command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, CardId, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One endpoint of a drag gesture: a column and a position within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub column: ColumnId,
    pub index: usize,
}

impl Slot {
    /// Create a slot
    pub fn new(column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// Move a card from one slot to another.
///
/// Mirrors a drag gesture: `from` names where the card currently sits,
/// `to` where it was dropped. A missing destination (drag cancelled) is a
/// no-op. For a same-column move, `to.index` is the insertion position in
/// the sequence *after* the card has been removed.
///
/// Moving performs no completion check; dragging a card into a completed
/// column manually is allowed regardless of its subtask state.
#[derive(Debug, Deserialize)]
pub struct MoveCard {
    /// The card being moved
    pub id: CardId,
    /// Where the card currently is
    pub from: Slot,
    /// Where it was dropped, if anywhere
    pub to: Option<Slot>,
}

impl MoveCard {
    /// Create a MoveCard with no destination (a cancelled drag)
    pub fn new(id: impl Into<CardId>, from: Slot) -> Self {
        Self {
            id: id.into(),
            from,
            to: None,
        }
    }

    /// Set the destination slot
    pub fn with_destination(mut self, to: Slot) -> Self {
        self.to = Some(to);
        self
    }
}

impl Apply for MoveCard {
    fn apply(&self, board: &mut Board) -> Result<Value> {
        let Some(to) = &self.to else {
            // Drag cancelled: the board is unchanged
            return Ok(json!({ "id": self.id.as_str(), "moved": false }));
        };

        // Validate everything before touching the board
        let source = board
            .column(&self.from.column)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.from.column.to_string(),
            })?;
        let source_len = source.cards.len();
        if self.from.index >= source_len {
            return Err(BoardError::IndexOutOfRange {
                column: self.from.column.to_string(),
                index: self.from.index,
                len: source_len,
            });
        }
        if source.cards[self.from.index].id != self.id {
            return Err(BoardError::CardNotFound {
                id: self.id.to_string(),
            });
        }

        let same_column = self.from.column == to.column;
        let dest_len = if same_column {
            // Insertion happens after removal, into the shortened sequence
            source_len - 1
        } else {
            board
                .column(&to.column)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: to.column.to_string(),
                })?
                .cards
                .len()
        };
        if to.index > dest_len {
            return Err(BoardError::IndexOutOfRange {
                column: to.column.to_string(),
                index: to.index,
                len: dest_len,
            });
        }

        // Commit: single splice out of the source, single splice into the
        // destination. The card exists in exactly one column at every point
        // observable through the returned board.
        let card = {
            let source = board
                .column_mut(&self.from.column)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: self.from.column.to_string(),
                })?;
            source.cards.remove(self.from.index)
        };
        let value = serde_json::to_value(&card)?;
        let dest = board
            .column_mut(&to.column)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: to.column.to_string(),
            })?;
        dest.cards.insert(to.index, card);

        Ok(json!({
            "card": value,
            "from": { "column": self.from.column.as_str(), "index": self.from.index },
            "to": { "column": to.column.as_str(), "index": to.index },
            "moved": true,
        }))
    }
}
