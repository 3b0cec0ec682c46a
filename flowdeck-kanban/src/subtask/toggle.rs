//! ToggleSubtask command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, CardId, ColumnId};
use serde::Deserialize;
use serde_json::{json, Value};

/// Flip the completion state of one subtask label on a card.
///
/// Checked labels become unchecked and vice versa; toggling the same label
/// twice restores the original set. If the flip leaves the card fully
/// complete and its column carries a promotion rule, the card is removed
/// from the column and appended to the end of the rule's target column in
/// the same step. Columns without a rule never promote, so toggling on
/// `todo` or `completed` only changes the checklist.
#[derive(Debug, Deserialize)]
pub struct ToggleSubtask {
    /// The card carrying the subtask
    pub id: CardId,
    /// The subtask label to flip
    pub label: String,
    /// The column the card currently sits in
    pub column: ColumnId,
}

impl ToggleSubtask {
    /// Create a new ToggleSubtask command
    pub fn new(
        id: impl Into<CardId>,
        label: impl Into<String>,
        column: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column: column.into(),
        }
    }
}

impl Apply for ToggleSubtask {
    fn apply(&self, board: &mut Board) -> Result<Value> {
        // Compute the toggled card and the promotion decision on a copy, so
        // every failure path leaves the board untouched.
        let column = board
            .column(&self.column)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column.to_string(),
            })?;
        let index = column
            .cards
            .iter()
            .position(|c| c.id == self.id)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;

        let mut card = column.cards[index].clone();
        if !card.has_subtask(&self.label) {
            return Err(BoardError::invalid_value(
                "label",
                format!("card has no subtask labeled '{}'", self.label),
            ));
        }
        card.toggle_subtask(&self.label);

        let destination = match (&column.promotion, card.is_fully_complete()) {
            (Some(rule), true) => Some(rule.to.clone()),
            _ => None,
        };
        if let Some(target) = &destination {
            if board.column(target).is_none() {
                return Err(BoardError::ColumnNotFound {
                    id: target.to_string(),
                });
            }
        }

        // Commit
        let value = serde_json::to_value(&card)?;
        match destination {
            Some(target) => {
                {
                    let source = board
                        .column_mut(&self.column)
                        .ok_or_else(|| BoardError::ColumnNotFound {
                            id: self.column.to_string(),
                        })?;
                    source.cards.remove(index);
                }
                let dest = board
                    .column_mut(&target)
                    .ok_or_else(|| BoardError::ColumnNotFound {
                        id: target.to_string(),
                    })?;
                dest.cards.push(card);

                Ok(json!({
                    "card": value,
                    "column": target.as_str(),
                    "promoted": true,
                }))
            }
            None => {
                let source = board
                    .column_mut(&self.column)
                    .ok_or_else(|| BoardError::ColumnNotFound {
                        id: self.column.to_string(),
                    })?;
                source.cards[index] = card;

                Ok(json!({
                    "card": value,
                    "column": self.column.as_str(),
                    "promoted": false,
                }))
            }
        }
    }
}
