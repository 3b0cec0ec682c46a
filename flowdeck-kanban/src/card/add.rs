//! AddCard command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::parse;
use crate::types::{Board, Card, ColumnId};
use serde::Deserialize;
use serde_json::Value;

/// Add a new card to the end of the `todo` column.
///
/// The new card gets a fresh id and an empty completed set. Cards are only
/// ever created into `todo`; they reach other columns via moves or
/// promotion.
#[derive(Debug, Deserialize)]
pub struct AddCard {
    /// The card title (required, non-empty)
    pub title: String,
    /// Subtask labels, trimmed and non-empty; duplicates permitted
    #[serde(default)]
    pub subtasks: Vec<String>,
}

impl AddCard {
    /// Create a new AddCard command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtasks: Vec::new(),
        }
    }

    /// Set the subtask labels
    pub fn with_subtasks(mut self, subtasks: Vec<String>) -> Self {
        self.subtasks = subtasks;
        self
    }

    /// Set the subtask labels from comma-separated free text
    pub fn with_subtask_text(self, text: &str) -> Self {
        self.with_subtasks(parse::split_subtasks(text))
    }
}

impl Apply for AddCard {
    fn apply(&self, board: &mut Board) -> Result<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        if self.subtasks.iter().any(|s| s.trim().is_empty()) {
            return Err(BoardError::invalid_value(
                "subtasks",
                "subtask labels must be non-empty",
            ));
        }

        let todo = ColumnId::todo();
        let column = board
            .column_mut(&todo)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: todo.to_string(),
            })?;

        let card = Card::new(title).with_subtasks(self.subtasks.clone());
        let value = serde_json::to_value(&card)?;
        column.cards.push(card);

        Ok(value)
    }
}
