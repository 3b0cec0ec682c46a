//! Board-level types: Board, Column, PromotionRule

use super::card::Card;
use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// The task board: an ordered sequence of columns.
///
/// Column order is display order. The seeded board has the three fixed
/// columns `todo`, `inprogress` and `completed`; the model itself places no
/// restriction on the column set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Create an empty board with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, preserving insertion order
    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Locate a card anywhere on the board, returning its column id and index
    pub fn locate_card(&self, id: &CardId) -> Option<(&ColumnId, usize)> {
        for column in &self.columns {
            if let Some(index) = column.cards.iter().position(|c| &c.id == id) {
                return Some((&column.id, index));
            }
        }
        None
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

/// A column is an ordered bucket of cards representing a workflow stage.
///
/// The column id is carried by the surrounding snapshot entry, not the
/// column record itself, so it is skipped on the wire and restored on
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(skip)]
    pub id: ColumnId,
    pub title: String,
    /// When set, cards in this column that become fully subtask-complete
    /// are moved to the rule's target column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionRule>,
    #[serde(default, rename = "tasks")]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            promotion: None,
            cards: Vec::new(),
        }
    }

    /// Attach a promotion rule
    pub fn with_promotion(mut self, rule: PromotionRule) -> Self {
        self.promotion = Some(rule);
        self
    }

    /// Find a card in this column by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }
}

/// Data-driven promotion: when a card in the carrying column becomes fully
/// subtask-complete, it is appended to the end of column `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRule {
    pub to: ColumnId,
}

impl PromotionRule {
    /// Promote fully-complete cards into the given column
    pub fn into_column(to: ColumnId) -> Self {
        Self { to }
    }
}
