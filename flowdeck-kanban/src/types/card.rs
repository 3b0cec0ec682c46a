//! Card type: a task unit with a checklist of subtasks

use super::ids::CardId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A card on the board.
///
/// Subtasks are an ordered sequence of labels (duplicates permitted);
/// completion is tracked by label in a separate set. The invariant
/// `completed_subtasks ⊆ subtasks` (as label sets) holds for every card the
/// engine produces, and the snapshot decoder rejects snapshots that violate
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// Subtask labels in display order
    #[serde(default)]
    pub subtasks: Vec<String>,
    /// Labels checked off, a subset of `subtasks` by label
    #[serde(default)]
    pub completed_subtasks: BTreeSet<String>,
}

impl Card {
    /// Create a new card with a fresh id and no completed subtasks
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            subtasks: Vec::new(),
            completed_subtasks: BTreeSet::new(),
        }
    }

    /// Set the subtask labels
    pub fn with_subtasks(mut self, subtasks: Vec<String>) -> Self {
        self.subtasks = subtasks;
        self
    }

    /// Whether the card carries a subtask with this label
    pub fn has_subtask(&self, label: &str) -> bool {
        self.subtasks.iter().any(|s| s == label)
    }

    /// Flip the completion state of a label (checked → unchecked, unchecked → checked).
    ///
    /// Toggling the same label twice restores the original set.
    pub fn toggle_subtask(&mut self, label: &str) {
        if !self.completed_subtasks.remove(label) {
            self.completed_subtasks.insert(label.to_string());
        }
    }

    /// Full-completion predicate used by column promotion rules.
    ///
    /// True when the card has at least one subtask, every label is checked,
    /// and the checked set is as large as the subtask sequence. A card with
    /// no subtasks is never fully complete (vacuous completion must not
    /// promote), and a card with duplicate labels can never satisfy the
    /// cardinality check.
    pub fn is_fully_complete(&self) -> bool {
        !self.subtasks.is_empty()
            && self.completed_subtasks.len() == self.subtasks.len()
            && self.subtasks.iter().all(|s| self.completed_subtasks.contains(s))
    }

    /// Fraction of subtasks checked, 0.0 for a card without subtasks
    pub fn progress(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        let checked = self
            .subtasks
            .iter()
            .filter(|s| self.completed_subtasks.contains(*s))
            .count();
        checked as f64 / self.subtasks.len() as f64
    }
}
