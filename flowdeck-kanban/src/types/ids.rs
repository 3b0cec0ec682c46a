//! Newtype identifiers for board entities

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique identifier for a card.
///
/// Generated as a ULID at card creation and stable for the card's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Generate a fresh ULID-backed id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an existing id string (used when decoding snapshots)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

/// Identifier for a column (workflow stage).
///
/// Columns use human-readable slugs. The seeded board uses the three
/// well-known values `todo`, `inprogress` and `completed`, but the model
/// accepts an arbitrary column set.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Wrap an existing column slug
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The backlog column of the seeded board
    pub fn todo() -> Self {
        Self::from_string("todo")
    }

    /// The in-progress column of the seeded board
    pub fn in_progress() -> Self {
        Self::from_string("inprogress")
    }

    /// The completed column of the seeded board
    pub fn completed() -> Self {
        Self::from_string("completed")
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
