//! Personal task board engine with snapshot persistence
//!
//! This crate implements the board state engine behind Flowdeck: cards move
//! between workflow columns, carry checkable subtasks, and auto-promote to
//! the completed column when every subtask is checked while the card sits
//! in a column carrying a promotion rule.
//!
//! ## Overview
//!
//! - **Pure state transitions** - operations are command structs applied to
//!   an explicit `Board` value; no I/O inside the engine
//! - **Data-driven promotion** - the `inprogress → completed` rule is a
//!   [`PromotionRule`] attached to a column, not a hardcoded column name
//! - **Snapshot persistence** - the whole board round-trips through a JSON
//!   snapshot; absent or malformed snapshots recover to the seeded default
//! - **Companion calendar** - date-tagged task/deadline entries with
//!   future-date validation for deadlines
//!
//! ## Basic Usage
//!
//! ```
//! use flowdeck_kanban::{seeded_board, AddCard, Apply, MoveCard, Slot, ToggleSubtask};
//!
//! let mut board = seeded_board();
//!
//! // Add a card to the backlog
//! let card = AddCard::new("Ship the release")
//!     .with_subtask_text("changelog, tag")
//!     .apply(&mut board)
//!     .unwrap();
//! let id = card["id"].as_str().unwrap().to_string();
//!
//! // Drag it into progress
//! MoveCard::new(id.as_str(), Slot::new("todo", 2))
//!     .with_destination(Slot::new("inprogress", 0))
//!     .apply(&mut board)
//!     .unwrap();
//!
//! // Checking off the last subtask promotes the card
//! ToggleSubtask::new(id.as_str(), "changelog", "inprogress").apply(&mut board).unwrap();
//! let done = ToggleSubtask::new(id.as_str(), "tag", "inprogress").apply(&mut board).unwrap();
//! assert_eq!(done["promoted"], true);
//! ```
//!
//! ## Storage
//!
//! [`SnapshotStore`] keeps two whole-file JSON snapshots in a data
//! directory:
//!
//! ```text
//! flowdeck/
//! ├── board.json      # the board (columns, cards, promotion rules)
//! ├── calendar.json   # the calendar event list
//! └── .lock           # advisory lock for load/mutate/save cycles
//! ```

pub mod defaults;
mod error;
mod op;
pub mod parse;
pub mod snapshot;
mod store;
pub mod types;

// Command modules
pub mod calendar;
pub mod card;
pub mod subtask;

pub use defaults::seeded_board;
pub use error::{BoardError, Result};
pub use op::Apply;
pub use store::{SnapshotStore, StoreLock};

// Re-export commonly used types and commands
pub use calendar::AddEvent;
pub use card::{AddCard, MoveCard, Slot};
pub use subtask::ToggleSubtask;
pub use types::{Board, CalendarEvent, Card, CardId, Column, ColumnId, EventKind, PromotionRule};
