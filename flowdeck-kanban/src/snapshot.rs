//! Snapshot codec: the persistence wire format for a board.
//!
//! A snapshot is a JSON record with one named entry per column, in column
//! order, each holding the column title, its optional promotion rule, and
//! its card list:
//!
//! ```json
//! {
//!   "todo":       { "title": "To Do", "tasks": [ { "id": "...", "title": "...",
//!                   "subtasks": ["UI"], "completedSubtasks": [] } ] },
//!   "inprogress": { "title": "In Progress", "promotion": { "to": "completed" }, "tasks": [] },
//!   "completed":  { "title": "Completed", "tasks": [] }
//! }
//! ```
//!
//! Decoding is strict about shape (typed records, no free-form JSON) but
//! ignores unknown fields for forward compatibility. `decode(encode(b))`
//! reproduces `b` exactly: column order, card order, subtask order and
//! completed-set membership are all preserved.

use crate::error::{BoardError, Result};
use crate::types::{Board, Column, ColumnId};
use indexmap::IndexMap;

/// Encode a board as a pretty-printed JSON snapshot.
pub fn encode(board: &Board) -> Result<String> {
    let mut entries: IndexMap<&str, &Column> = IndexMap::with_capacity(board.columns().len());
    for column in board.columns() {
        entries.insert(column.id.as_str(), column);
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Decode a JSON snapshot back into a board.
///
/// Fails with [`BoardError::Decode`] when the text is not valid JSON, does
/// not match the snapshot shape, or violates the card invariant (a
/// completed label that is not among the card's subtasks, or an empty card
/// title).
pub fn decode(text: &str) -> Result<Board> {
    let entries: IndexMap<String, Column> =
        serde_json::from_str(text).map_err(|e| BoardError::decode(e.to_string()))?;

    let mut board = Board::new();
    for (id, mut column) in entries {
        column.id = ColumnId::from_string(id);
        for card in &column.cards {
            if card.title.trim().is_empty() {
                return Err(BoardError::decode(format!(
                    "card {} has an empty title",
                    card.id
                )));
            }
            for label in &card.completed_subtasks {
                if !card.has_subtask(label) {
                    return Err(BoardError::decode(format!(
                        "card {} marks unknown subtask '{}' as completed",
                        card.id, label
                    )));
                }
            }
        }
        board.push_column(column);
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seeded_board;
    use crate::op::Apply;
    use crate::subtask::ToggleSubtask;

    #[test]
    fn test_round_trip_seeded_board() {
        let board = seeded_board();
        let text = encode(&board).unwrap();
        let back = decode(&text).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_round_trip_preserves_completed_sets() {
        let mut board = seeded_board();
        let id = board.column(&ColumnId::todo()).unwrap().cards[0].id.clone();
        ToggleSubtask::new(id, "UI", "todo").apply(&mut board).unwrap();

        let back = decode(&encode(&board).unwrap()).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_column_order_preserved() {
        let board = seeded_board();
        let text = encode(&board).unwrap();

        let todo = text.find("\"todo\"").unwrap();
        let inprogress = text.find("\"inprogress\"").unwrap();
        let completed = text.find("\"completed\":").unwrap();
        assert!(todo < inprogress && inprogress < completed);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let text = r#"{
            "todo": {
                "title": "To Do",
                "collapsed": true,
                "tasks": [
                    { "id": "1", "title": "A", "subtasks": ["x"],
                      "completedSubtasks": [], "pinned": false }
                ]
            }
        }"#;

        let board = decode(text).unwrap();
        let todo = board.column(&ColumnId::todo()).unwrap();
        assert_eq!(todo.cards[0].title, "A");
    }

    #[test]
    fn test_malformed_text_is_decode_error() {
        let err = decode("not json at all").unwrap_err();
        assert!(matches!(err, BoardError::Decode { .. }));

        let err = decode(r#"{ "todo": [1, 2, 3] }"#).unwrap_err();
        assert!(matches!(err, BoardError::Decode { .. }));
    }

    #[test]
    fn test_subset_invariant_enforced() {
        let text = r#"{
            "todo": {
                "title": "To Do",
                "tasks": [
                    { "id": "1", "title": "A", "subtasks": ["x"],
                      "completedSubtasks": ["x", "ghost"] }
                ]
            }
        }"#;

        let err = decode(text).unwrap_err();
        assert!(matches!(err, BoardError::Decode { .. }));
    }

    #[test]
    fn test_empty_card_title_rejected() {
        let text = r#"{
            "todo": { "title": "To Do", "tasks": [ { "id": "1", "title": "  " } ] }
        }"#;

        let err = decode(text).unwrap_err();
        assert!(matches!(err, BoardError::Decode { .. }));
    }
}
