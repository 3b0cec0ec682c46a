//! Seeded default board.
//!
//! This is the board a fresh install starts from, and the board the store
//! falls back to when a snapshot is absent or malformed.

use crate::types::{Board, Card, Column, ColumnId, PromotionRule};

/// The three fixed columns with the promotion rule on `inprogress`,
/// pre-populated with two starter cards in `todo`.
pub fn seeded_board() -> Board {
    let mut board = Board::new();

    let mut todo = Column::new(ColumnId::todo(), "To Do");
    todo.cards.push(
        Card::new("Finish login page").with_subtasks(vec!["UI".into(), "Firebase auth".into()]),
    );
    todo.cards
        .push(Card::new("Setup Firebase").with_subtasks(vec!["Hosting".into(), "Firestore".into()]));
    board.push_column(todo);

    board.push_column(
        Column::new(ColumnId::in_progress(), "In Progress")
            .with_promotion(PromotionRule::into_column(ColumnId::completed())),
    );
    board.push_column(Column::new(ColumnId::completed(), "Completed"));

    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_column_set() {
        let board = seeded_board();
        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "inprogress", "completed"]);
    }

    #[test]
    fn test_seeded_cards_start_uncompleted() {
        let board = seeded_board();
        let todo = board.column(&ColumnId::todo()).unwrap();
        assert_eq!(todo.cards.len(), 2);
        for card in &todo.cards {
            assert!(card.completed_subtasks.is_empty());
        }
        assert_eq!(todo.cards[0].title, "Finish login page");
        assert_eq!(todo.cards[1].subtasks, vec!["Hosting", "Firestore"]);
    }

    #[test]
    fn test_only_inprogress_promotes() {
        let board = seeded_board();
        for column in board.columns() {
            match column.id.as_str() {
                "inprogress" => {
                    let rule = column.promotion.as_ref().unwrap();
                    assert_eq!(rule.to, ColumnId::completed());
                }
                _ => assert!(column.promotion.is_none()),
            }
        }
    }
}
