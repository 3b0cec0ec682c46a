//! Card commands

mod add;
mod mv;

pub use add::AddCard;
pub use mv::{MoveCard, Slot};
