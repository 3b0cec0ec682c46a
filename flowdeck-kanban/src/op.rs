//! The `Apply` trait for board operations
//!
//! Operations are structs where the fields are the parameters. Each one is a
//! pure state transition over an explicit `Board` value: validate first,
//! then commit, so a rejected operation leaves the board untouched. The
//! caller owns the mutable slot and persists the board after each
//! successful application.

use crate::error::Result;
use crate::types::Board;
use serde_json::Value;

/// A board operation.
///
/// `apply` returns a JSON description of the outcome (the affected card,
/// where it ended up, whether promotion fired) for the presentation layer
/// to render.
pub trait Apply {
    fn apply(&self, board: &mut Board) -> Result<Value>;
}
