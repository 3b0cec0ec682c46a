//! Calendar event types

use crate::error::BoardError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A date-tagged entry on the companion calendar.
///
/// Events carry a calendar day (no time component) and a display color
/// derived purely from the kind they were created with. Identity is
/// structural; the collection is an unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
    /// Display color as a `#rrggbb` hex string
    pub color: String,
}

/// The two kinds of calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Deadline,
}

impl EventKind {
    /// Kind name as it appears on the wire and the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Deadline => "deadline",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(Self::Task),
            "deadline" => Ok(Self::Deadline),
            other => Err(BoardError::invalid_value(
                "kind",
                format!("expected 'task' or 'deadline', got '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_from_str() {
        assert_eq!("task".parse::<EventKind>().unwrap(), EventKind::Task);
        assert_eq!("deadline".parse::<EventKind>().unwrap(), EventKind::Deadline);
        assert!("meeting".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_event_round_trips() {
        let event = CalendarEvent {
            title: "Pay rent".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            color: "#dc3545".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
