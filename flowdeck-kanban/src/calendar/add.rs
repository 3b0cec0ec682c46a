//! AddEvent command

use super::color::color_for;
use crate::error::{BoardError, Result};
use crate::types::{CalendarEvent, EventKind};
use chrono::NaiveDate;
use serde::Deserialize;

/// Add a date-tagged entry to the calendar.
///
/// Deadlines must not be in the past; plain tasks may carry any date
/// (recording something that already happened is fine). Dates are compared
/// at day granularity, so a deadline for today is always accepted.
#[derive(Debug, Deserialize)]
pub struct AddEvent {
    /// The event title (required, non-empty)
    pub title: String,
    /// The calendar day, no time component
    pub date: NaiveDate,
    /// Whether this is a plain task or a deadline
    pub kind: EventKind,
}

impl AddEvent {
    /// Create a new AddEvent command
    pub fn new(title: impl Into<String>, date: NaiveDate, kind: EventKind) -> Self {
        Self {
            title: title.into(),
            date,
            kind,
        }
    }

    /// Validate against `today` and append to the event list.
    ///
    /// Returns the stored event, its color already assigned from the kind.
    pub fn apply(&self, events: &mut Vec<CalendarEvent>, today: NaiveDate) -> Result<CalendarEvent> {
        if self.title.trim().is_empty() {
            return Err(BoardError::missing_field("title"));
        }
        if self.kind == EventKind::Deadline && self.date < today {
            return Err(BoardError::invalid_value(
                "date",
                "a deadline cannot be set on a past date",
            ));
        }

        let event = CalendarEvent {
            title: self.title.trim().to_string(),
            date: self.date,
            color: color_for(self.kind).to_string(),
        };
        events.push(event.clone());
        Ok(event)
    }
}
