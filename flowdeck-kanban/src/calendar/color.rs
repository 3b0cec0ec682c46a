//! Display colors for calendar events.
//!
//! The color is a pure function of the event kind: deadlines render red,
//! plain tasks blue.

use crate::types::EventKind;

const DEADLINE_COLOR: &str = "#dc3545";
const TASK_COLOR: &str = "#007bff";

/// Return the display color for an event kind (6-char hex with `#`).
pub fn color_for(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Deadline => DEADLINE_COLOR,
        EventKind::Task => TASK_COLOR,
    }
}
