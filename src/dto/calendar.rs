use serde::Serialize;

use crate::domain::event::{CalendarEvent, ClassFilterOption};

/// Data required to render the calendar screen.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CalendarPageData {
    /// Class filter options.
    pub classes: Vec<ClassFilterOption>,
    /// Class the events belong to, `None` for the upcoming view.
    pub selected_class: Option<i64>,
    pub events: Vec<CalendarEvent>,
    /// Earliest event starting at or after the request time.
    pub next_event: Option<CalendarEvent>,
}
