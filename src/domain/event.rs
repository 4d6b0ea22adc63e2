//! Calendar view models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event with guaranteed ISO-8601 bounds.
///
/// Fields the calendar does not interpret are kept in `extra` and written back
/// unchanged when the event is serialized, so a normalized event can be fed
/// through the normalizer again without changing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Value,
    pub start_datetime: String,
    pub end_datetime: String,
    /// Canonical event type; filled from `event_type` for older payloads.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of the class filter dropdown. Only used as a filter key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassFilterOption {
    pub id: i64,
    pub name: String,
}
