//! Calendar event normalization and the upcoming-event selector.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::domain::event::{CalendarEvent, ClassFilterOption};
use crate::domain::types::{value_as_i64, value_as_text};
use crate::normalize::payload::{LIST_PROBES, ListPayload};
use crate::normalize::time::{TimeOfDay, parse_instant, parse_time_of_day};

fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    fields.remove(key).as_ref().and_then(value_as_text)
}

fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(value_as_text)
}

/// Produces an event with guaranteed `start_datetime`/`end_datetime`.
///
/// An event that already has `start_datetime` passes through unchanged (its
/// end defaults to the start when missing). Otherwise the bounds are built
/// from `event_date` plus the clamped `start_time`/`end_time`; without an
/// `event_date` that reads as a calendar date both bounds are `now`. `type`
/// is filled from `event_type` when absent; an object or array `type` is
/// passed through as is.
pub fn normalize_event(raw: Value, now: DateTime<Utc>) -> CalendarEvent {
    let mut fields = match raw {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };

    let id = fields.remove("id").unwrap_or(Value::Null);
    let event_type = match fields.get("type") {
        Some(Value::Array(_) | Value::Object(_)) => None,
        _ => take_text(&mut fields, "type").or_else(|| text(&fields, "event_type")),
    };
    let start_datetime = take_text(&mut fields, "start_datetime");
    let end_datetime = take_text(&mut fields, "end_datetime");

    let (start_datetime, end_datetime) = match start_datetime {
        Some(start) => {
            let end = end_datetime.unwrap_or_else(|| start.clone());
            (start, end)
        }
        None => derive_bounds(&fields, now),
    };

    CalendarEvent {
        id,
        start_datetime,
        end_datetime,
        event_type,
        extra: fields,
    }
}

/// Calendar date at the head of `raw`, e.g. `2026-10-20` of
/// `2026-10-20 08:00:00`.
fn event_day(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn derive_bounds(fields: &Map<String, Value>, now: DateTime<Utc>) -> (String, String) {
    let Some(date) = text(fields, "event_date").as_deref().and_then(event_day) else {
        let now = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        return (now.clone(), now);
    };
    let date = date.format("%Y-%m-%d");

    let start = text(fields, "start_time")
        .map(|raw| parse_time_of_day(&raw))
        .unwrap_or(TimeOfDay::MIDNIGHT);
    let end = text(fields, "end_time")
        .map(|raw| parse_time_of_day(&raw))
        .unwrap_or(start)
        .max(start);

    (format!("{date}T{start}:00"), format!("{date}T{end}:00"))
}

/// Normalizes every event of a list payload.
pub fn normalize_events(payload: Value, now: DateTime<Utc>) -> Vec<CalendarEvent> {
    ListPayload::decode(payload, &LIST_PROBES)
        .into_items()
        .into_iter()
        .map(|raw| normalize_event(raw, now))
        .collect()
}

/// Earliest event starting at or after `reference`.
///
/// Events whose start does not parse are never upcoming. Ties keep the list
/// order.
pub fn select_upcoming(
    events: &[CalendarEvent],
    reference: DateTime<Utc>,
) -> Option<&CalendarEvent> {
    let mut upcoming = events
        .iter()
        .filter_map(|event| parse_instant(&event.start_datetime).map(|start| (start, event)))
        .filter(|(start, _)| *start >= reference)
        .collect::<Vec<_>>();
    upcoming.sort_by_key(|(start, _)| *start);
    upcoming.into_iter().next().map(|(_, event)| event)
}

/// Builds the class filter from a class listing payload. Classes without a
/// usable id are left out of the filter.
pub fn class_filter_options(payload: Value) -> Vec<ClassFilterOption> {
    ListPayload::decode(payload, &LIST_PROBES)
        .into_items()
        .into_iter()
        .filter_map(|raw| {
            let id = raw.get("id").map_or(0, value_as_i64);
            if id <= 0 {
                return None;
            }
            let name = ["name", "title", "class_name"]
                .iter()
                .find_map(|key| raw.get(*key).and_then(value_as_text))
                .unwrap_or_else(|| format!("Class {id}"));
            Some(ClassFilterOption { id, name })
        })
        .collect()
}
