//! Calendar screen: class filter, events and the next upcoming event.

use chrono::{DateTime, Utc};

use crate::dto::calendar::CalendarPageData;
use crate::forms::calendar::CalendarQuery;
use crate::gateway::{ClassListQuery, ClassReader, EventReader};
use crate::normalize::event::{class_filter_options, normalize_events, select_upcoming};
use crate::services::ServiceResult;

/// Loads the calendar for the selected class, or the upcoming events when no
/// class is selected.
pub fn load_calendar<R>(
    repo: &R,
    query: CalendarQuery,
    now: DateTime<Utc>,
    upcoming_limit: usize,
    class_filter_limit: usize,
) -> ServiceResult<CalendarPageData>
where
    R: ClassReader + EventReader + ?Sized,
{
    let classes = repo
        .list_classes(ClassListQuery::new().limit(class_filter_limit))
        .map_err(|err| {
            log::error!("Failed to list classes: {err}");
            err
        })?;

    let events = match query.class_id {
        Some(class_id) => repo.list_events_by_class(class_id),
        None => repo.list_upcoming_events(upcoming_limit),
    }
    .map_err(|err| {
        log::error!("Failed to list events: {err}");
        err
    })?;

    let events = normalize_events(events, now);
    let next_event = select_upcoming(&events, now).cloned();

    Ok(CalendarPageData {
        classes: class_filter_options(classes),
        selected_class: query.class_id.map(i64::from),
        events,
        next_event,
    })
}
