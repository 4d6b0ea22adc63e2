//! Dashboard screen.

use chrono::{DateTime, Utc};

use crate::dto::dashboard::DashboardPageData;
use crate::gateway::{AdminReader, EventReader};
use crate::normalize::event::{normalize_events, select_upcoming};
use crate::normalize::financial::{dashboard_metrics, revenue_totals};
use crate::services::ServiceResult;

/// Loads the metrics snapshot and the upcoming events.
pub fn load_dashboard<R>(
    repo: &R,
    now: DateTime<Utc>,
    upcoming_limit: usize,
) -> ServiceResult<DashboardPageData>
where
    R: AdminReader + EventReader + ?Sized,
{
    let metrics = repo.get_dashboard_metrics().map_err(|err| {
        log::error!("Failed to load dashboard metrics: {err}");
        err
    })?;
    let metrics = dashboard_metrics(metrics);

    let events = repo.list_upcoming_events(upcoming_limit).map_err(|err| {
        log::error!("Failed to list upcoming events: {err}");
        err
    })?;
    let upcoming_events = normalize_events(events, now);
    let next_event = select_upcoming(&upcoming_events, now).cloned();

    Ok(DashboardPageData {
        revenue: revenue_totals(&metrics),
        metrics,
        upcoming_events,
        next_event,
    })
}
