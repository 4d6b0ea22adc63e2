use serde::Serialize;

use crate::domain::event::CalendarEvent;
use crate::domain::metrics::DashboardMetrics;
use crate::domain::revenue::RevenueTotals;

/// Data required to render the dashboard.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DashboardPageData {
    pub metrics: DashboardMetrics,
    pub revenue: RevenueTotals,
    pub upcoming_events: Vec<CalendarEvent>,
    pub next_event: Option<CalendarEvent>,
}
