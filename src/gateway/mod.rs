//! Access to the remote data service.
//!
//! Readers hand back the raw JSON payload: the service is inconsistent about
//! list shapes, so decoding is left to [`crate::normalize`].

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::types::{ClassId, NonEmptyString, PaymentId, PlanId, UserId};
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first row for APIs paginating with `skip`.
    pub fn skip(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassListQuery {
    pub limit: Option<usize>,
}

impl ClassListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Granularity of the revenue report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueGrouping {
    Day,
}

impl RevenueGrouping {
    pub fn as_str(self) -> &'static str {
        match self {
            RevenueGrouping::Day => "day",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueReportQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group_by: RevenueGrouping,
    pub class_id: Option<ClassId>,
}

impl RevenueReportQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            group_by: RevenueGrouping::Day,
            class_id: None,
        }
    }

    pub fn group_by(mut self, group_by: RevenueGrouping) -> Self {
        self.group_by = group_by;
        self
    }

    pub fn class_id(mut self, class_id: ClassId) -> Self {
        self.class_id = Some(class_id);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallmentListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub overdue: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl InstallmentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn overdue(mut self, overdue: bool) -> Self {
        self.overdue = Some(overdue);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait EventReader {
    fn list_events_by_class(&self, class_id: ClassId) -> GatewayResult<Value>;
    fn list_upcoming_events(&self, limit: usize) -> GatewayResult<Value>;
}

pub trait ClassReader {
    fn list_classes(&self, query: ClassListQuery) -> GatewayResult<Value>;
}

pub trait ProgramReader {
    fn list_programs(&self) -> GatewayResult<Value>;
}

pub trait AdminReader {
    fn get_dashboard_metrics(&self) -> GatewayResult<Value>;
    fn get_revenue_report(&self, query: RevenueReportQuery) -> GatewayResult<Value>;
    fn get_class_roster(&self, class_id: ClassId) -> GatewayResult<Value>;
}

pub trait UserReader {
    fn list_users(&self, query: UserListQuery) -> GatewayResult<Value>;
}

pub trait UserWriter {
    fn delete_user(&self, user_id: UserId) -> GatewayResult<()>;
}

pub trait InstallmentReader {
    fn list_installments(&self, query: InstallmentListQuery) -> GatewayResult<Value>;
}

pub trait InstallmentWriter {
    fn mark_installment_paid(&self, plan_id: PlanId, payment_id: PaymentId) -> GatewayResult<()>;
    fn cancel_installment(&self, plan_id: PlanId, reason: &NonEmptyString) -> GatewayResult<()>;
    fn send_installment_reminder(&self, plan_id: PlanId) -> GatewayResult<()>;
}

/// Everything the admin screens need from the remote service, shareable
/// across actix workers.
pub trait RemoteService:
    EventReader
    + ClassReader
    + ProgramReader
    + AdminReader
    + UserReader
    + UserWriter
    + InstallmentReader
    + InstallmentWriter
    + Send
    + Sync
    + 'static
{
}

impl<T> RemoteService for T where
    T: EventReader
        + ClassReader
        + ProgramReader
        + AdminReader
        + UserReader
        + UserWriter
        + InstallmentReader
        + InstallmentWriter
        + Send
        + Sync
        + 'static
{
}
