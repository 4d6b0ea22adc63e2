//! DTOs of the installment plans screen.

use serde::Serialize;

use crate::domain::installment::InstallmentPlan;
use crate::pagination::Paginated;

/// Plan plus the overdue flag derived at request time.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InstallmentPlanView {
    #[serde(flatten)]
    pub plan: InstallmentPlan,
    pub is_overdue: bool,
}

/// Data required to render the installment plans table.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InstallmentsPageData {
    pub plans: Paginated<InstallmentPlanView>,
    pub overdue_on_page: usize,
    pub search_query: Option<String>,
}
