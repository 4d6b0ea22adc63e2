//! Filters and actions of the installment plans screen.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{NonEmptyString, PaymentId};
use crate::forms::{FormError, filter_text, page_number};

/// Query string of `GET /api/installments`.
#[derive(Debug, Default, Deserialize)]
pub struct InstallmentListForm {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub overdue: Option<bool>,
}

/// Cleaned installment table filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentsQuery {
    pub page: usize,
    /// Lower-cased status filter, e.g. `active`.
    pub status: Option<String>,
    pub search: Option<String>,
    /// Only `Some(true)` narrows the listing.
    pub overdue: Option<bool>,
}

impl Default for InstallmentsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            status: None,
            search: None,
            overdue: None,
        }
    }
}

impl From<InstallmentListForm> for InstallmentsQuery {
    fn from(form: InstallmentListForm) -> Self {
        Self {
            page: page_number(form.page),
            status: filter_text(form.status).map(|status| status.to_lowercase()),
            search: filter_text(form.search),
            overdue: form.overdue.filter(|overdue| *overdue),
        }
    }
}

/// Body of `POST /api/installments/{id}/paid`.
#[derive(Debug, Deserialize, Validate)]
pub struct MarkPaidForm {
    #[validate(range(min = 1))]
    pub payment_id: i64,
}

impl TryFrom<MarkPaidForm> for PaymentId {
    type Error = FormError;

    fn try_from(form: MarkPaidForm) -> Result<Self, Self::Error> {
        form.validate()?;
        PaymentId::new(form.payment_id).map_err(|_| FormError::InvalidPaymentId)
    }
}

/// Body of `POST /api/installments/{id}/cancel`.
#[derive(Debug, Deserialize, Validate)]
pub struct CancelPlanForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

impl TryFrom<CancelPlanForm> for NonEmptyString {
    type Error = FormError;

    fn try_from(form: CancelPlanForm) -> Result<Self, Self::Error> {
        form.validate()?;
        NonEmptyString::new(form.reason).map_err(|_| FormError::InvalidReason)
    }
}
