//! Installment plans screen and its actions.
//!
//! Actions are confirmed by the remote service and followed by a full
//! re-fetch of the listing; nothing is patched locally.

use chrono::{DateTime, Utc};

use crate::domain::types::{NonEmptyString, PaymentId, PlanId};
use crate::dto::installments::{InstallmentPlanView, InstallmentsPageData};
use crate::forms::installments::{CancelPlanForm, InstallmentsQuery, MarkPaidForm};
use crate::gateway::{InstallmentListQuery, InstallmentReader, InstallmentWriter};
use crate::normalize::installment::{installment_plans, is_overdue};
use crate::pagination::Paginated;
use crate::services::ServiceResult;

fn remote_query(query: &InstallmentsQuery, page_size: usize) -> InstallmentListQuery {
    let mut remote = InstallmentListQuery::new().paginate(query.page, page_size);
    if let Some(status) = &query.status {
        remote = remote.status(status.as_str());
    }
    if let Some(search) = &query.search {
        remote = remote.search(search.as_str());
    }
    if let Some(overdue) = query.overdue {
        remote = remote.overdue(overdue);
    }
    remote
}

/// Loads one page of plans, classifying each against `now`.
pub fn list_installments<R>(
    repo: &R,
    query: &InstallmentsQuery,
    now: DateTime<Utc>,
    page_size: usize,
) -> ServiceResult<InstallmentsPageData>
where
    R: InstallmentReader + ?Sized,
{
    let payload = repo
        .list_installments(remote_query(query, page_size))
        .map_err(|err| {
            log::error!("Failed to list installment plans: {err}");
            err
        })?;

    let (total, plans) = installment_plans(payload);
    let plans = plans
        .into_iter()
        .map(|plan| InstallmentPlanView {
            is_overdue: is_overdue(&plan, now),
            plan,
        })
        .collect::<Vec<_>>();
    let overdue_on_page = plans.iter().filter(|view| view.is_overdue).count();

    Ok(InstallmentsPageData {
        plans: Paginated::new(plans, query.page, total, page_size),
        overdue_on_page,
        search_query: query.search.clone(),
    })
}

/// Marks one scheduled payment of a plan as paid.
pub fn mark_paid<R>(
    repo: &R,
    plan_id: i64,
    form: MarkPaidForm,
    query: &InstallmentsQuery,
    now: DateTime<Utc>,
    page_size: usize,
) -> ServiceResult<InstallmentsPageData>
where
    R: InstallmentReader + InstallmentWriter + ?Sized,
{
    let plan_id = PlanId::new(plan_id)?;
    let payment_id = PaymentId::try_from(form)?;

    repo.mark_installment_paid(plan_id, payment_id)
        .map_err(|err| {
            log::error!("Failed to mark payment {payment_id} of plan {plan_id} as paid: {err}");
            err
        })?;

    list_installments(repo, query, now, page_size)
}

/// Cancels a plan with the reason given by the administrator.
pub fn cancel_plan<R>(
    repo: &R,
    plan_id: i64,
    form: CancelPlanForm,
    query: &InstallmentsQuery,
    now: DateTime<Utc>,
    page_size: usize,
) -> ServiceResult<InstallmentsPageData>
where
    R: InstallmentReader + InstallmentWriter + ?Sized,
{
    let plan_id = PlanId::new(plan_id)?;
    let reason = NonEmptyString::try_from(form)?;

    repo.cancel_installment(plan_id, &reason).map_err(|err| {
        log::error!("Failed to cancel plan {plan_id}: {err}");
        err
    })?;

    list_installments(repo, query, now, page_size)
}

pub fn send_reminder<R>(
    repo: &R,
    plan_id: i64,
    query: &InstallmentsQuery,
    now: DateTime<Utc>,
    page_size: usize,
) -> ServiceResult<InstallmentsPageData>
where
    R: InstallmentReader + InstallmentWriter + ?Sized,
{
    let plan_id = PlanId::new(plan_id)?;

    repo.send_installment_reminder(plan_id).map_err(|err| {
        log::error!("Failed to send reminder for plan {plan_id}: {err}");
        err
    })?;

    list_installments(repo, query, now, page_size)
}
