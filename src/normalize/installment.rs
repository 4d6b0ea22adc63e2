//! Installment plan decoding and the overdue classifier.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::installment::{InstallmentPlan, InstallmentStatus};
use crate::normalize::payload::{LIST_PROBES, ListPayload};
use crate::normalize::time::parse_instant;

/// A plan is overdue when it is active and its next due date is strictly
/// before `now`. Recomputed on every call; nothing is cached.
pub fn is_overdue(plan: &InstallmentPlan, now: DateTime<Utc>) -> bool {
    if plan.status != InstallmentStatus::Active {
        return false;
    }
    plan.next_due_date
        .as_deref()
        .and_then(parse_instant)
        .is_some_and(|due| due < now)
}

/// Decodes `{data, total}` or a bare array of plans, returning the total.
pub fn installment_plans(payload: Value) -> (usize, Vec<InstallmentPlan>) {
    let decoded = ListPayload::decode(payload, &LIST_PROBES);
    let total = decoded.total();
    (total, decoded.into_records())
}
