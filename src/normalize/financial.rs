//! Financial aggregation for the reporting screen.
//!
//! Two figures here are approximations and are flagged as such in the view
//! models: the 90 day total (`30d * 3`) and the illustrative monthly series
//! shown when the report holds no revenue at all.

use serde_json::Value;

use crate::domain::metrics::{DashboardMetrics, ProgramCount};
use crate::domain::program::{Program, ProgramRevenue};
use crate::domain::revenue::{MonthlySeries, RevenueBucket, RevenueReport, RevenueTotal, RevenueTotals};
use crate::domain::types::value_as_text;
use crate::normalize::payload::{LIST_PROBES, ListPayload};

/// Multiplier turning the 30 day figure into the 90 day estimate.
pub const QUARTER_ESTIMATE_MULTIPLIER: f64 = 3.0;

/// Placeholder series rendered when the report has no revenue.
pub const ILLUSTRATIVE_MONTHLY_REVENUE: [f64; 12] = [
    1200.0, 1900.0, 1500.0, 2100.0, 2400.0, 2200.0, 1800.0, 2600.0, 3100.0, 2900.0, 2700.0, 3300.0,
];

/// Unwraps `{data: {...}}` envelopes around single-object payloads.
fn unwrap_object(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decodes the dashboard metrics snapshot; malformed payloads give zeroes.
pub fn dashboard_metrics(payload: Value) -> DashboardMetrics {
    match serde_json::from_value(unwrap_object(payload)) {
        Ok(metrics) => metrics,
        Err(err) => {
            log::warn!("Dashboard metrics payload not understood, using zeroes: {err}");
            DashboardMetrics::default()
        }
    }
}

/// Decodes a revenue-by-date report; malformed payloads give an empty report.
pub fn revenue_report(payload: Value) -> RevenueReport {
    match serde_json::from_value(unwrap_object(payload)) {
        Ok(report) => report,
        Err(err) => {
            log::warn!("Revenue report payload not understood, using empty report: {err}");
            RevenueReport::default()
        }
    }
}

/// Decodes the program list. Entries with neither id nor name are dropped.
pub fn programs(payload: Value) -> Vec<Program> {
    ListPayload::decode(payload, &LIST_PROBES)
        .into_items()
        .into_iter()
        .filter_map(|raw| {
            let id = raw.get("id").and_then(value_as_text);
            let name = ["name", "title"]
                .iter()
                .find_map(|key| raw.get(*key).and_then(value_as_text));
            match (id, name) {
                (None, None) => None,
                (id, name) => Some(Program {
                    id,
                    name: name.unwrap_or_default(),
                }),
            }
        })
        .collect()
}

/// Revenue per reporting bucket. `90d` is `30d * 3` and flagged as estimated.
pub fn revenue_totals(metrics: &DashboardMetrics) -> RevenueTotals {
    let entries = RevenueBucket::ALL
        .iter()
        .map(|&bucket| {
            let amount = match bucket {
                RevenueBucket::Last24Hours => metrics.revenue_today,
                RevenueBucket::Last7Days => metrics.revenue_this_week,
                RevenueBucket::Last30Days => metrics.revenue_this_month,
                RevenueBucket::Last90Days => {
                    metrics.revenue_this_month * QUARTER_ESTIMATE_MULTIPLIER
                }
                RevenueBucket::YearToDate => metrics.total_revenue,
            };
            RevenueTotal {
                bucket,
                amount,
                is_estimated: bucket.is_estimate(),
            }
        })
        .collect();

    RevenueTotals { entries }
}

fn enrollment_count(program: &Program, counts: &[ProgramCount]) -> u64 {
    let by_id = program.id.as_deref().and_then(|id| {
        counts
            .iter()
            .find(|count| count.id.as_deref() == Some(id))
    });
    let by_name = || {
        let name = program.name.trim();
        if name.is_empty() {
            return None;
        }
        counts.iter().find(|count| {
            count
                .name
                .as_deref()
                .is_some_and(|candidate| candidate.trim().eq_ignore_ascii_case(name))
        })
    };
    by_id.or_else(by_name).map_or(0, |count| count.count)
}

/// Joins programs with their enrollment counts (by id, else by name).
///
/// Revenue is `enrollments * average_price`. Programs without enrollments are
/// dropped; the rest are sorted by revenue, highest first.
pub fn program_revenue(
    programs: &[Program],
    counts: &[ProgramCount],
    average_price: f64,
) -> Vec<ProgramRevenue> {
    let mut rows = programs
        .iter()
        .filter_map(|program| {
            let enrollments = enrollment_count(program, counts);
            (enrollments > 0).then(|| ProgramRevenue {
                id: program.id.clone(),
                name: program.name.clone(),
                revenue: enrollments as f64 * average_price,
                enrollments,
            })
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// `round(revenue / enrollments)`, `0` without enrollments.
pub fn average_per_student(row: &ProgramRevenue) -> i64 {
    if row.enrollments == 0 {
        return 0;
    }
    (row.revenue / row.enrollments as f64).round() as i64
}

fn sum_numeric_leaves(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Array(items) => items.iter().map(sum_numeric_leaves).sum(),
        Value::Object(map) => map.values().map(sum_numeric_leaves).sum(),
        _ => 0.0,
    }
}

/// Zero-based month of a `YYYY-MM[-DD...]` key.
fn month_index(date_key: &str) -> Option<usize> {
    let month = date_key.split('-').nth(1)?;
    let month = month.get(..2).unwrap_or(month).parse::<usize>().ok()?;
    (1..=12).contains(&month).then(|| month - 1)
}

/// Buckets report entries into January..December.
///
/// A series without any revenue is replaced by
/// [`ILLUSTRATIVE_MONTHLY_REVENUE`] with `is_estimated` set.
pub fn monthly_series(report: &RevenueReport) -> MonthlySeries {
    let mut values = [0.0; 12];
    for (date_key, entry) in &report.revenue_by_date {
        match month_index(date_key) {
            Some(month) => values[month] += sum_numeric_leaves(entry),
            None => log::debug!("Skipping revenue entry with unparsable date {date_key}"),
        }
    }

    if values.iter().all(|value| *value == 0.0) {
        log::info!("Revenue report is empty, showing the illustrative monthly series");
        return MonthlySeries {
            values: ILLUSTRATIVE_MONTHLY_REVENUE,
            is_estimated: true,
        };
    }

    MonthlySeries {
        values,
        is_estimated: false,
    }
}
