use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use classes_admin::domain::installment::{InstallmentPlan, InstallmentStatus};
use classes_admin::domain::metrics::ProgramCount;
use classes_admin::domain::program::Program;
use classes_admin::domain::revenue::RevenueReport;
use classes_admin::normalize::event::{normalize_event, normalize_events, select_upcoming};
use classes_admin::normalize::export::financials_csv;
use classes_admin::normalize::financial::{
    ILLUSTRATIVE_MONTHLY_REVENUE, dashboard_metrics, monthly_series, program_revenue,
    revenue_totals,
};
use classes_admin::normalize::installment::is_overdue;
use classes_admin::normalize::roster::reconcile_roster_entry;
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[test]
fn event_normalization_is_idempotent() {
    let raw = [
        json!({"id": 1, "event_date": "2026-10-20", "start_time": "9:5", "event_type": "class", "room": "B"}),
        json!({"id": 2, "start_datetime": "2026-10-21T10:00:00Z", "type": "camp"}),
        json!({"id": 3}),
    ];

    for event in raw {
        let once = normalize_event(event, now());
        let twice = normalize_event(serde_json::to_value(&once).unwrap(), now());
        assert_eq!(once, twice);
    }
}

#[test]
fn out_of_range_times_are_clamped() {
    let event = normalize_event(
        json!({"event_date": "2026-10-20", "start_time": "25:70", "end_time": "xx:-4"}),
        now(),
    );

    assert_eq!(event.start_datetime, "2026-10-20T23:59:00");
    assert_eq!(event.end_datetime, "2026-10-20T23:59:00");
}

#[test]
fn upcoming_selector_picks_earliest_future_event() {
    let t = now();
    let events = normalize_events(
        json!({"items": [
            {"id": "plus-1h", "start_datetime": iso(t + Duration::hours(1))},
            {"id": "minus-1h", "start_datetime": iso(t - Duration::hours(1))},
            {"id": "plus-2h", "start_datetime": iso(t + Duration::hours(2))},
        ]}),
        t,
    );

    let next = select_upcoming(&events, t).expect("an upcoming event");
    assert_eq!(next.id, json!("plus-1h"));
}

#[test]
fn flat_and_nested_roster_entries_agree() {
    let flat = json!({
        "child_id": 5,
        "child_name": "Ava Stone",
        "child_age": 9,
        "parent_name": "Mia Stone",
        "parent_email": "mia@example.com",
        "parent_phone": "555-0100",
        "enrollment_status": "active",
        "enrollment_date": "2026-09-01"
    });
    let nested = json!({
        "child": {"id": 5, "first_name": "Ava", "last_name": "Stone", "age": 9},
        "parent": {"first_name": "Mia", "last_name": "Stone", "email": "mia@example.com", "phone": "555-0100"},
        "enrollment": {"status": "active", "enrollment_date": "2026-09-01"}
    });

    assert_eq!(
        reconcile_roster_entry(&flat, 0, 2026),
        reconcile_roster_entry(&nested, 0, 2026)
    );
}

#[test]
fn program_revenue_drops_empty_programs_and_sorts() {
    let programs = ["a", "b", "c"]
        .iter()
        .map(|id| Program {
            id: Some(id.to_string()),
            name: id.to_uppercase(),
        })
        .collect::<Vec<_>>();
    let counts = [("a", 0), ("b", 5), ("c", 10)]
        .iter()
        .map(|(id, count)| ProgramCount {
            id: Some(id.to_string()),
            name: None,
            count: *count,
        })
        .collect::<Vec<_>>();

    let rows = program_revenue(&programs, &counts, 150.0);

    let enrollments = rows.iter().map(|row| row.enrollments).collect::<Vec<_>>();
    assert_eq!(enrollments, vec![10, 5]);
}

#[test]
fn monthly_series_buckets_by_month() {
    let report: RevenueReport = serde_json::from_value(json!({
        "revenue_by_date": {
            "2026-03-04": {"tuition": 100},
            "2026-03-28": {"tuition": 120, "fees": 80}
        }
    }))
    .unwrap();

    let series = monthly_series(&report);

    let mut expected = [0.0; 12];
    expected[2] = 300.0;
    assert_eq!(series.values, expected);
    assert!(!series.is_estimated);

    let empty = monthly_series(&RevenueReport::default());
    assert_eq!(empty.values, ILLUSTRATIVE_MONTHLY_REVENUE);
    assert!(empty.is_estimated);
}

#[test]
fn csv_export_starts_with_metric_header() {
    for payload in [json!({}), json!({"revenue_today": "12.5", "total_revenue": 9})] {
        let totals = revenue_totals(&dashboard_metrics(payload));
        let csv = financials_csv(&totals, &[]).unwrap();
        assert_eq!(csv.lines().next(), Some("Metric,Value"));
    }
}

#[test]
fn overdue_depends_on_status_and_due_date() {
    let yesterday = (now() - Duration::days(1)).format("%Y-%m-%d").to_string();
    let mut plan = InstallmentPlan {
        status: InstallmentStatus::from("active"),
        next_due_date: Some(yesterday),
        ..InstallmentPlan::default()
    };
    assert!(is_overdue(&plan, now()));

    plan.status = InstallmentStatus::from("completed");
    assert!(!is_overdue(&plan, now()));
}
