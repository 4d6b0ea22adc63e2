//! Roster field reconciliation.
//!
//! Roster entries arrive either flat (`child_name`, `parent_email`, ...) or
//! nested (`child: {first_name, ...}`, `parent: {...}`, `enrollment: {status}`).
//! Each display field has a fixed resolution order: the flat field, then the
//! nested field, then a computed value, then a placeholder. No entry is ever
//! dropped.

use serde_json::Value;

use crate::domain::roster::{ClassRoster, RosterRecord, UNKNOWN_STATUS, UNKNOWN_STUDENT};
use crate::domain::types::value_as_text;
use crate::normalize::payload::{ListPayload, ROSTER_PROBES};

/// First pointer resolving to non-blank scalar text.
fn first_text(raw: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .find_map(|pointer| raw.pointer(pointer).and_then(value_as_text))
}

/// `first last` joined by a single space, `None` when both are blank.
fn joined_name(raw: &Value, first: &str, last: &str) -> Option<String> {
    let first = first_text(raw, &[first]).unwrap_or_default();
    let last = first_text(raw, &[last]).unwrap_or_default();
    let name = format!("{first} {last}").trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn age_at(raw: &Value, pointer: &str) -> Option<i32> {
    match raw.pointer(pointer)? {
        Value::Number(n) => n.as_f64().map(|age| age.floor() as i32),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|age| age.floor() as i32),
        _ => None,
    }
}

/// Year-granular age: `current_year - birth_year`, not day precise.
fn age_from_birth_date(raw: &Value, current_year: i32) -> Option<i32> {
    let birth_date = first_text(
        raw,
        &["/child_date_of_birth", "/date_of_birth", "/child/date_of_birth"],
    )?;
    let birth_year = birth_date.get(..4)?.parse::<i32>().ok()?;
    Some(current_year - birth_year)
}

/// Reconciles one raw roster entry. `index` is the entry position, used as the
/// last-resort render key.
pub fn reconcile_roster_entry(raw: &Value, index: usize, current_year: i32) -> RosterRecord {
    let student_id = first_text(raw, &["/child_id", "/child/id", "/enrollment_id"])
        .unwrap_or_else(|| index.to_string());

    let child_name = first_text(raw, &["/child_name", "/child/name"])
        .or_else(|| joined_name(raw, "/child/first_name", "/child/last_name"))
        .unwrap_or_else(|| UNKNOWN_STUDENT.to_string());

    let child_age = age_at(raw, "/child_age")
        .or_else(|| age_at(raw, "/child/age"))
        .or_else(|| age_from_birth_date(raw, current_year));

    let parent_name = first_text(raw, &["/parent_name", "/parent/name"])
        .or_else(|| joined_name(raw, "/parent/first_name", "/parent/last_name"))
        .unwrap_or_default();

    let parent_email = first_text(raw, &["/parent_email", "/parent/email"]).unwrap_or_default();
    let parent_phone = first_text(raw, &["/parent_phone", "/parent/phone"]).unwrap_or_default();

    let enrollment_status = first_text(raw, &["/enrollment_status", "/status", "/enrollment/status"])
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

    let enrollment_date = first_text(
        raw,
        &[
            "/enrollment_date",
            "/enrollment/enrollment_date",
            "/enrollment/created_at",
        ],
    );

    RosterRecord {
        student_id,
        child_name,
        child_age,
        parent_name,
        parent_email,
        parent_phone,
        enrollment_status,
        enrollment_date,
    }
}

/// Builds the roster screen model from a `getClassRoster` payload.
pub fn reconcile_roster(payload: Value, current_year: i32) -> ClassRoster {
    let header = |pointers: &[&str]| first_text(&payload, pointers).unwrap_or_default();
    let class_name = header(&["/class_name", "/class/name"]);
    let program_name = header(&["/program_name", "/program/name"]);
    let school_name = header(&["/school_name", "/school/name"]);
    let start_date = header(&["/start_date", "/class/start_date"]);
    let end_date = header(&["/end_date", "/class/end_date"]);

    let students = ListPayload::decode(payload, &ROSTER_PROBES)
        .into_items()
        .iter()
        .enumerate()
        .map(|(index, raw)| reconcile_roster_entry(raw, index, current_year))
        .collect();

    ClassRoster {
        class_name,
        program_name,
        school_name,
        start_date,
        end_date,
        students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_and_nested_shapes_agree() {
        let flat = json!({
            "child_id": 7,
            "child_name": "Ava Smith",
            "child_age": 8,
            "parent_name": "Jane Smith",
            "parent_email": "jane@example.com",
            "parent_phone": "555-0100",
            "enrollment_status": "active",
            "enrollment_date": "2026-09-01"
        });
        let nested = json!({
            "child": {"id": 7, "first_name": "Ava", "last_name": "Smith", "date_of_birth": "2018-04-02"},
            "parent": {"first_name": "Jane", "last_name": "Smith", "email": "jane@example.com", "phone": "555-0100"},
            "enrollment": {"status": "active", "enrollment_date": "2026-09-01"}
        });

        assert_eq!(
            reconcile_roster_entry(&flat, 0, 2026),
            reconcile_roster_entry(&nested, 0, 2026)
        );
    }

    #[test]
    fn flat_fields_win_over_nested() {
        let raw = json!({
            "child_name": "Flat Name",
            "child": {"first_name": "Nested", "last_name": "Name", "id": 3},
            "child_id": 11
        });

        let record = reconcile_roster_entry(&raw, 0, 2026);

        assert_eq!(record.child_name, "Flat Name");
        assert_eq!(record.student_id, "11");
    }

    #[test]
    fn computed_name_is_trimmed() {
        let raw = json!({"child": {"first_name": "Mia", "last_name": ""}});

        assert_eq!(reconcile_roster_entry(&raw, 0, 2026).child_name, "Mia");
    }

    #[test]
    fn empty_entry_falls_back_everywhere() {
        let record = reconcile_roster_entry(&json!({}), 4, 2026);

        assert_eq!(record.student_id, "4");
        assert_eq!(record.child_name, UNKNOWN_STUDENT);
        assert_eq!(record.child_age, None);
        assert_eq!(record.parent_email, "");
        assert_eq!(record.enrollment_status, UNKNOWN_STATUS);
    }

    #[test]
    fn student_id_chain() {
        let nested = json!({"child": {"id": "c-2"}, "enrollment_id": 99});
        let enrollment = json!({"enrollment_id": 99});

        assert_eq!(reconcile_roster_entry(&nested, 0, 2026).student_id, "c-2");
        assert_eq!(reconcile_roster_entry(&enrollment, 0, 2026).student_id, "99");
    }

    #[test]
    fn age_from_birth_year() {
        let raw = json!({"child_date_of_birth": "2019-12-31"});

        assert_eq!(reconcile_roster_entry(&raw, 0, 2026).child_age, Some(7));
    }

    #[test]
    fn roster_payload_reads_enrollments_and_header() {
        let roster = reconcile_roster(
            json!({
                "class_name": "Chess Club",
                "program_name": "After School",
                "school_name": "Lincoln",
                "start_date": "2026-09-01",
                "enrollments": [{"child_name": "A"}, {"child_name": "B"}]
            }),
            2026,
        );

        assert_eq!(roster.class_name, "Chess Club");
        assert_eq!(roster.end_date, "");
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.students[1].student_id, "1");
    }
}
