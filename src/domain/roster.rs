//! Class roster view models.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a student's name cannot be resolved.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// Placeholder enrollment status.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Canonical student enrollment entry.
///
/// Every field resolves to a value or an explicit placeholder. Serialized in
/// camelCase because that is what the roster table consumes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    /// Render key. Falls back to the list index on degraded data, so it is not
    /// an identity for mutations.
    pub student_id: String,
    pub child_name: String,
    pub child_age: Option<i32>,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
    pub enrollment_status: String,
    pub enrollment_date: Option<String>,
}

/// Roster page header plus its students.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassRoster {
    pub class_name: String,
    pub program_name: String,
    pub school_name: String,
    pub start_date: String,
    pub end_date: String,
    pub students: Vec<RosterRecord>,
}
