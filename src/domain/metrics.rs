//! Dashboard metrics snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{lenient_f64, lenient_text, lenient_u64, lenient_vec};

/// Enrollment count reported for a single program.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProgramCount {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_u64")]
    pub count: u64,
}

/// Flat aggregate snapshot computed by the remote service.
///
/// Read-only: the dashboard re-fetches it wholesale. Every field has a zero
/// default so a partial or malformed payload still renders.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardMetrics {
    #[serde(deserialize_with = "lenient_u64")]
    pub active_enrollments: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_students: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub registrations_24h: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub registrations_7d: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub registrations_30d: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub cancellations_24h: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub cancellations_7d: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub cancellations_30d: u64,
    #[serde(deserialize_with = "lenient_vec")]
    pub programs_with_counts: Vec<ProgramCount>,
    pub monthly_enrollments: Value,
    #[serde(deserialize_with = "lenient_f64")]
    pub revenue_today: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub revenue_this_week: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub revenue_this_month: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "lenient_vec")]
    pub today_classes: Vec<Value>,
}
