//! Installment payment plans.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::types::{lenient_f64, lenient_i64, lenient_text, lenient_u64, value_as_text};

/// Persisted plan status. `overdue` is derived, see
/// [`crate::normalize::installment::is_overdue`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum InstallmentStatus {
    Active,
    Completed,
    Cancelled,
    Other(String),
    #[default]
    Unknown,
}

impl Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallmentStatus::Active => write!(f, "active"),
            InstallmentStatus::Completed => write!(f, "completed"),
            InstallmentStatus::Cancelled => write!(f, "cancelled"),
            InstallmentStatus::Other(s) => write!(f, "{s}"),
            InstallmentStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for InstallmentStatus {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "active" => InstallmentStatus::Active,
            "completed" => InstallmentStatus::Completed,
            "cancelled" | "canceled" => InstallmentStatus::Cancelled,
            "" => InstallmentStatus::Unknown,
            _ => InstallmentStatus::Other(normalized),
        }
    }
}

impl From<String> for InstallmentStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl Serialize for InstallmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InstallmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value_as_text(&value)
            .map(InstallmentStatus::from)
            .unwrap_or_default())
    }
}

/// Installment plan as listed by the installments service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InstallmentPlan {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub user: Value,
    pub child: Value,
    #[serde(rename = "class")]
    pub class_info: Value,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub paid_count: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_count: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount_paid: f64,
    #[serde(deserialize_with = "lenient_text")]
    pub next_due_date: Option<String>,
    pub status: InstallmentStatus,
}
