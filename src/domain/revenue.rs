//! Financial reporting view models.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed reporting windows shown on the financials screen.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RevenueBucket {
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "YTD")]
    YearToDate,
}

impl RevenueBucket {
    /// Buckets in display and export order.
    pub const ALL: [RevenueBucket; 5] = [
        RevenueBucket::Last24Hours,
        RevenueBucket::Last7Days,
        RevenueBucket::Last30Days,
        RevenueBucket::Last90Days,
        RevenueBucket::YearToDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RevenueBucket::Last24Hours => "24h",
            RevenueBucket::Last7Days => "7d",
            RevenueBucket::Last30Days => "30d",
            RevenueBucket::Last90Days => "90d",
            RevenueBucket::YearToDate => "YTD",
        }
    }

    /// The 90 day figure is extrapolated from the 30 day one.
    pub fn is_estimate(self) -> bool {
        matches!(self, RevenueBucket::Last90Days)
    }
}

impl Display for RevenueBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Amount for one bucket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RevenueTotal {
    pub bucket: RevenueBucket,
    pub amount: f64,
    pub is_estimated: bool,
}

/// Totals for every bucket, in [`RevenueBucket::ALL`] order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueTotals {
    pub entries: Vec<RevenueTotal>,
}

impl RevenueTotals {
    /// Amount reported for `bucket`, `0.0` when absent.
    pub fn amount(&self, bucket: RevenueBucket) -> f64 {
        self.entries
            .iter()
            .find(|entry| entry.bucket == bucket)
            .map_or(0.0, |entry| entry.amount)
    }
}

/// Twelve month (January..December) revenue series.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlySeries {
    pub values: [f64; 12],
    /// Set when `values` is the illustrative placeholder rather than real data.
    pub is_estimated: bool,
}

/// Revenue report keyed by date string.
///
/// Each entry is a map of numeric leaves (e.g. per payment method); the values
/// are kept raw and summed by the aggregator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueReport {
    #[serde(default)]
    pub revenue_by_date: BTreeMap<String, Value>,
}
