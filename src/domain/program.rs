//! Program catalogue entries and the revenue estimate derived from them.

use serde::{Deserialize, Serialize};

/// Program as listed by the programs service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    pub id: Option<String>,
    pub name: String,
}

/// Estimated revenue for one program.
///
/// `revenue` is `enrollments * average price`, not booked revenue.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramRevenue {
    pub id: Option<String>,
    pub name: String,
    pub revenue: f64,
    pub enrollments: u64,
}
