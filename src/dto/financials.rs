//! DTOs of the financial reporting screen.

use serde::Serialize;

use crate::domain::program::ProgramRevenue;
use crate::domain::revenue::{MonthlySeries, RevenueTotals};
use crate::normalize::financial::average_per_student;

/// Program revenue row with the derived per-student average.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgramRevenueRow {
    #[serde(flatten)]
    pub program: ProgramRevenue,
    pub average_per_student: i64,
}

impl From<ProgramRevenue> for ProgramRevenueRow {
    fn from(program: ProgramRevenue) -> Self {
        let average_per_student = average_per_student(&program);
        Self {
            program,
            average_per_student,
        }
    }
}

/// Data required to render the financials screen.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FinancialsPageData {
    pub totals: RevenueTotals,
    /// Estimated revenue per program, highest first.
    pub programs: Vec<ProgramRevenueRow>,
    pub monthly: MonthlySeries,
    pub year: i32,
    pub class_id: Option<i64>,
}

/// File handed to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}
