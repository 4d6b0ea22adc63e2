//! CSV export of the financials screen.
//!
//! Layout is fixed: a `Metric,Value` block, one blank line, then a
//! `Program,Revenue,Enrollments` block.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::program::ProgramRevenue;
use crate::domain::revenue::RevenueTotals;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush csv buffer: {0}")]
    Flush(String),

    #[error("csv output is not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Download name for an export taken at `now`.
pub fn financials_filename(now: DateTime<Utc>) -> String {
    format!("financials-{}.csv", now.format("%Y-%m-%d"))
}

fn write_block<I>(header: &[&str], rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Serializes the totals and per-program rows.
pub fn financials_csv(
    totals: &RevenueTotals,
    programs: &[ProgramRevenue],
) -> Result<String, ExportError> {
    let metrics = write_block(
        &["Metric", "Value"],
        totals.entries.iter().map(|entry| {
            let label = if entry.is_estimated {
                format!("{} (estimated)", entry.bucket)
            } else {
                entry.bucket.to_string()
            };
            vec![label, entry.amount.to_string()]
        }),
    )?;

    let programs = write_block(
        &["Program", "Revenue", "Enrollments"],
        programs.iter().map(|row| {
            vec![
                row.name.clone(),
                row.revenue.to_string(),
                row.enrollments.to_string(),
            ]
        }),
    )?;

    Ok(format!("{metrics}\n{programs}"))
}
