//! Financial reporting screen and its CSV export.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::dto::financials::{ExportFile, FinancialsPageData, ProgramRevenueRow};
use crate::forms::financials::FinancialsQuery;
use crate::gateway::{AdminReader, ProgramReader, RevenueGrouping, RevenueReportQuery};
use crate::normalize::export::{CSV_CONTENT_TYPE, financials_csv, financials_filename};
use crate::normalize::financial::{
    dashboard_metrics, monthly_series, program_revenue, programs, revenue_report, revenue_totals,
};
use crate::services::{ServiceError, ServiceResult};

/// Revenue report covering January 1st to December 31st of `year`.
fn yearly_report_query(year: i32, query: &FinancialsQuery) -> ServiceResult<RevenueReportQuery> {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Err(ServiceError::Form(format!("invalid report year {year}")));
    };

    let report = RevenueReportQuery::new(start, end).group_by(RevenueGrouping::Day);
    Ok(match query.class_id {
        Some(class_id) => report.class_id(class_id),
        None => report,
    })
}

/// Loads totals, estimated per-program revenue and the monthly series.
pub fn load_financials<R>(
    repo: &R,
    query: FinancialsQuery,
    now: DateTime<Utc>,
    average_price: f64,
) -> ServiceResult<FinancialsPageData>
where
    R: AdminReader + ProgramReader + ?Sized,
{
    let year = query.year.unwrap_or_else(|| now.year());

    let metrics = repo.get_dashboard_metrics().map_err(|err| {
        log::error!("Failed to load dashboard metrics: {err}");
        err
    })?;
    let metrics = dashboard_metrics(metrics);

    let program_list = repo.list_programs().map_err(|err| {
        log::error!("Failed to list programs: {err}");
        err
    })?;
    let program_list = programs(program_list);

    let report = repo
        .get_revenue_report(yearly_report_query(year, &query)?)
        .map_err(|err| {
            log::error!("Failed to load revenue report for {year}: {err}");
            err
        })?;
    let report = revenue_report(report);

    let rows = program_revenue(&program_list, &metrics.programs_with_counts, average_price);

    Ok(FinancialsPageData {
        totals: revenue_totals(&metrics),
        programs: rows.into_iter().map(ProgramRevenueRow::from).collect(),
        monthly: monthly_series(&report),
        year,
        class_id: query.class_id.map(i64::from),
    })
}

/// Renders the financials screen as the downloadable CSV file.
pub fn export_financials<R>(
    repo: &R,
    query: FinancialsQuery,
    now: DateTime<Utc>,
    average_price: f64,
) -> ServiceResult<ExportFile>
where
    R: AdminReader + ProgramReader + ?Sized,
{
    let data = load_financials(repo, query, now, average_price)?;

    let rows = data
        .programs
        .into_iter()
        .map(|row| row.program)
        .collect::<Vec<_>>();
    let body = financials_csv(&data.totals, &rows).map_err(|err| {
        log::error!("Failed to export financials: {err}");
        err
    })?;

    Ok(ExportFile {
        filename: financials_filename(now),
        content_type: CSV_CONTENT_TYPE,
        body,
    })
}
