use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::forms::financials::{FinancialsQuery, FinancialsQueryForm};
use crate::gateway::RemoteService;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, respond};
use crate::services::{ServiceError, financials as financials_service};

pub async fn show_financials<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    web::Query(form): web::Query<FinancialsQueryForm>,
) -> HttpResponse {
    let query = match FinancialsQuery::try_from(form) {
        Ok(query) => query,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    let result = web::block(move || {
        financials_service::load_financials(
            gateway.get_ref(),
            query,
            Utc::now(),
            server_config.average_program_price,
        )
    })
    .await;

    respond(result)
}

/// Downloads the financials screen as `financials-<date>.csv`.
pub async fn export_financials<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    web::Query(form): web::Query<FinancialsQueryForm>,
) -> HttpResponse {
    let query = match FinancialsQuery::try_from(form) {
        Ok(query) => query,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    let result = web::block(move || {
        financials_service::export_financials(
            gateway.get_ref(),
            query,
            Utc::now(),
            server_config.average_program_price,
        )
    })
    .await;

    match result {
        Ok(Ok(file)) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header(ContentDisposition::attachment(file.filename))
            .body(file.body),
        other => respond(other.map(|inner| inner.map(|_| ()))),
    }
}
