use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::forms::calendar::{CalendarQuery, CalendarQueryForm};
use crate::gateway::RemoteService;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, respond};
use crate::services::{ServiceError, calendar as calendar_service};

pub async fn show_calendar<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    web::Query(form): web::Query<CalendarQueryForm>,
) -> HttpResponse {
    let query = match CalendarQuery::try_from(form) {
        Ok(query) => query,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    let result = web::block(move || {
        calendar_service::load_calendar(
            gateway.get_ref(),
            query,
            Utc::now(),
            server_config.upcoming_limit,
            server_config.class_filter_limit,
        )
    })
    .await;

    respond(result)
}
