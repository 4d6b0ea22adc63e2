use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::gateway::RemoteService;
use crate::models::config::ServerConfig;
use crate::routes::respond;
use crate::services::dashboard as dashboard_service;

pub async fn show_dashboard<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
) -> HttpResponse {
    let result = web::block(move || {
        dashboard_service::load_dashboard(
            gateway.get_ref(),
            Utc::now(),
            server_config.upcoming_limit,
        )
    })
    .await;

    respond(result)
}
