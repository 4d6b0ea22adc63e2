use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::gateway::RemoteService;
use crate::routes::respond;
use crate::services::roster as roster_service;

pub async fn show_roster<G: RemoteService>(
    gateway: web::Data<G>,
    class_id: web::Path<i64>,
) -> HttpResponse {
    let class_id = class_id.into_inner();
    let result = web::block(move || {
        roster_service::load_class_roster(gateway.get_ref(), class_id, Utc::now())
    })
    .await;

    respond(result)
}
