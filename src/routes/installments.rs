use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::forms::installments::{
    CancelPlanForm, InstallmentListForm, InstallmentsQuery, MarkPaidForm,
};
use crate::gateway::RemoteService;
use crate::models::config::ServerConfig;
use crate::routes::respond;
use crate::services::installments as installments_service;

pub async fn show_installments<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    web::Query(form): web::Query<InstallmentListForm>,
) -> HttpResponse {
    let query = InstallmentsQuery::from(form);
    let result = web::block(move || {
        installments_service::list_installments(
            gateway.get_ref(),
            &query,
            Utc::now(),
            server_config.page_size,
        )
    })
    .await;

    respond(result)
}

/// Marks a payment as paid and answers with the refreshed listing.
pub async fn mark_paid<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    plan_id: web::Path<i64>,
    web::Query(list): web::Query<InstallmentListForm>,
    web::Json(form): web::Json<MarkPaidForm>,
) -> HttpResponse {
    let plan_id = plan_id.into_inner();
    let query = InstallmentsQuery::from(list);
    let result = web::block(move || {
        installments_service::mark_paid(
            gateway.get_ref(),
            plan_id,
            form,
            &query,
            Utc::now(),
            server_config.page_size,
        )
    })
    .await;

    respond(result)
}

pub async fn cancel_plan<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    plan_id: web::Path<i64>,
    web::Query(list): web::Query<InstallmentListForm>,
    web::Json(form): web::Json<CancelPlanForm>,
) -> HttpResponse {
    let plan_id = plan_id.into_inner();
    let query = InstallmentsQuery::from(list);
    let result = web::block(move || {
        installments_service::cancel_plan(
            gateway.get_ref(),
            plan_id,
            form,
            &query,
            Utc::now(),
            server_config.page_size,
        )
    })
    .await;

    respond(result)
}

pub async fn send_reminder<G: RemoteService>(
    gateway: web::Data<G>,
    server_config: web::Data<ServerConfig>,
    plan_id: web::Path<i64>,
    web::Query(list): web::Query<InstallmentListForm>,
) -> HttpResponse {
    let plan_id = plan_id.into_inner();
    let query = InstallmentsQuery::from(list);
    let result = web::block(move || {
        installments_service::send_reminder(
            gateway.get_ref(),
            plan_id,
            &query,
            Utc::now(),
            server_config.page_size,
        )
    })
    .await;

    respond(result)
}
