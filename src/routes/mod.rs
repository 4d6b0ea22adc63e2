//! JSON handlers of the admin API.
//!
//! Handlers are generic over the gateway so the same routes serve the HTTP
//! gateway in production and fakes in tests. Gateway calls are blocking and
//! always run on the actix blocking pool.

use actix_web::error::BlockingError;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;

use crate::gateway::RemoteService;
use crate::services::{ServiceError, ServiceResult};

pub mod calendar;
pub mod dashboard;
pub mod financials;
pub mod installments;
pub mod roster;
pub mod users;

/// Maps a service error to the JSON error response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(body),
        ServiceError::Export(_) => HttpResponse::InternalServerError().json(body),
        ServiceError::Upstream(_) => HttpResponse::BadGateway().json(body),
    }
}

/// Renders the outcome of a service call run with [`web::block`].
pub(crate) fn respond<T: Serialize>(result: Result<ServiceResult<T>, BlockingError>) -> HttpResponse {
    match result {
        Ok(Ok(data)) => HttpResponse::Ok().json(data),
        Ok(Err(err)) => error_response(&err),
        Err(err) => {
            log::error!("Blocking task failed: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Registers every route for the gateway type `G`.
pub fn configure<G: RemoteService>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/calendar", web::get().to(calendar::show_calendar::<G>))
            .route("/dashboard", web::get().to(dashboard::show_dashboard::<G>))
            .route("/financials", web::get().to(financials::show_financials::<G>))
            .route(
                "/financials/export",
                web::get().to(financials::export_financials::<G>),
            )
            .route(
                "/classes/{class_id}/roster",
                web::get().to(roster::show_roster::<G>),
            )
            .route(
                "/installments",
                web::get().to(installments::show_installments::<G>),
            )
            .route(
                "/installments/{plan_id}/paid",
                web::post().to(installments::mark_paid::<G>),
            )
            .route(
                "/installments/{plan_id}/cancel",
                web::post().to(installments::cancel_plan::<G>),
            )
            .route(
                "/installments/{plan_id}/remind",
                web::post().to(installments::send_reminder::<G>),
            )
            .route("/users", web::get().to(users::show_users::<G>))
            .route("/users/{user_id}", web::delete().to(users::delete_user::<G>)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Form("bad".into()), StatusCode::BAD_REQUEST),
            (
                ServiceError::TypeConstraint("id".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                ServiceError::Upstream("timeout".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ServiceError::Export("flush".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(error_response(&err).status(), status, "{err}");
        }
    }
}
