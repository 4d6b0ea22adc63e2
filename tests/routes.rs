use std::sync::Mutex;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use classes_admin::domain::types::{ClassId, NonEmptyString, PaymentId, PlanId, UserId};
use classes_admin::gateway::errors::{GatewayError, GatewayResult};
use classes_admin::gateway::{
    AdminReader, ClassListQuery, ClassReader, EventReader, InstallmentListQuery,
    InstallmentReader, InstallmentWriter, ProgramReader, RevenueReportQuery, UserListQuery,
    UserReader, UserWriter,
};
use classes_admin::models::config::ServerConfig;
use classes_admin::routes::configure;
use serde_json::{Value, json};

/// In-memory stand-in for the remote data service.
#[derive(Default)]
struct FakeGateway {
    calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EventReader for FakeGateway {
    fn list_events_by_class(&self, class_id: ClassId) -> GatewayResult<Value> {
        self.record(format!("events/class/{class_id}"));
        Ok(json!([{"id": 1, "event_date": "2099-01-05", "start_time": "10:00"}]))
    }

    fn list_upcoming_events(&self, _limit: usize) -> GatewayResult<Value> {
        self.record("events/upcoming");
        Ok(json!({"items": []}))
    }
}

impl ClassReader for FakeGateway {
    fn list_classes(&self, _query: ClassListQuery) -> GatewayResult<Value> {
        Ok(json!({"data": [{"id": 1, "name": "Chess"}]}))
    }
}

impl ProgramReader for FakeGateway {
    fn list_programs(&self) -> GatewayResult<Value> {
        Ok(json!([{"id": "p1", "name": "Chess"}]))
    }
}

impl AdminReader for FakeGateway {
    fn get_dashboard_metrics(&self) -> GatewayResult<Value> {
        Ok(json!({
            "revenue_today": 10,
            "revenue_this_week": 70,
            "revenue_this_month": 300,
            "total_revenue": 1234.5,
            "programs_with_counts": [{"id": "p1", "name": "Chess", "count": 5}]
        }))
    }

    fn get_revenue_report(&self, _query: RevenueReportQuery) -> GatewayResult<Value> {
        Ok(json!({"revenue_by_date": {}}))
    }

    fn get_class_roster(&self, class_id: ClassId) -> GatewayResult<Value> {
        if class_id.get() == 404 {
            return Err(GatewayError::NotFound);
        }
        Ok(json!({"class_name": "Chess", "students": [{"child_name": "Ava"}]}))
    }
}

impl UserReader for FakeGateway {
    fn list_users(&self, _query: UserListQuery) -> GatewayResult<Value> {
        self.record("users");
        Ok(json!({"items": [{"id": 2, "email": "ann@example.com"}], "total": 1}))
    }
}

impl UserWriter for FakeGateway {
    fn delete_user(&self, user_id: UserId) -> GatewayResult<()> {
        self.record(format!("delete users/{user_id}"));
        Ok(())
    }
}

impl InstallmentReader for FakeGateway {
    fn list_installments(&self, _query: InstallmentListQuery) -> GatewayResult<Value> {
        self.record("installments");
        Ok(json!({"data": [{"id": 1, "status": "active", "next_due_date": "2000-01-01"}], "total": 1}))
    }
}

impl InstallmentWriter for FakeGateway {
    fn mark_installment_paid(&self, plan_id: PlanId, payment_id: PaymentId) -> GatewayResult<()> {
        self.record(format!("paid {plan_id}/{payment_id}"));
        Ok(())
    }

    fn cancel_installment(&self, plan_id: PlanId, reason: &NonEmptyString) -> GatewayResult<()> {
        self.record(format!("cancel {plan_id}: {reason}"));
        Ok(())
    }

    fn send_installment_reminder(&self, _plan_id: PlanId) -> GatewayResult<()> {
        Err(GatewayError::Transport("connection reset".into()))
    }
}

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 8080,
        api_base_url: "http://remote.test/api/v1".into(),
        api_token: None,
        request_timeout_secs: 5,
        average_program_price: 100.0,
        upcoming_limit: 10,
        page_size: 20,
        class_filter_limit: 100,
    }
}

macro_rules! app {
    ($gateway:expr) => {
        test::init_service(
            App::new()
                .app_data($gateway.clone())
                .app_data(web::Data::new(server_config()))
                .configure(configure::<FakeGateway>),
        )
        .await
    };
}

#[actix_web::test]
async fn health_is_ok() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn calendar_filters_by_class() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/calendar?class_id=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["classes"][0]["name"], "Chess");
    assert_eq!(body["events"][0]["start_datetime"], "2099-01-05T10:00:00");
    assert_eq!(body["next_event"]["id"], 1);
    assert_eq!(gateway.calls(), vec!["events/class/1".to_string()]);
}

#[actix_web::test]
async fn negative_class_is_bad_request() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/calendar?class_id=-2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn financials_export_is_a_csv_download() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/financials/export")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"financials-"));
    assert!(disposition.ends_with(".csv\""));

    let body = test::read_body(resp).await;
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "Metric,Value\n24h,10\n7d,70\n30d,300\n90d (estimated),900\nYTD,1234.5\n\nProgram,Revenue,Enrollments\nChess,500,5\n"
    );
}

#[actix_web::test]
async fn financials_flag_illustrative_series() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/financials?year=2025")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["year"], 2025);
    assert_eq!(body["monthly"]["is_estimated"], true);
    assert_eq!(body["programs"][0]["average_per_student"], 100);
}

#[actix_web::test]
async fn unknown_roster_is_not_found() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/classes/404/roster")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not found");
}

#[actix_web::test]
async fn roster_falls_back_to_placeholders() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/classes/3/roster")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["class_name"], "Chess");
    assert_eq!(body["students"][0]["childName"], "Ava");
    assert_eq!(body["students"][0]["enrollmentStatus"], "unknown");
    assert_eq!(body["students"][0]["studentId"], "0");
}

#[actix_web::test]
async fn installments_are_classified() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/installments?status=Active&page=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["plans"]["items"][0]["is_overdue"], true);
    assert_eq!(body["plans"]["total"], 1);
    assert_eq!(body["overdue_on_page"], 1);
}

#[actix_web::test]
async fn cancel_refetches_the_listing() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::post()
        .uri("/api/installments/7/cancel")
        .set_json(json!({"reason": "  moved away "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        gateway.calls(),
        vec!["cancel 7: moved away".to_string(), "installments".to_string()]
    );
}

#[actix_web::test]
async fn mark_paid_requires_positive_payment() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::post()
        .uri("/api/installments/7/paid")
        .set_json(json!({"payment_id": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn failed_reminder_is_bad_gateway() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::post()
        .uri("/api/installments/7/remind")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn delete_user_refetches_users() {
    let gateway = web::Data::new(FakeGateway::default());
    let app = app!(gateway);

    let req = test::TestRequest::delete().uri("/api/users/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["users"]["items"][0]["email"], "ann@example.com");
    assert_eq!(
        gateway.calls(),
        vec!["delete users/2".to_string(), "users".to_string()]
    );
}
