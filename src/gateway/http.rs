//! HTTP implementation of the gateway traits.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{Value, json};

use crate::domain::types::{ClassId, NonEmptyString, PaymentId, PlanId, UserId};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{
    AdminReader, ClassListQuery, ClassReader, EventReader, InstallmentListQuery,
    InstallmentReader, InstallmentWriter, ProgramReader, RevenueReportQuery, UserListQuery,
    UserReader, UserWriter,
};
use crate::models::config::ServerConfig;

/// Blocking client for the remote data service.
///
/// Calls block the current thread; from actix handlers run them on
/// `web::block`.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Arc<str>,
    token: Option<Arc<str>>,
}

impl HttpGateway {
    pub fn new(config: &ServerConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').into(),
            token: config
                .api_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(Into::into),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn execute(&self, builder: RequestBuilder) -> GatewayResult<reqwest::blocking::Response> {
        let response = builder.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        log::warn!("Remote service answered {status}");
        Err(GatewayError::from_status(status, body))
    }

    fn get_json(&self, path: &str, query: &[(&str, String)]) -> GatewayResult<Value> {
        let response = self.execute(self.request(Method::GET, path).query(query))?;
        let body = response.text()?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }

    fn send_command(&self, method: Method, path: &str, body: Option<Value>) -> GatewayResult<()> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute(builder)?;
        Ok(())
    }
}

fn push_opt<T: ToString>(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

impl EventReader for HttpGateway {
    fn list_events_by_class(&self, class_id: ClassId) -> GatewayResult<Value> {
        self.get_json(&format!("events/class/{class_id}"), &[])
    }

    fn list_upcoming_events(&self, limit: usize) -> GatewayResult<Value> {
        self.get_json("events/upcoming", &[("limit", limit.to_string())])
    }
}

impl ClassReader for HttpGateway {
    fn list_classes(&self, query: ClassListQuery) -> GatewayResult<Value> {
        let mut params = Vec::new();
        push_opt(&mut params, "limit", query.limit);
        self.get_json("classes", &params)
    }
}

impl ProgramReader for HttpGateway {
    fn list_programs(&self) -> GatewayResult<Value> {
        self.get_json("programs", &[])
    }
}

impl AdminReader for HttpGateway {
    fn get_dashboard_metrics(&self) -> GatewayResult<Value> {
        self.get_json("admin/dashboard/metrics", &[])
    }

    fn get_revenue_report(&self, query: RevenueReportQuery) -> GatewayResult<Value> {
        let mut params = vec![
            ("start_date", query.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", query.end_date.format("%Y-%m-%d").to_string()),
            ("group_by", query.group_by.as_str().to_string()),
        ];
        push_opt(&mut params, "class_id", query.class_id);
        self.get_json("admin/reports/revenue", &params)
    }

    fn get_class_roster(&self, class_id: ClassId) -> GatewayResult<Value> {
        self.get_json(&format!("admin/classes/{class_id}/roster"), &[])
    }
}

impl UserReader for HttpGateway {
    fn list_users(&self, query: UserListQuery) -> GatewayResult<Value> {
        let mut params = Vec::new();
        if let Some(pagination) = &query.pagination {
            params.push(("skip", pagination.skip().to_string()));
            params.push(("limit", pagination.per_page.to_string()));
        }
        push_opt(&mut params, "role", query.role);
        push_opt(&mut params, "is_active", query.is_active);
        push_opt(&mut params, "search", query.search);
        self.get_json("users", &params)
    }
}

impl UserWriter for HttpGateway {
    fn delete_user(&self, user_id: UserId) -> GatewayResult<()> {
        self.send_command(Method::DELETE, &format!("users/{user_id}"), None)
    }
}

impl InstallmentReader for HttpGateway {
    fn list_installments(&self, query: InstallmentListQuery) -> GatewayResult<Value> {
        let mut params = Vec::new();
        if let Some(pagination) = &query.pagination {
            params.push(("page", pagination.page.to_string()));
            params.push(("limit", pagination.per_page.to_string()));
        }
        push_opt(&mut params, "status", query.status);
        push_opt(&mut params, "search", query.search);
        push_opt(&mut params, "overdue", query.overdue);
        self.get_json("installments", &params)
    }
}

impl InstallmentWriter for HttpGateway {
    fn mark_installment_paid(&self, plan_id: PlanId, payment_id: PaymentId) -> GatewayResult<()> {
        self.send_command(
            Method::POST,
            &format!("installments/{plan_id}/payments/{payment_id}/mark-paid"),
            None,
        )
    }

    fn cancel_installment(&self, plan_id: PlanId, reason: &NonEmptyString) -> GatewayResult<()> {
        self.send_command(
            Method::POST,
            &format!("installments/{plan_id}/cancel"),
            Some(json!({ "reason": reason.as_str() })),
        )
    }

    fn send_installment_reminder(&self, plan_id: PlanId) -> GatewayResult<()> {
        self.send_command(
            Method::POST,
            &format!("installments/{plan_id}/send-reminder"),
            None,
        )
    }
}
