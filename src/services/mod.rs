//! Screen services: fetch through the gateway, normalize, aggregate.

use thiserror::Error;

use crate::gateway::errors::GatewayError;

pub mod calendar;
pub mod dashboard;
pub mod financials;
pub mod installments;
pub mod roster;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("Export failed: {0}")]
    Export(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound => ServiceError::NotFound,
            GatewayError::Unauthorized => ServiceError::Unauthorized,
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    /// Fixed reference instant used across service tests.
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }
}
