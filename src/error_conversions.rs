//! Error conversion glue between the `data` layer and the services.
//!
//! The view-model layer must not depend on service error types, so the
//! conversions live here and are only compiled with the `server` feature.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::normalize::export::ExportError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<ExportError> for ServiceError {
    fn from(val: ExportError) -> Self {
        ServiceError::Export(val.to_string())
    }
}
