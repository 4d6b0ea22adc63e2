//! Mock gateway for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::domain::types::{ClassId, NonEmptyString, PaymentId, PlanId, UserId};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{
    AdminReader, ClassListQuery, ClassReader, EventReader, InstallmentListQuery,
    InstallmentReader, InstallmentWriter, ProgramReader, RevenueReportQuery, UserListQuery,
    UserReader, UserWriter,
};

mock! {
    pub Gateway {}

    impl EventReader for Gateway {
        fn list_events_by_class(&self, class_id: ClassId) -> GatewayResult<Value>;
        fn list_upcoming_events(&self, limit: usize) -> GatewayResult<Value>;
    }

    impl ClassReader for Gateway {
        fn list_classes(&self, query: ClassListQuery) -> GatewayResult<Value>;
    }

    impl ProgramReader for Gateway {
        fn list_programs(&self) -> GatewayResult<Value>;
    }

    impl AdminReader for Gateway {
        fn get_dashboard_metrics(&self) -> GatewayResult<Value>;
        fn get_revenue_report(&self, query: RevenueReportQuery) -> GatewayResult<Value>;
        fn get_class_roster(&self, class_id: ClassId) -> GatewayResult<Value>;
    }

    impl UserReader for Gateway {
        fn list_users(&self, query: UserListQuery) -> GatewayResult<Value>;
    }

    impl UserWriter for Gateway {
        fn delete_user(&self, user_id: UserId) -> GatewayResult<()>;
    }

    impl InstallmentReader for Gateway {
        fn list_installments(&self, query: InstallmentListQuery) -> GatewayResult<Value>;
    }

    impl InstallmentWriter for Gateway {
        fn mark_installment_paid(&self, plan_id: PlanId, payment_id: PaymentId) -> GatewayResult<()>;
        fn cancel_installment(&self, plan_id: PlanId, reason: &NonEmptyString) -> GatewayResult<()>;
        fn send_installment_reminder(&self, plan_id: PlanId) -> GatewayResult<()>;
    }
}
