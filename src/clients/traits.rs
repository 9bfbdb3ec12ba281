//! The async contracts this crate expects from the external services.

use async_trait::async_trait;

use super::ApiError;
use crate::model::{
    CompanyId, Employee, MenuItem, OrderAck, OrderSubmissionRequest, SystemSetting,
};

/// Source of the vendor's menu catalog.
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Fetches the current menu. Items flagged inactive may still appear;
    /// the draft seeds quantities only for active ones.
    async fn active_menu(&self) -> Result<Vec<MenuItem>, ApiError>;
}

/// Source of system-wide settings, including the daily order cutoff.
#[async_trait]
pub trait SettingsService: Send + Sync {
    async fn system_settings(&self) -> Result<Vec<SystemSetting>, ApiError>;
}

/// Lists the employees of a company, for proxy ordering.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn employees(&self, company: CompanyId) -> Result<Vec<Employee>, ApiError>;
}

/// The external order API: accepts a confirmed submission request.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Submits one order. A [`ApiError::Rejected`] carries the API's own
    /// detail message; the flow surfaces it to the user verbatim.
    async fn submit_order(&self, request: OrderSubmissionRequest) -> Result<OrderAck, ApiError>;
}
