//! # Mock services
//!
//! Test doubles for the external service traits.
//!
//! [`MockOrderApi`] follows an expectation-queue pattern: script responses
//! up front with [`MockOrderApi::expect_submit`], drive the code under
//! test, then call [`MockOrderApi::verify`] to assert every scripted
//! response was consumed. Submitted payloads are captured for inspection.
//!
//! The `Fixed*` services return one canned answer (success or failure) on
//! every call; they cover the read-only fetches the ordering screen does
//! at startup.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiError, EmployeeDirectory, MenuService, OrderApi, SettingsService};
use crate::model::{
    CompanyId, Employee, MenuItem, OrderAck, OrderSubmissionRequest, SystemSetting,
};

/// A scripted [`OrderApi`] with expectation tracking.
///
/// # Example
/// ```ignore
/// let mock = MockOrderApi::new();
/// mock.expect_submit().return_err(ApiError::Rejected {
///     detail: "insufficient stock".into(),
/// });
/// // drive the flow against `mock` ...
/// mock.verify();
/// ```
#[derive(Clone, Default)]
pub struct MockOrderApi {
    responses: Arc<Mutex<VecDeque<Result<OrderAck, ApiError>>>>,
    requests: Arc<Mutex<Vec<OrderSubmissionRequest>>>,
}

impl MockOrderApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the response for the next `submit_order` call.
    pub fn expect_submit(&self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder { responses: self.responses.clone() }
    }

    /// Every request the mock has received, in order.
    pub fn requests(&self) -> Vec<OrderSubmissionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics if scripted responses remain unconsumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!("not all expectations were met, {} remaining", remaining);
        }
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn submit_order(&self, request: OrderSubmissionRequest) -> Result<OrderAck, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected submit_order call, no expectation scripted")
    }
}

/// Builder for one scripted `submit_order` response.
pub struct SubmitExpectationBuilder {
    responses: Arc<Mutex<VecDeque<Result<OrderAck, ApiError>>>>,
}

impl SubmitExpectationBuilder {
    pub fn return_ok(self, ack: OrderAck) {
        self.responses.lock().unwrap().push_back(Ok(ack));
    }

    pub fn return_err(self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

/// A [`MenuService`] returning one canned catalog (or failure).
pub struct FixedMenu(Result<Vec<MenuItem>, ApiError>);

impl FixedMenu {
    pub fn ok(items: Vec<MenuItem>) -> Self {
        Self(Ok(items))
    }

    pub fn err(error: ApiError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl MenuService for FixedMenu {
    async fn active_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        self.0.clone()
    }
}

/// A [`SettingsService`] returning one canned settings listing (or failure).
pub struct FixedSettings(Result<Vec<SystemSetting>, ApiError>);

impl FixedSettings {
    pub fn ok(settings: Vec<SystemSetting>) -> Self {
        Self(Ok(settings))
    }

    pub fn err(error: ApiError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl SettingsService for FixedSettings {
    async fn system_settings(&self) -> Result<Vec<SystemSetting>, ApiError> {
        self.0.clone()
    }
}

/// An [`EmployeeDirectory`] returning one canned listing (or failure).
pub struct FixedDirectory(Result<Vec<Employee>, ApiError>);

impl FixedDirectory {
    pub fn ok(employees: Vec<Employee>) -> Self {
        Self(Ok(employees))
    }

    pub fn err(error: ApiError) -> Self {
        Self(Err(error))
    }
}

#[async_trait]
impl EmployeeDirectory for FixedDirectory {
    async fn employees(&self, _company: CompanyId) -> Result<Vec<Employee>, ApiError> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerUserId, MenuItemId, OrderId, OrderLine};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn request() -> OrderSubmissionRequest {
        OrderSubmissionRequest {
            customer_user: CustomerUserId(1),
            order_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            total_amount: Decimal::from(500),
            is_confirmed: true,
            items: vec![OrderLine { menu_item: MenuItemId(1), quantity: 1 }],
        }
    }

    #[tokio::test]
    async fn scripted_responses_are_served_in_order() {
        let mock = MockOrderApi::new();
        mock.expect_submit()
            .return_err(ApiError::Rejected { detail: "insufficient stock".to_string() });
        mock.expect_submit().return_ok(OrderAck {
            id: OrderId(7),
            order_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            total_amount: Decimal::from(500),
        });

        let first = mock.submit_order(request()).await;
        assert!(first.is_err());

        let second = mock.submit_order(request()).await.unwrap();
        assert_eq!(second.id, OrderId(7));

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations were met")]
    async fn verify_panics_on_unmet_expectations() {
        let mock = MockOrderApi::new();
        mock.expect_submit().return_err(ApiError::Unavailable("down".to_string()));
        mock.verify();
    }
}
