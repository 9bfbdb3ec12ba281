//! The ordering screen session: one parameterized component for both the
//! customer screen and the company proxy screen.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument};

use crate::clients::{
    ApiError, EmployeeDirectory, MenuService, OrderApi, SettingsService,
};
use crate::cutoff::CutoffPolicy;
use crate::flow::{Confirmation, FlowState, OrderFlowError, Orderer, OrderSubmissionFlow};
use crate::model::{
    cutoff_from_settings, CompanyId, CustomerUserId, CutoffSetting, Employee, MenuItem,
    MenuItemId, OrderAck, SettingError,
};

/// Errors raised by the ordering screen.
///
/// The `*Unavailable` variants block entry into the session: the flow never
/// operates on absent catalog or settings data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScreenError {
    #[error("failed to fetch menu items: {0}")]
    MenuUnavailable(ApiError),

    #[error("failed to fetch system settings: {0}")]
    SettingsUnavailable(ApiError),

    #[error("failed to fetch employee list: {0}")]
    EmployeesUnavailable(ApiError),

    /// The settings service returned an unparseable cutoff value.
    #[error("invalid order cutoff setting: {0}")]
    InvalidCutoff(#[from] SettingError),

    /// A flow-level validation or submission error, surfaced as-is.
    #[error(transparent)]
    Flow(#[from] OrderFlowError),
}

/// One interactive ordering session.
///
/// Created per screen entry; fetches its inputs up front and then drives an
/// [`OrderSubmissionFlow`]. The same type serves the customer screen
/// ([`OrderScreen::open_for_customer`]) and the proxy screen
/// ([`OrderScreen::open_for_company`]) — the only difference is how the
/// orderer identity is resolved.
pub struct OrderScreen {
    catalog: Vec<MenuItem>,
    policy: CutoffPolicy,
    employees: Vec<Employee>,
    flow: OrderSubmissionFlow,
}

impl OrderScreen {
    /// Opens a session for a customer ordering for themselves.
    ///
    /// Fetches the menu and the cutoff setting; any fetch or parse failure
    /// blocks entry.
    #[instrument(skip(menu, settings))]
    pub async fn open_for_customer(
        menu: &impl MenuService,
        settings: &impl SettingsService,
        customer: CustomerUserId,
    ) -> Result<Self, ScreenError> {
        let (catalog, policy) = Self::fetch_inputs(menu, settings).await?;
        info!(items = catalog.len(), "customer ordering session opened");
        let flow = OrderSubmissionFlow::new(&catalog, policy, Orderer::Customer(customer));
        Ok(Self { catalog, policy, employees: Vec::new(), flow })
    }

    /// Opens a proxy-ordering session for a company.
    ///
    /// Additionally fetches the company's employees and pre-selects the
    /// first listed one, when any exist.
    #[instrument(skip(menu, settings, directory))]
    pub async fn open_for_company(
        menu: &impl MenuService,
        settings: &impl SettingsService,
        directory: &impl EmployeeDirectory,
        company: CompanyId,
    ) -> Result<Self, ScreenError> {
        let employees = directory
            .employees(company)
            .await
            .map_err(ScreenError::EmployeesUnavailable)?;
        let (catalog, policy) = Self::fetch_inputs(menu, settings).await?;
        info!(
            items = catalog.len(),
            employees = employees.len(),
            "proxy ordering session opened"
        );

        let preselected = employees.first().map(|e| e.id);
        let orderer = Orderer::Proxy { employee: preselected };
        let flow = OrderSubmissionFlow::new(&catalog, policy, orderer);
        Ok(Self { catalog, policy, employees, flow })
    }

    async fn fetch_inputs(
        menu: &impl MenuService,
        settings: &impl SettingsService,
    ) -> Result<(Vec<MenuItem>, CutoffPolicy), ScreenError> {
        let catalog = menu.active_menu().await.map_err(ScreenError::MenuUnavailable)?;
        let records = settings
            .system_settings()
            .await
            .map_err(ScreenError::SettingsUnavailable)?;
        let policy = CutoffPolicy::new(cutoff_from_settings(&records)?);
        Ok((catalog, policy))
    }

    /// The active menu items backing this session, in catalog order.
    pub fn menu(&self) -> &[MenuItem] {
        self.flow.draft().items()
    }

    /// The configured cutoff, for the "today's deadline is HH:MM" banner.
    pub fn cutoff(&self) -> Option<CutoffSetting> {
        self.policy.setting()
    }

    /// Whether ordering controls should be disabled at `now`.
    pub fn is_past_cutoff(&self, now: NaiveDateTime) -> bool {
        self.policy.is_past(now)
    }

    /// The employees eligible for a proxy order (empty for customer mode).
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The currently selected proxy recipient, if any.
    pub fn selected_employee(&self) -> Option<CustomerUserId> {
        match self.flow.orderer() {
            Orderer::Proxy { employee } => employee,
            Orderer::Customer(_) => None,
        }
    }

    pub fn select_employee(&mut self, employee: CustomerUserId) -> Result<(), ScreenError> {
        Ok(self.flow.select_employee(employee)?)
    }

    pub fn state(&self) -> FlowState {
        self.flow.state()
    }

    pub fn quantity(&self, id: MenuItemId) -> u32 {
        self.flow.draft().quantity(id)
    }

    pub fn total(&self) -> Decimal {
        self.flow.draft().total()
    }

    pub fn set_quantity(&mut self, id: MenuItemId, quantity: i64) -> Result<(), ScreenError> {
        Ok(self.flow.set_quantity(id, quantity)?)
    }

    pub fn adjust_quantity(&mut self, id: MenuItemId, delta: i64) -> Result<(), ScreenError> {
        Ok(self.flow.adjust_quantity(id, delta)?)
    }

    /// Validates the draft and opens the confirmation popup.
    pub fn confirm(&mut self, now: NaiveDateTime) -> Result<Confirmation, ScreenError> {
        Ok(self.flow.confirm(now)?)
    }

    /// Closes the confirmation popup without submitting.
    pub fn cancel(&mut self) -> Result<(), ScreenError> {
        Ok(self.flow.cancel()?)
    }

    /// Submits the confirmed order.
    ///
    /// The order date is `now`'s calendar date. On success the screen
    /// re-arms with a fresh `Editing` flow (empty draft, employee selection
    /// preserved) so the session can place another order; on failure the
    /// current flow stays live in `Editing` with the draft intact.
    #[instrument(skip(self, api), fields(state = %self.flow.state()))]
    pub async fn place_order<A: OrderApi + ?Sized>(
        &mut self,
        api: &A,
        now: NaiveDateTime,
    ) -> Result<OrderAck, ScreenError> {
        let ack = self.flow.submit(api, now.date()).await?;
        let orderer = self.flow.orderer();
        self.flow = OrderSubmissionFlow::new(&self.catalog, self.policy, orderer);
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{FixedDirectory, FixedMenu, FixedSettings};
    use crate::model::{SystemSetting, ORDER_CUTOFF_TIME};

    fn item(id: i64, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            name: name.to_string(),
            price: Decimal::from(price),
            description: String::new(),
            allergy_info: None,
            image: None,
            is_active: true,
        }
    }

    fn cutoff_settings(value: &str) -> Vec<SystemSetting> {
        vec![SystemSetting {
            setting_name: ORDER_CUTOFF_TIME.to_string(),
            setting_value: value.to_string(),
        }]
    }

    #[tokio::test]
    async fn menu_fetch_failure_blocks_entry() {
        let menu = FixedMenu::err(ApiError::Unavailable("timeout".to_string()));
        let settings = FixedSettings::ok(cutoff_settings("14:00"));

        let result = OrderScreen::open_for_customer(&menu, &settings, CustomerUserId(1)).await;
        assert!(matches!(result, Err(ScreenError::MenuUnavailable(_))));
    }

    #[tokio::test]
    async fn settings_fetch_failure_blocks_entry() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::err(ApiError::Unavailable("timeout".to_string()));

        let result = OrderScreen::open_for_customer(&menu, &settings, CustomerUserId(1)).await;
        assert!(matches!(result, Err(ScreenError::SettingsUnavailable(_))));
    }

    #[tokio::test]
    async fn malformed_cutoff_blocks_entry() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::ok(cutoff_settings("not-a-time"));

        let result = OrderScreen::open_for_customer(&menu, &settings, CustomerUserId(1)).await;
        assert!(matches!(result, Err(ScreenError::InvalidCutoff(_))));
    }

    #[tokio::test]
    async fn missing_cutoff_setting_opens_an_unrestricted_session() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::ok(vec![]);

        let screen = OrderScreen::open_for_customer(&menu, &settings, CustomerUserId(1))
            .await
            .unwrap();
        assert_eq!(screen.cutoff(), None);
        let late = chrono::NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        assert!(!screen.is_past_cutoff(late));
    }

    #[tokio::test]
    async fn proxy_session_preselects_the_first_employee() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::ok(cutoff_settings("14:00"));
        let directory = FixedDirectory::ok(vec![
            Employee {
                id: CustomerUserId(7),
                username: "sato".to_string(),
                email: "sato@example.co.jp".to_string(),
            },
            Employee {
                id: CustomerUserId(8),
                username: "suzuki".to_string(),
                email: "suzuki@example.co.jp".to_string(),
            },
        ]);

        let screen =
            OrderScreen::open_for_company(&menu, &settings, &directory, CompanyId(1))
                .await
                .unwrap();
        assert_eq!(screen.selected_employee(), Some(CustomerUserId(7)));
        assert_eq!(screen.employees().len(), 2);
    }

    #[tokio::test]
    async fn proxy_session_with_no_employees_has_no_selection() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::ok(cutoff_settings("14:00"));
        let directory = FixedDirectory::ok(vec![]);

        let screen =
            OrderScreen::open_for_company(&menu, &settings, &directory, CompanyId(1))
                .await
                .unwrap();
        assert_eq!(screen.selected_employee(), None);
    }

    #[tokio::test]
    async fn employee_directory_failure_blocks_entry() {
        let menu = FixedMenu::ok(vec![item(1, "Bento", 500)]);
        let settings = FixedSettings::ok(cutoff_settings("14:00"));
        let directory = FixedDirectory::err(ApiError::Unavailable("timeout".to_string()));

        let result =
            OrderScreen::open_for_company(&menu, &settings, &directory, CompanyId(1)).await;
        assert!(matches!(result, Err(ScreenError::EmployeesUnavailable(_))));
    }
}
