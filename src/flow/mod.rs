//! # Order submission flow
//!
//! The two-phase confirm/submit state machine shared by the customer
//! ordering screen and the company proxy-ordering screen:
//!
//! ```text
//! Editing ──confirm──▶ Confirming ──submit──▶ Submitting ──ok──▶ Submitted
//!    ▲                     │                      │
//!    └─────────cancel──────┘                      │
//!    ◀──────────────────failure───────────────────┘
//! ```
//!
//! `confirm` gates on three independent checks: the cutoff has not passed,
//! an orderer is resolved, and the draft is non-empty. `submit` builds the
//! request from the same selected-lines listing the confirmation showed, so
//! what the user approved is exactly what goes out. A failed submission
//! returns to `Editing` with every quantity preserved; a successful one
//! clears the draft and parks the flow in the terminal `Submitted` state.
//!
//! The flow is single-writer and holds no clock: callers inject `now` at
//! each gate check, so cutoff enforcement is live per attempt.

pub mod error;

pub use error::*;

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderApi;
use crate::cutoff::CutoffPolicy;
use crate::model::{
    CustomerUserId, MenuItem, MenuItemId, OrderAck, OrderDraft, OrderSubmissionRequest,
};

/// Current phase of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Quantities may be edited; nothing is pending.
    Editing,
    /// The confirmation popup is up, awaiting approval or cancellation.
    Confirming,
    /// The submission request is in flight. Also the mutual-exclusion
    /// mechanism: no second confirm/submit can start here.
    Submitting,
    /// Terminal. The order went through and the draft was cleared.
    Submitted,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowState::Editing => "editing",
            FlowState::Confirming => "awaiting confirmation",
            FlowState::Submitting => "submitting",
            FlowState::Submitted => "submitted",
        };
        f.write_str(s)
    }
}

/// Who the order is for.
///
/// Identity is injected by the surrounding screen, never hardcoded: a
/// customer orders for themselves, a company selects one of its employees
/// during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orderer {
    /// The authenticated customer user orders for themselves.
    Customer(CustomerUserId),
    /// A company orders on behalf of an employee, chosen per session.
    Proxy { employee: Option<CustomerUserId> },
}

impl Orderer {
    /// An unresolved proxy orderer, awaiting employee selection.
    pub fn proxy() -> Self {
        Orderer::Proxy { employee: None }
    }

    /// The customer user the submission will name, if resolved yet.
    pub fn resolved(&self) -> Option<CustomerUserId> {
        match self {
            Orderer::Customer(id) => Some(*id),
            Orderer::Proxy { employee } => *employee,
        }
    }
}

/// One line of the confirmation popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationLine {
    pub menu_item: MenuItemId,
    pub name: String,
    pub quantity: u32,
    /// quantity × unit price for this line.
    pub line_total: Decimal,
}

/// What the user is asked to approve before submission.
///
/// Derived from the same filtered listing as the submission payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub orderer: CustomerUserId,
    pub lines: Vec<ConfirmationLine>,
    pub total: Decimal,
}

/// The confirm/submit state machine gating order placement.
#[derive(Debug, Clone)]
pub struct OrderSubmissionFlow {
    policy: CutoffPolicy,
    draft: OrderDraft,
    orderer: Orderer,
    state: FlowState,
}

impl OrderSubmissionFlow {
    /// Creates a flow in `Editing` with an empty draft seeded from the
    /// catalog's active items.
    pub fn new(catalog: &[MenuItem], policy: CutoffPolicy, orderer: Orderer) -> Self {
        Self {
            policy,
            draft: OrderDraft::seeded(catalog),
            orderer,
            state: FlowState::Editing,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn orderer(&self) -> Orderer {
        self.orderer
    }

    pub fn policy(&self) -> CutoffPolicy {
        self.policy
    }

    fn require_editing(&self) -> Result<(), OrderFlowError> {
        match self.state {
            FlowState::Editing => Ok(()),
            other => Err(OrderFlowError::NotEditing(other)),
        }
    }

    /// Selects the employee a proxy order is placed for. `Editing` only.
    pub fn select_employee(&mut self, employee: CustomerUserId) -> Result<(), OrderFlowError> {
        self.require_editing()?;
        match &mut self.orderer {
            Orderer::Proxy { employee: slot } => {
                *slot = Some(employee);
                Ok(())
            }
            Orderer::Customer(_) => Err(OrderFlowError::NotProxyOrder),
        }
    }

    /// Sets one item's quantity, flooring below zero. `Editing` only.
    pub fn set_quantity(&mut self, id: MenuItemId, quantity: i64) -> Result<(), OrderFlowError> {
        self.require_editing()?;
        self.draft.set_quantity(id, quantity);
        Ok(())
    }

    /// Adjusts one item's quantity by a delta, flooring below zero.
    /// `Editing` only.
    pub fn adjust_quantity(&mut self, id: MenuItemId, delta: i64) -> Result<(), OrderFlowError> {
        self.require_editing()?;
        self.draft.adjust_quantity(id, delta);
        Ok(())
    }

    /// `Editing → Confirming`: validates the draft and opens confirmation.
    ///
    /// The three checks are independent and must all pass: the cutoff has
    /// not passed at `now`, the orderer is resolved, and at least one item
    /// is selected. On any failure the flow stays in `Editing` and the
    /// draft is untouched.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn confirm(&mut self, now: NaiveDateTime) -> Result<Confirmation, OrderFlowError> {
        self.require_editing()?;

        if self.policy.is_past(now) {
            warn!("confirm rejected, cutoff passed");
            return Err(OrderFlowError::CutoffPassed);
        }
        let orderer = self.orderer.resolved().ok_or_else(|| {
            warn!("confirm rejected, no employee selected");
            OrderFlowError::NoOrdererSelected
        })?;
        if self.draft.is_empty() {
            warn!("confirm rejected, empty selection");
            return Err(OrderFlowError::EmptySelection);
        }

        let lines = self
            .draft
            .selected_items()
            .into_iter()
            .map(|(item, quantity)| ConfirmationLine {
                menu_item: item.id,
                name: item.name.clone(),
                quantity,
                line_total: item.price * Decimal::from(quantity),
            })
            .collect();

        self.state = FlowState::Confirming;
        info!(%orderer, total = %self.draft.total(), "confirmation opened");
        Ok(Confirmation { orderer, lines, total: self.draft.total() })
    }

    /// `Confirming → Editing`: the user backed out. No side effects; the
    /// draft quantities are preserved.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn cancel(&mut self) -> Result<(), OrderFlowError> {
        match self.state {
            FlowState::Confirming => {
                self.state = FlowState::Editing;
                debug!("confirmation cancelled");
                Ok(())
            }
            other => Err(OrderFlowError::NotConfirming(other)),
        }
    }

    /// `Confirming → Submitting → Submitted | Editing`: final approval.
    ///
    /// Builds the submission request from the current draft and hands it to
    /// the order API. Success clears the draft and ends the flow in the
    /// terminal `Submitted` state. Failure returns to `Editing` (not
    /// `Confirming`) with every quantity preserved so the user can retry
    /// without re-entering them; there is no automatic retry. Taking
    /// `&mut self` across the await means at most one submission per flow
    /// is ever in flight.
    #[instrument(skip(self, api), fields(state = %self.state))]
    pub async fn submit<A: OrderApi + ?Sized>(
        &mut self,
        api: &A,
        today: NaiveDate,
    ) -> Result<OrderAck, OrderFlowError> {
        match self.state {
            FlowState::Confirming => {}
            other => return Err(OrderFlowError::NotConfirming(other)),
        }
        // Confirming is only reachable with a resolved orderer.
        let orderer = self
            .orderer
            .resolved()
            .ok_or(OrderFlowError::NoOrdererSelected)?;

        let request = OrderSubmissionRequest {
            customer_user: orderer,
            order_date: today,
            total_amount: self.draft.total(),
            is_confirmed: true,
            items: self.draft.selected_lines(),
        };

        self.state = FlowState::Submitting;
        debug!(?request, "submitting order");

        match api.submit_order(request).await {
            Ok(ack) => {
                self.state = FlowState::Submitted;
                self.draft.clear();
                info!(order_id = %ack.id, "order submitted");
                Ok(ack)
            }
            Err(e) => {
                self.state = FlowState::Editing;
                warn!(error = %e, "order submission failed");
                Err(e.into())
            }
        }
    }
}
