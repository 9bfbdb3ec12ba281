//! # Bento Ordering Core
//!
//! > **The order submission gate for a daily bento/lunch ordering platform.**
//!
//! Employees of subscriber companies place lunch orders against a vendor's
//! menu before a daily cutoff time; companies can place proxy orders on
//! behalf of employees. This crate is the reusable logic core behind both
//! ordering screens: cutoff-time gating, draft quantity tracking with total
//! computation, and the two-phase confirm/submit state machine. Rendering,
//! authentication, persistence and the order-management REST API itself
//! live elsewhere — the API is reached only through the trait seams in
//! [`clients`].
//!
//! ## Design Philosophy
//!
//! The customer screen and the company proxy screen used to duplicate this
//! logic; here it is one parameterized component. The orderer identity is
//! an explicit input ([`flow::Orderer`]), value objects are immutable, the
//! clock is injected at every gate check, and the flow reports transitions
//! through typed return values so any view layer can render them.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Menu items, settings, orderer identities, the submission payload, and
//! the mutable [`OrderDraft`](model::OrderDraft) (quantities + totals).
//!
//! ### 2. The Gate ([`cutoff`])
//! [`CutoffPolicy`](cutoff::CutoffPolicy): has today's order deadline
//! passed? Pure function of the configured setting and an injected `now`.
//!
//! ### 3. The State Machine ([`flow`])
//! [`OrderSubmissionFlow`](flow::OrderSubmissionFlow):
//! `Editing → Confirming → Submitting → Submitted`, with cancel and
//! failure edges back to `Editing`. Validation errors never reach the
//! network; a failed submission preserves the draft for retry.
//!
//! ### 4. The Seams ([`clients`])
//! Async traits for the external services (catalog, settings, employee
//! directory, order API) plus a mock toolkit with expectation builders.
//!
//! ### 5. The Session ([`lifecycle`])
//! [`OrderScreen`](lifecycle::OrderScreen) fetches the inputs, blocks
//! entry when they are unavailable, and drives one flow per order.
//! [`setup_tracing`](lifecycle::setup_tracing) wires up structured logging.
//!
//! ## Quick Start
//!
//! ```ignore
//! let screen = OrderScreen::open_for_customer(&menu, &settings, customer_id).await?;
//! screen.adjust_quantity(item_id, 1)?;
//! let confirmation = screen.confirm(Local::now().naive_local())?;
//! // render the popup from `confirmation`, then on approval:
//! let ack = screen.place_order(&order_api, Local::now().naive_local()).await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod cutoff;
pub mod flow;
pub mod lifecycle;
pub mod model;
