//! Error types for the order submission flow.

use thiserror::Error;

use super::FlowState;
use crate::clients::ApiError;

/// Errors surfaced to the user by the submission flow.
///
/// The first three are validation errors: they are detected locally, block
/// the transition out of `Editing`, and never reach the network.
/// `Submission` wraps a failed hand-off to the order API; the flow has
/// already returned to `Editing` with the draft intact when it is raised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderFlowError {
    /// Today's order cutoff time has passed.
    #[error("the order cutoff time has passed")]
    CutoffPassed,

    /// No menu items have a quantity above zero.
    #[error("no menu items selected")]
    EmptySelection,

    /// A proxy order has no employee selected to receive it.
    #[error("no employee selected")]
    NoOrdererSelected,

    /// Employee selection was attempted on a self-service order.
    #[error("employee selection only applies to proxy orders")]
    NotProxyOrder,

    /// The operation requires the `Editing` state.
    #[error("order is not editable while {0}")]
    NotEditing(FlowState),

    /// The operation requires the `Confirming` state.
    #[error("no confirmation is pending while {0}")]
    NotConfirming(FlowState),

    /// The order API refused the submission or could not be reached.
    #[error("{detail}")]
    Submission { detail: String },
}

impl From<ApiError> for OrderFlowError {
    /// Prefers the API's own detail text; transport failures fall back to a
    /// generic message.
    fn from(error: ApiError) -> Self {
        let detail = match error {
            ApiError::Rejected { detail } => detail,
            ApiError::Unavailable(_) => "order submission failed".to_string(),
        };
        OrderFlowError::Submission { detail }
    }
}
