//! Error type shared by the external service clients.

use thiserror::Error;

/// Failure of a call to an external service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-success response carrying a
    /// human-readable detail message (e.g. "insufficient stock"). The
    /// detail is surfaced to the user verbatim, without interpretation.
    #[error("{detail}")]
    Rejected { detail: String },

    /// The service could not be reached or the transport failed.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_detail_is_the_whole_message() {
        let err = ApiError::Rejected { detail: "insufficient stock".to_string() };
        assert_eq!(err.to_string(), "insufficient stock");
    }
}
