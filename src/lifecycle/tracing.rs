//! Observability setup.
//!
//! Structured logging with the `tracing` crate. Flow and screen operations
//! create spans (`confirm`, `submit`, `place_order`) with the current flow
//! state as a field, so a session's path through the gate reads directly
//! off the log:
//!
//! ```text
//! INFO confirm: confirmation opened orderer=customer_user_1 total=1800
//! INFO submit: order submitted order_id=order_42
//! ```
//!
//! Verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # transitions and outcomes
//! RUST_LOG=debug cargo run     # full request payloads at submission
//! ```

/// Initializes the tracing subscriber: env-filtered, compact format.
///
/// Call once at startup from the embedding binary. The compact format shows
/// span hierarchy inline and omits module paths to keep lines short.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
