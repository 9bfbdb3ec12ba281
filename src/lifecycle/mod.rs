//! Session orchestration and observability setup.
//!
//! [`OrderScreen`] is the surrounding-screen layer: it fetches the inputs
//! the flow needs (catalog, cutoff setting, employee list), refuses to open
//! when any of them is unavailable, and drives one [`crate::flow`] instance
//! per order. [`setup_tracing`] initializes structured logging for binaries
//! embedding the crate.

pub mod order_screen;
pub mod tracing;

pub use self::order_screen::*;
pub use self::tracing::setup_tracing;
