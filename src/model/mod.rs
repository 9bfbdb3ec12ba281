//! Pure data structures for the ordering domain.
//!
//! Everything here is a value object: menu items, settings and employees
//! arrive from the external services and are never mutated by this crate.
//! [`OrderDraft`] is the one mutable piece of session state (per-item
//! quantities and the running total). The submission payload types serialize
//! to the exact field names the external order API expects.

pub mod draft;
pub mod menu;
pub mod order;
pub mod settings;

pub use draft::*;
pub use menu::*;
pub use order::*;
pub use settings::*;
