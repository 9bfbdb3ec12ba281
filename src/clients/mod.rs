//! Trait seams for the external order-management services.
//!
//! The catalog, settings, employee directory and order API are external
//! collaborators reached over REST; this crate only depends on their
//! behavior, captured here as async traits. Production code implements them
//! over an HTTP client; tests use the [`mock`] toolkit.

pub mod error;
pub mod mock;
pub mod traits;

pub use error::*;
pub use traits::*;
