//! Session-scoped state for Natter.
//!
//! This module defines the `SessionStore` trait that the infrastructure
//! layer implements, the identity bootstrap built on top of it, and the
//! read-only preference lookups.

pub mod identity;
pub mod prefs;
pub mod store;

pub use identity::SessionIdentity;
pub use store::{SessionStore, keys};
