//! Infrastructure implementations for Natter.
//!
//! Concrete backings for the ports `natter-core` defines: the reqwest
//! HTTP transport, the in-memory session store, and the config loader.

pub mod config;
pub mod http;
pub mod session;
