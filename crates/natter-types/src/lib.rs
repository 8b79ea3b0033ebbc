//! Shared domain types for Natter.
//!
//! This crate holds the types every other layer speaks in: the wire
//! shapes of the conversational endpoint, transcript entries, the
//! configuration structures, and the error enums. It has no IO
//! dependencies of its own.

pub mod config;
pub mod error;
pub mod transcript;
pub mod wire;
