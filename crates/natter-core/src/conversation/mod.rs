//! Conversation port and service for Natter.
//!
//! This module defines the `ConversationClient` trait that the
//! infrastructure layer implements for the HTTP exchange, and the
//! session-aware service that drives it.

pub mod client;
pub mod service;

pub use client::ConversationClient;
pub use service::ConversationService;
