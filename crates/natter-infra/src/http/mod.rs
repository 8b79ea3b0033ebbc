//! HTTP transport for the conversational endpoint.
//!
//! This module provides [`HttpConversationClient`], which implements
//! the [`ConversationClient`](natter_core::conversation::ConversationClient)
//! trait over a single POST exchange per message.

pub mod client;

pub use client::HttpConversationClient;
