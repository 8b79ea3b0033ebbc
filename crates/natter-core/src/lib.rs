//! Session, conversation, and transcript logic for Natter.
//!
//! This crate defines the ports the infrastructure layer implements
//! (`SessionStore`, `ConversationClient`) and everything a chat session
//! does with them: identity bootstrap, the greeting and send flows, and
//! the transcript pipeline that turns raw replies into rendered
//! paragraphs. It depends only on `natter-types`, never on an IO crate.

pub mod conversation;
pub mod session;
pub mod transcript;
