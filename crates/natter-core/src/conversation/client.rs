//! Conversation transport port.

use natter_types::error::TransportError;
use natter_types::wire::{ChatRequest, ChatResponse, ForgetAck};

/// Port for the remote conversational endpoint.
///
/// One request, one reply. No retries, no streaming; a failed exchange
/// surfaces as a [`TransportError`] and the caller decides what to tell
/// the user. Uses native async fn in traits (Rust 2024 edition, no
/// async_trait macro). Implementations live in `natter-infra`.
pub trait ConversationClient: Send + Sync {
    /// POST a chat request and return the parsed reply.
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse, TransportError>> + Send;

    /// Ask the endpoint to drop its stored history for an identity.
    fn forget(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<ForgetAck, TransportError>> + Send;
}
