//! Session-aware conversation flows.
//!
//! `ConversationService` sits between the UI and the transport: it owns
//! the session identity, attaches it (and the tone preference) to every
//! request, adopts server-assigned identities from replies, and
//! substitutes fallback text when a reply carries none.

use tracing::debug;

use natter_types::error::{ConversationError, TransportError};
use natter_types::wire::{ChatRequest, ChatResponse, ForgetAck};

use crate::conversation::client::ConversationClient;
use crate::session::identity::SessionIdentity;
use crate::session::prefs;
use crate::session::store::SessionStore;

/// Text rendered when a greeting reply carries no usable text.
pub const GREETING_FALLBACK: &str = "Welcome!";

/// Text rendered when a send reply carries no usable text.
pub const REPLY_FALLBACK: &str = "Something went wrong.";

/// Session-aware front to a [`ConversationClient`].
///
/// Generic over the transport and store ports so the flows can be
/// exercised without a network or a real store.
pub struct ConversationService<C, S>
where
    C: ConversationClient,
    S: SessionStore + Clone,
{
    client: C,
    identity: SessionIdentity<S>,
    store: S,
}

impl<C, S> ConversationService<C, S>
where
    C: ConversationClient,
    S: SessionStore + Clone,
{
    pub fn new(client: C, store: S) -> Self {
        Self {
            client,
            identity: SessionIdentity::new(store.clone()),
            store,
        }
    }

    /// The current session identity, created on first use.
    pub fn identity(&self) -> String {
        self.identity.get_or_create()
    }

    /// Request the startup greeting.
    ///
    /// Sends the reserved init message with no tone field and returns
    /// the greeting text. Failures are the startup kind, which the UI
    /// renders as its own notice.
    pub async fn greet(&self) -> Result<String, ConversationError> {
        let request = ChatRequest::greeting(self.identity.get_or_create());
        debug!("requesting startup greeting");

        let response = self
            .client
            .send(&request)
            .await
            .map_err(ConversationError::Startup)?;

        Ok(self.accept(response, GREETING_FALLBACK))
    }

    /// Send one user message and return the reply text.
    ///
    /// The tone preference is read from the store per call and always
    /// travels, even when empty. Callers reject empty input before it
    /// gets here. Failures are the send kind and leave the session
    /// identity untouched.
    pub async fn send(&self, message: &str) -> Result<String, ConversationError> {
        let request = ChatRequest::message(
            self.identity.get_or_create(),
            message.to_string(),
            prefs::tone(&self.store),
        );
        debug!(chars = message.len(), "sending user message");

        let response = self
            .client
            .send(&request)
            .await
            .map_err(ConversationError::Send)?;

        Ok(self.accept(response, REPLY_FALLBACK))
    }

    /// Ask the endpoint to drop the stored history for this identity.
    pub async fn forget(&self) -> Result<ForgetAck, TransportError> {
        let user_id = self.identity.get_or_create();
        debug!(user_id = %user_id, "requesting remote history reset");
        self.client.forget(&user_id).await
    }

    /// Adopt a server-assigned identity and pick the reply text, falling
    /// back when the reply has none.
    fn accept(&self, response: ChatResponse, fallback: &str) -> String {
        if let Some(id) = response.user_id.filter(|id| !id.is_empty()) {
            debug!(user_id = %id, "adopting server-assigned identity");
            self.identity.update(id);
        }
        response
            .response
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use natter_types::wire::INIT_MESSAGE;

    use crate::session::keys;

    #[derive(Clone, Default)]
    struct MapStore(Arc<Mutex<HashMap<String, String>>>);

    impl SessionStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: String) {
            self.0.lock().unwrap().insert(key.to_string(), value);
        }
    }

    /// Replays one canned reply (or a network failure) and records every
    /// request it sees.
    #[derive(Default)]
    struct StubClient {
        reply: Option<ChatResponse>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl StubClient {
        fn replying(reply: ChatResponse) -> Self {
            Self {
                reply: Some(reply),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn last_request(&self) -> ChatRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl ConversationClient for StubClient {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(TransportError::Network("connection refused".to_string())),
            }
        }

        async fn forget(&self, user_id: &str) -> Result<ForgetAck, TransportError> {
            self.seen.lock().unwrap().push(ChatRequest {
                user_id: user_id.to_string(),
                message: "<forget>".to_string(),
                tone: None,
            });
            match &self.reply {
                Some(_) => Ok(ForgetAck {
                    status: "ok".to_string(),
                    message: Some("History cleared.".to_string()),
                }),
                None => Err(TransportError::Network("connection refused".to_string())),
            }
        }
    }

    fn service_with(
        client: StubClient,
        store: MapStore,
    ) -> ConversationService<StubClient, MapStore> {
        ConversationService::new(client, store)
    }

    #[tokio::test]
    async fn test_greet_sends_init_sentinel_without_tone() {
        let service = service_with(
            StubClient::replying(ChatResponse {
                response: Some("Hello!".to_string()),
                user_id: None,
            }),
            MapStore::default(),
        );

        let greeting = service.greet().await.unwrap();
        assert_eq!(greeting, "Hello!");

        let request = service.client.last_request();
        assert_eq!(request.message, INIT_MESSAGE);
        assert_eq!(request.tone, None);
        assert!(request.user_id.starts_with("anon_"));
    }

    #[tokio::test]
    async fn test_greet_falls_back_on_missing_text() {
        let service = service_with(
            StubClient::replying(ChatResponse::default()),
            MapStore::default(),
        );

        assert_eq!(service.greet().await.unwrap(), GREETING_FALLBACK);
    }

    #[tokio::test]
    async fn test_greet_failure_is_startup_kind() {
        let store = MapStore::default();
        store.set(keys::USER_ID, "anon_known00000".to_string());
        let service = service_with(StubClient::failing(), store);

        let err = service.greet().await.unwrap_err();
        assert!(matches!(err, ConversationError::Startup(_)));
        // The identity survives a failed exchange untouched.
        assert_eq!(service.identity(), "anon_known00000");
    }

    #[tokio::test]
    async fn test_send_attaches_identity_and_tone() {
        let store = MapStore::default();
        store.set(keys::USER_ID, "u1".to_string());
        store.set(keys::USER_TONE, "friendly".to_string());
        let service = service_with(
            StubClient::replying(ChatResponse {
                response: Some("Hi there".to_string()),
                user_id: None,
            }),
            store,
        );

        let reply = service.send("hello").await.unwrap();
        assert_eq!(reply, "Hi there");

        let request = service.client.last_request();
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.message, "hello");
        assert_eq!(request.tone.as_deref(), Some("friendly"));
    }

    #[tokio::test]
    async fn test_send_carries_empty_tone_when_unset() {
        let service = service_with(
            StubClient::replying(ChatResponse::default()),
            MapStore::default(),
        );

        service.send("hello").await.unwrap();
        assert_eq!(service.client.last_request().tone.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_send_adopts_server_assigned_identity() {
        let service = service_with(
            StubClient::replying(ChatResponse {
                response: Some("Hi there".to_string()),
                user_id: Some("u1".to_string()),
            }),
            MapStore::default(),
        );

        let reply = service.send("hello").await.unwrap();
        assert_eq!(reply, "Hi there");
        assert_eq!(service.identity(), "u1");
    }

    #[tokio::test]
    async fn test_send_ignores_empty_server_identity() {
        let store = MapStore::default();
        store.set(keys::USER_ID, "u1".to_string());
        let service = service_with(
            StubClient::replying(ChatResponse {
                response: Some("ok".to_string()),
                user_id: Some(String::new()),
            }),
            store,
        );

        service.send("hello").await.unwrap();
        assert_eq!(service.identity(), "u1");
    }

    #[tokio::test]
    async fn test_send_falls_back_on_empty_text() {
        let service = service_with(
            StubClient::replying(ChatResponse {
                response: Some(String::new()),
                user_id: None,
            }),
            MapStore::default(),
        );

        assert_eq!(service.send("hello").await.unwrap(), REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_send_failure_is_send_kind_and_preserves_identity() {
        let store = MapStore::default();
        store.set(keys::USER_ID, "u1".to_string());
        let service = service_with(StubClient::failing(), store);

        let err = service.send("hello").await.unwrap_err();
        assert!(matches!(err, ConversationError::Send(_)));
        assert_eq!(service.identity(), "u1");
    }

    #[tokio::test]
    async fn test_forget_uses_current_identity() {
        let store = MapStore::default();
        store.set(keys::USER_ID, "u1".to_string());
        let service = service_with(
            StubClient::replying(ChatResponse::default()),
            store,
        );

        let ack = service.forget().await.unwrap();
        assert_eq!(ack.status, "ok");
        assert_eq!(service.client.last_request().user_id, "u1");
    }
}
