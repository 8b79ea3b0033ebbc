//! HttpConversationClient -- concrete [`ConversationClient`] over reqwest.
//!
//! Each exchange is a single POST with a JSON body and a JSON reply.
//! The history reset endpoint hangs off the chat endpoint as
//! `{endpoint}/forget`.
//!
//! The client carries no request timeout and never retries: an exchange
//! either resolves or stays pending until the user gives up, and nothing
//! re-sends a message behind their back.

use natter_core::conversation::ConversationClient;
use natter_types::error::TransportError;
use natter_types::wire::{ChatRequest, ChatResponse, ForgetAck, ForgetRequest};

/// reqwest-backed client for one conversational endpoint.
#[derive(Debug, Clone)]
pub struct HttpConversationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConversationClient {
    /// Create a client posting to the given chat endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// URL of the history reset endpoint, derived from the chat endpoint.
    fn forget_url(&self) -> String {
        format!("{}/forget", self.endpoint.trim_end_matches('/'))
    }
}

impl ConversationClient for HttpConversationClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "posting chat request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Deserialization(e.to_string()))
    }

    async fn forget(&self, user_id: &str) -> Result<ForgetAck, TransportError> {
        let url = self.forget_url();
        tracing::debug!(endpoint = %url, "posting history reset");

        let body = ForgetRequest {
            user_id: user_id.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Deserialization(e.to_string()))
    }
}
