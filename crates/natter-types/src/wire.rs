//! Wire types for the conversational endpoint.
//!
//! The endpoint speaks a single POST exchange: a JSON request carrying
//! the session identity and message, and a JSON reply that may carry
//! the response text and a replacement identity. Both reply fields are
//! optional and the client tolerates either being absent.

use serde::{Deserialize, Serialize};

/// Reserved message value that asks the endpoint for a startup greeting
/// instead of a reply to real user input.
pub const INIT_MESSAGE: &str = "__INIT__";

/// Outgoing request body for the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Session identity attached to every exchange.
    pub user_id: String,
    pub message: String,
    /// Tone preference. Present (possibly empty) on user sends, omitted
    /// entirely on the greeting request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

impl ChatRequest {
    /// Build the startup greeting request. Carries no tone field.
    pub fn greeting(user_id: String) -> Self {
        Self {
            user_id,
            message: INIT_MESSAGE.to_string(),
            tone: None,
        }
    }

    /// Build a user message request with the given tone preference.
    pub fn message(user_id: String, message: String, tone: String) -> Self {
        Self {
            user_id,
            message,
            tone: Some(tone),
        }
    }
}

/// Incoming reply body from the chat endpoint.
///
/// The caller substitutes fallback text when `response` is missing or
/// empty, and adopts `user_id` only when it is present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request body for the remote history reset endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgetRequest {
    pub user_id: String,
}

/// Acknowledgement from the remote history reset endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgetAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
