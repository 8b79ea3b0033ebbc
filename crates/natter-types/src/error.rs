//! Error types for Natter.
//!
//! Transport failures describe what went wrong on the wire; conversation
//! failures add where in the session it happened, because the startup
//! greeting and a mid-conversation send surface as different notices.

use thiserror::Error;

/// Failures from the HTTP transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("invalid response payload: {0}")]
    Deserialization(String),
}

/// Conversation failures, split by where in the session they occur.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The startup greeting request failed.
    #[error("greeting request failed: {0}")]
    Startup(TransportError),

    /// A mid-conversation send failed.
    #[error("send failed: {0}")]
    Send(TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");

        let err = TransportError::Status {
            status: 400,
            body: "Message cannot be empty.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "endpoint returned HTTP 400: Message cannot be empty."
        );
    }

    #[test]
    fn test_conversation_error_carries_phase() {
        let err = ConversationError::Startup(TransportError::Network("timed out".to_string()));
        assert!(err.to_string().starts_with("greeting request failed"));

        let err = ConversationError::Send(TransportError::Deserialization("eof".to_string()));
        assert!(err.to_string().starts_with("send failed"));
    }
}
