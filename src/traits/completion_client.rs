use async_trait::async_trait;
use thiserror::Error;

use crate::errors::ComponentGptError;
use crate::models::request::ChatRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")] Network(String),

    #[error("HTTP error: {status} - {message}")] Http {
        status: u16,
        message: String,
    },

    #[error("Failed to parse API response: {0}")] Parse(String),
}

impl From<ClientError> for ComponentGptError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(msg) => ComponentGptError::Upstream(msg),
            ClientError::Http { status, message } =>
                ComponentGptError::Upstream(format!("Status {}: {}", status, message)),
            ClientError::Parse(msg) => ComponentGptError::MalformedResponse(msg),
        }
    }
}

/// A chat-completion endpoint that accepts image input
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one request and return the assistant message text
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String, ClientError>;
}
