use async_trait::async_trait;
use log::{ debug, info, warn };

use crate::implementations::config::ApiConfig;
use crate::implementations::response::extract_message_content;
use crate::models::request::ChatRequest;
use crate::traits::completion_client::{ ClientError, CompletionClient };

/// OpenAI-compatible chat-completion client.
///
/// Issues exactly one request per call. Retries, rate limiting and
/// streaming are left to the caller.
#[derive(Clone)]
pub struct OpenAiClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: api.api_endpoint.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String, ClientError> {
        info!("Making model API request");
        debug!("API endpoint: {}", self.endpoint);
        debug!("Model: {}", request.model);
        debug!("Temperature: {}", request.temperature);
        debug!("Max tokens: {}", request.max_tokens);

        let response = self.http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send().await
            .map_err(|e| {
                let error_msg = format!("Network error when calling model API: {}", e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                ClientError::Network(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(ClientError::Http {
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            ClientError::Network(format!("Failed to read response body: {}", e))
        })?;

        debug!("Response length: {} characters", response_text.len());
        let content = extract_message_content(&response_text)?;
        info!("API call completed successfully");
        Ok(content)
    }
}
