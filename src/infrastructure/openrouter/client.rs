//! HTTP client for the OpenRouter chat-completions API.

use std::time::Duration;

use reqwest::{header, Client as ReqwestClient, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::domain::error::{ConfigError, OracleError};
use crate::domain::models::OracleConfig;

use super::types::{ChatRequest, ChatResponse, Message};

/// HTTP client for OpenRouter.
///
/// Built once and shared (via `Arc`) by both predictors; connection pooling
/// comes from the underlying `reqwest::Client`. No rate limiting and no
/// retries: a failed call aborts the optimization run that issued it.
pub struct OpenRouterClient {
    http_client: ReqwestClient,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    /// Create a client from configuration and an API key.
    pub fn new(config: &OracleConfig, api_key: &str) -> Result<Self, ConfigError> {
        let api_key_scrubbed = if api_key.len() > 8 {
            format!("{}...[REDACTED]", &api_key[..8])
        } else {
            "[REDACTED]".to_string()
        };
        info!(
            base_url = %config.base_url,
            model = %config.model,
            timeout_secs = config.timeout_secs,
            api_key = %api_key_scrubbed,
            "initializing OpenRouter client"
        );

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ConfigError::HttpClient(format!("invalid API key: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            "HTTP-Referer",
            header::HeaderValue::from_str(&config.referer)
                .map_err(|e| ConfigError::HttpClient(format!("invalid referer: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Create a client reading the API key from `OPENROUTER_API_KEY`.
    pub fn from_env(config: &OracleConfig) -> Result<Self, ConfigError> {
        let api_key =
            std::env::var("OPENROUTER_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(config, &api_key)
    }

    /// Run one chat completion and return the first choice's content.
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String, OracleError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        debug!(%url, model = %self.model, "POST chat completion");
        let response = self.http_client.post(&url).json(&request).send().await?;
        let chat = Self::handle_response(response).await?;
        chat.into_content()
            .filter(|content| !content.trim().is_empty())
            .ok_or(OracleError::EmptyResponse)
    }

    async fn handle_response(response: Response) -> Result<ChatResponse, OracleError> {
        let status = response.status();
        debug!(%status, "chat completion response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            warn!(%status, %body, "OpenRouter API error");
            return Err(match status {
                StatusCode::UNAUTHORIZED => OracleError::Auth,
                _ => OracleError::Api {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_with_valid_key() {
        let client = OpenRouterClient::new(&OracleConfig::default(), "test-api-key");
        assert!(client.is_ok());
    }

    #[test]
    fn from_env_fails_without_key() {
        temp_env::with_var_unset("OPENROUTER_API_KEY", || {
            let result = OpenRouterClient::from_env(&OracleConfig::default());
            assert!(matches!(result, Err(ConfigError::MissingApiKey)));
        });
    }
}
