// ABOUTME: OpenAI-compatible chat-completion provider for locally hosted models
// ABOUTME: Supports Ollama, vLLM, LocalAI, and any server exposing /chat/completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! # `OpenAI`-Compatible Provider
//!
//! Built from [`LlmConfig`], which `AppConfig` loads from the `LOCAL_LLM_*`
//! variables. The backend is recognized from the port of the base URL.
//!
//! ## Supported Backends
//!
//! - **Ollama**: <http://localhost:11434/v1>
//! - **vLLM**: <http://localhost:8000/v1>
//! - **`LocalAI`**: <http://localhost:8080/v1>

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use crate::config::LlmConfig;
use crate::constants::llm::{CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, DEFAULT_MODEL, SERVICE_LABEL};
use crate::database::elapsed_ms;
use crate::errors::{AppError, ErrorCode};
use crate::logging::AppLogger;

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <http://localhost:11434/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for logging
    pub provider_name: String,
    /// Provider display name
    pub display_name: String,
    /// Capabilities of this provider
    pub capabilities: LlmCapabilities,
}

impl OpenAiCompatibleConfig {
    /// Configuration for an arbitrary endpoint, naming the backend from its port
    #[must_use]
    pub fn for_base_url(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        let (provider_name, display_name, capabilities) = if base_url.contains(":11434") {
            ("ollama", "Ollama (Local)", LlmCapabilities::chat())
        } else if base_url.contains(":8000") {
            (
                "vllm",
                "vLLM (Local)",
                LlmCapabilities::chat() | LlmCapabilities::JSON_MODE,
            )
        } else if base_url.contains(":8080") {
            ("localai", "LocalAI", LlmCapabilities::chat())
        } else {
            ("local", "Local LLM", LlmCapabilities::chat())
        };

        Self {
            base_url: base_url.to_owned(),
            api_key: api_key.filter(|k| !k.is_empty()),
            default_model: model.to_owned(),
            provider_name: provider_name.to_owned(),
            display_name: display_name.to_owned(),
            capabilities,
        }
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self::for_base_url(DEFAULT_BASE_URL, DEFAULT_MODEL, None)
    }
}

impl From<&LlmConfig> for OpenAiCompatibleConfig {
    fn from(config: &LlmConfig) -> Self {
        Self::for_base_url(&config.base_url, &config.model, config.api_key.clone())
    }
}

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// Only a connect timeout is set; a running generation is awaited to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {} provider: base_url={}, model={}",
            config.display_name, config.base_url, config.default_model
        );
        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    fn send_error(&self, e: &reqwest::Error) -> AppError {
        error!("Failed to reach {}: {e}", self.config.provider_name);
        if e.is_connect() {
            AppError::external_unavailable(
                SERVICE_LABEL,
                format!(
                    "Cannot connect to {}. Is the server running at {}?",
                    self.config.display_name, self.config.base_url
                ),
            )
        } else {
            AppError::external_service(SERVICE_LABEL, format!("Failed to connect: {e}"))
        }
    }

    /// Map a non-success HTTP status and body to an error
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let detail = error_response.error;
            match status.as_u16() {
                401 | 403 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("{SERVICE_LABEL}: API authentication failed: {}", detail.message),
                ),
                404 => AppError::external_service(
                    SERVICE_LABEL,
                    format!("Model or endpoint not found: {}", detail.message),
                ),
                503 => AppError::external_unavailable(
                    SERVICE_LABEL,
                    format!(
                        "Service unavailable (is the local server running?): {}",
                        detail.message
                    ),
                ),
                _ => AppError::external_service(
                    SERVICE_LABEL,
                    format!(
                        "{} - {}",
                        detail.error_type.as_deref().unwrap_or("unknown"),
                        detail.message
                    ),
                ),
            }
        } else {
            match status.as_u16() {
                404 => AppError::external_service(
                    SERVICE_LABEL,
                    format!("Model or endpoint not found ({status})"),
                ),
                502..=504 => AppError::external_unavailable(
                    SERVICE_LABEL,
                    "Local LLM server is not responding. Is Ollama/vLLM running?",
                ),
                _ => AppError::external_service(
                    SERVICE_LABEL,
                    format!(
                        "API error ({status}): {}",
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    fn parse_success_body(body: &str) -> Result<(String, OpenAiResponse), AppError> {
        let mut response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            error!(
                "Failed to parse API response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            AppError::external_service(SERVICE_LABEL, format!("Failed to parse response: {e}"))
        })?;

        if response.choices.is_empty() {
            return Err(AppError::external_service(
                SERVICE_LABEL,
                "API returned no choices",
            ));
        }
        let content = response.choices[0]
            .message
            .content
            .take()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AppError::external_service(SERVICE_LABEL, "API returned an empty message")
            })?;
        Ok((content, response))
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.config.provider_name
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.config.capabilities
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let started = Instant::now();
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };
        debug!(
            "Sending chat completion request to {} with {} messages",
            self.config.provider_name,
            openai_request.messages.len()
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let result = async {
            let response = self
                .add_auth_header(http_request)
                .send()
                .await
                .map_err(|e| self.send_error(&e))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| {
                AppError::external_service(SERVICE_LABEL, format!("Failed to read response: {e}"))
            })?;

            if !status.is_success() {
                return Err(Self::parse_error_response(status, &body));
            }
            Self::parse_success_body(&body)
        }
        .await;

        AppLogger::log_llm_request(
            &self.config.provider_name,
            model,
            result.is_ok(),
            elapsed_ms(started),
        );
        let (content, response) = result?;
        let choice = response.choices.into_iter().next();

        Ok(ChatResponse {
            content,
            model: response.model.unwrap_or_else(|| model.to_owned()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.and_then(|c| c.finish_reason),
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        debug!(
            "Performing {} health check at {}",
            self.config.provider_name, self.config.base_url
        );

        let response = self
            .add_auth_header(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("{} health check passed", self.config.provider_name);
        } else {
            warn!(
                "{} health check failed with status: {}",
                self.config.provider_name,
                response.status()
            );
        }
        Ok(healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_detected_from_port() {
        let vllm =
            OpenAiCompatibleConfig::for_base_url("http://localhost:8000/v1", "llama3", None);
        assert_eq!(vllm.display_name, "vLLM (Local)");
        assert!(vllm.capabilities.contains(LlmCapabilities::JSON_MODE));
        assert_eq!(
            OpenAiCompatibleConfig::for_base_url("https://llm.example.com/v1", "m", None)
                .provider_name,
            "local"
        );
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let config =
            OpenAiCompatibleConfig::for_base_url(DEFAULT_BASE_URL, "llama3", Some(String::new()));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_missing_model_maps_to_external_error() {
        let body = r#"{"error":{"message":"model \"llama3\" not found, try pulling it first","type":"api_error"}}"#;
        let err = OpenAiCompatibleProvider::parse_error_response(StatusCode::NOT_FOUND, body);
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("not found, try pulling it first"));
    }

    #[test]
    fn test_gateway_errors_map_to_unavailable() {
        let err = OpenAiCompatibleProvider::parse_error_response(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_empty_choices_rejected() {
        let err = OpenAiCompatibleProvider::parse_success_body(r#"{"choices":[]}"#).unwrap_err();
        assert!(err.message.contains("no choices"));
    }
}
