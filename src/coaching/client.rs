// ABOUTME: Coaching client that sends prompts to the text-generation service
// ABOUTME: Returns a tagged outcome, substituting persona fallback text when the service fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::persona::FailureContext;
use super::prompts::CoachingPrompt;
use crate::config::LlmConfig;
use crate::errors::AppResult;
use crate::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::models::GenerationStatus;

/// Result of one generation attempt
///
/// Both variants carry text that can be shown to the user; only `Success`
/// holds a model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CoachingOutcome {
    /// The model replied
    Success {
        /// Model reply
        text: String,
        /// Model that produced the reply
        model: String,
    },
    /// The service failed; `text` is the persona fallback
    Unavailable {
        /// Fallback text embedding the cause
        text: String,
        /// Error description
        cause: String,
    },
}

impl CoachingOutcome {
    /// Text to display and persist
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } | Self::Unavailable { text, .. } => text,
        }
    }

    /// Whether the model replied
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure description, if any
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Unavailable { cause, .. } => Some(cause),
        }
    }

    /// Status recorded in the plan store
    #[must_use]
    pub const fn status(&self) -> GenerationStatus {
        match self {
            Self::Success { .. } => GenerationStatus::Success,
            Self::Unavailable { .. } => GenerationStatus::Unavailable,
        }
    }
}

/// Reachability report for the text-generation service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Provider display name
    pub service: String,
    /// Configured model
    pub model: String,
    /// Capability flags of the provider, e.g. `SYSTEM_MESSAGES`
    pub capabilities: Vec<&'static str>,
    /// Whether the service answered successfully
    pub reachable: bool,
    /// Error description when unreachable
    pub detail: Option<String>,
}

/// Sends coaching prompts to a text-generation provider
#[derive(Clone)]
pub struct CoachingClient {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl CoachingClient {
    /// Client using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_owned();
        Self { provider, model }
    }

    /// Override the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Client backed by an `OpenAI`-compatible endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from(config))?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Model sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` and wait for the reply
    ///
    /// Never fails: service errors and empty replies become
    /// [`CoachingOutcome::Unavailable`] with the persona's fallback text.
    pub async fn generate(&self, prompt: &CoachingPrompt) -> CoachingOutcome {
        let request = prompt.to_chat_request(&self.model, self.provider.capabilities());
        debug!(
            persona = %prompt.persona,
            model = %self.model,
            "Requesting coaching text"
        );

        let cause = match self.provider.complete(&request).await {
            Ok(response) if !response.content.trim().is_empty() => {
                return CoachingOutcome::Success {
                    text: response.content,
                    model: response.model,
                };
            }
            Ok(_) => format!("{} returned an empty reply", self.provider.display_name()),
            Err(e) => e.message,
        };

        warn!(
            persona = %prompt.persona,
            provider = self.provider.name(),
            cause = %cause,
            "Text generation failed, using fallback"
        );
        let text = prompt.fallback_text(&FailureContext {
            cause: &cause,
            service: self.provider.display_name(),
            model: &self.model,
        });
        CoachingOutcome::Unavailable { text, cause }
    }

    /// Probe the service
    pub async fn health(&self) -> ServiceHealth {
        let (reachable, detail) = match self.provider.health_check().await {
            Ok(true) => (true, None),
            Ok(false) => (false, Some("service answered with an error status".to_owned())),
            Err(e) => (false, Some(e.message)),
        };
        ServiceHealth {
            service: self.provider.display_name().to_owned(),
            model: self.model.clone(),
            capabilities: self.provider.capabilities().labels(),
            reachable,
            detail,
        }
    }
}
