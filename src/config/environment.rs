// ABOUTME: Environment-based configuration for the database and text-generation service
// ABOUTME: Parses, defaults, and validates settings with typed environment and log level enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::env;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{defaults, env_config, llm};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::LoggingConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Text-generation service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// OpenAI-compatible base URL, e.g. `http://localhost:11434/v1`
    pub base_url: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Optional bearer token
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: llm::DEFAULT_BASE_URL.to_owned(),
            model: llm::DEFAULT_MODEL.to_owned(),
            api_key: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Subscriber settings from `RUST_LOG`, `LOG_FORMAT` and related variables
    pub logging: LoggingConfig,
    /// `SQLite` connection string
    pub database_url: String,
    /// Text-generation service settings
    pub llm: LlmConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            database_url: defaults::DATABASE_URL.to_owned(),
            llm: LlmConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Variables already set in the process take precedence.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a value fails validation
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from the given dotenv file plus the environment
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if the file cannot be read or parsed, and
    /// `CONFIG_INVALID` if a value fails validation
    pub fn from_env_file(path: &Path) -> AppResult<Self> {
        dotenvy::from_path(path).map_err(|e| {
            AppError::config(format!("Failed to load {}: {e}", path.display())).with_source(e)
        })?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a value fails validation
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            environment: get(env_config::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            logging: LoggingConfig::from_lookup(&get),
            database_url: get(env_config::DATABASE_URL)
                .unwrap_or_else(|| defaults::DATABASE_URL.to_owned()),
            llm: LlmConfig {
                base_url: get(env_config::LOCAL_LLM_BASE_URL)
                    .unwrap_or_else(|| llm::DEFAULT_BASE_URL.to_owned()),
                model: get(env_config::LOCAL_LLM_MODEL)
                    .unwrap_or_else(|| llm::DEFAULT_MODEL.to_owned()),
                api_key: get(env_config::LOCAL_LLM_API_KEY),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, then re-validate
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if an override fails validation
    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        llm_base_url: Option<String>,
        model: Option<String>,
    ) -> AppResult<Self> {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        if let Some(url) = llm_base_url {
            self.llm.base_url = url;
        }
        if let Some(model) = model {
            self.llm.model = model;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` naming the offending setting
    pub fn validate(&self) -> AppResult<()> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "{} must be a sqlite: URL, got '{}'",
                    env_config::DATABASE_URL,
                    self.database_url
                ),
            ));
        }

        if !(self.llm.base_url.starts_with("http://") || self.llm.base_url.starts_with("https://"))
        {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "{} must start with http:// or https://, got '{}'",
                    env_config::LOCAL_LLM_BASE_URL,
                    self.llm.base_url
                ),
            ));
        }

        if self.llm.model.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must not be empty", env_config::LOCAL_LLM_MODEL),
            ));
        }

        Ok(())
    }

    /// One-line human-readable summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={}, log_level={}, database={}, llm={} (model {}), api_key={}",
            self.environment,
            self.logging.level,
            self.database_url,
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "set"
            } else {
                "unset"
            }
        )
    }
}
