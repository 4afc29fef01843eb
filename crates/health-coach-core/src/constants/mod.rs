// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Aggregation window, LLM defaults, environment variable names, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Log aggregation constants
pub mod aggregation {
    /// Length of the trailing aggregation window in days
    pub const WINDOW_DAYS: i64 = 7;

    /// Divisor used for per-day nutrition averages.
    ///
    /// Always the window length, independent of how many days actually have
    /// entries.
    pub const NUTRITION_AVERAGE_DIVISOR: f64 = 7.0;

    /// Placeholder rendered when no activity was logged in the window
    pub const NO_ACTIVITIES_PLACEHOLDER: &str = "None";
}

/// Text-generation service defaults
pub mod llm {
    /// Default OpenAI-compatible base URL (Ollama)
    pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "llama3";

    /// Service label used in external-service error messages
    pub const SERVICE_LABEL: &str = "LocalLLM";

    /// Connection timeout when reaching the local server
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env_config {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// OpenAI-compatible base URL
    pub const LOCAL_LLM_BASE_URL: &str = "LOCAL_LLM_BASE_URL";
    /// Model identifier
    pub const LOCAL_LLM_MODEL: &str = "LOCAL_LLM_MODEL";
    /// Optional bearer token
    pub const LOCAL_LLM_API_KEY: &str = "LOCAL_LLM_API_KEY";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default values
pub mod defaults {
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/health_coach.db";
}

/// Input limits enforced by the CLI forms
pub mod limits {
    /// Minimum user age
    pub const MIN_AGE: u32 = 1;
    /// Maximum user age
    pub const MAX_AGE: u32 = 120;
    /// Minimum activity duration in minutes
    pub const MIN_DURATION_MINUTES: u32 = 1;
    /// Maximum activity duration in minutes
    pub const MAX_DURATION_MINUTES: u32 = 300;
    /// Maximum username length
    pub const MAX_USERNAME_LENGTH: usize = 50;
    /// Maximum food description length
    pub const MAX_FOOD_ITEM_LENGTH: usize = 100;
}

/// Service names for structured logging
pub mod service_names {
    /// Name of this application in log output
    pub const HEALTH_COACH: &str = "health-coach";
}
