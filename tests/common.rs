// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, seeded users and logs, and a scripted LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_coach`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use health_coach::{
    coaching::{CoachingClient, HealthCoach},
    database::Database,
    errors::AppError,
    llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider},
    models::{
        ActivityType, FitnessGoal, FitnessLog, MealType, NewFitnessLog, NewNutritionLog,
        NutritionLog, User,
    },
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with migrations applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Fixed reference instant so window arithmetic is reproducible
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .single()
        .expect("valid reference timestamp")
}

/// Register a user with a complete profile
pub async fn create_test_user(db: &Database, username: &str) -> Result<User> {
    let user = User::new(username, FitnessGoal::WeightLoss)
        .with_age(30)
        .with_weight_kg(70.0)
        .with_height_cm(175.0);
    db.create_user(&user).await?;
    Ok(user)
}

/// Store a fitness log at `created_at`
pub async fn log_activity_at(
    db: &Database,
    user_id: Uuid,
    activity: ActivityType,
    duration_minutes: u32,
    calories_burned: f64,
    created_at: DateTime<Utc>,
) -> Result<FitnessLog> {
    let log = NewFitnessLog::new(user_id, activity, duration_minutes, calories_burned);
    Ok(db.create_fitness_log_at(&log, created_at).await?)
}

/// Store a nutrition log at `created_at`
pub async fn log_meal_at(
    db: &Database,
    user_id: Uuid,
    meal: MealType,
    calories: f64,
    (protein_g, carbs_g, fats_g): (f64, f64, f64),
    created_at: DateTime<Utc>,
) -> Result<NutritionLog> {
    let log = NewNutritionLog::new(user_id, meal, "Test meal", calories)
        .with_macros(protein_g, carbs_g, fats_g);
    Ok(db.create_nutrition_log_at(&log, created_at).await?)
}

/// One scripted reply: text on success, message on failure
pub type ScriptedReply = std::result::Result<String, String>;

/// LLM provider that replays scripted replies and records every request
///
/// Once the script runs out, the last reply is repeated.
pub struct MockLlmProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    last: Mutex<Option<ScriptedReply>>,
    requests: Mutex<Vec<ChatRequest>>,
    healthy: bool,
    capabilities: LlmCapabilities,
}

impl MockLlmProvider {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            healthy: true,
            capabilities: LlmCapabilities::chat(),
        }
    }

    /// Report a model that ignores system messages
    pub fn without_system_messages(mut self) -> Self {
        self.capabilities = LlmCapabilities::empty();
        self
    }

    /// Provider that always answers with `text`
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_owned())])
    }

    /// Provider that always fails with `message`
    pub fn failing(message: &str) -> Self {
        let mut provider = Self::new(vec![Err(message.to_owned())]);
        provider.healthy = false;
        provider
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    fn next_reply(&self) -> ScriptedReply {
        let mut replies = self.replies.lock().expect("replies lock");
        let mut last = self.last.lock().expect("last lock");
        if let Some(reply) = replies.pop_front() {
            *last = Some(reply.clone());
            reply
        } else {
            last.clone()
                .unwrap_or_else(|| Err("no scripted reply".to_owned()))
        }
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn display_name(&self) -> &str {
        "Mock LLM"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> std::result::Result<ChatResponse, AppError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        match self.next_reply() {
            Ok(content) => Ok(ChatResponse {
                content,
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "mock-model".to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(message) => Err(AppError::external_unavailable("LocalLLM", message)),
        }
    }

    async fn health_check(&self) -> std::result::Result<bool, AppError> {
        if self.healthy {
            Ok(true)
        } else {
            Err(AppError::external_unavailable(
                "LocalLLM",
                "connection refused",
            ))
        }
    }
}

/// Coach backed by `provider`, keeping a handle for request inspection
pub fn coach_with(provider: MockLlmProvider) -> (HealthCoach, Arc<MockLlmProvider>) {
    let provider = Arc::new(provider);
    let client = CoachingClient::new(provider.clone());
    (HealthCoach::new(client), provider)
}
