// ABOUTME: Coaching pipeline from log aggregation to persisted plan
// ABOUTME: Generates workout plans, nutrition plans, and motivational messages per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::client::{CoachingClient, CoachingOutcome, ServiceHealth};
use super::prompts::{build_prompt, CoachingPrompt, PromptInput};
use crate::database::{elapsed_ms, Database};
use crate::errors::AppResult;
use crate::intelligence::{summarize_fitness, summarize_nutrition};
use crate::logging::AppLogger;
use crate::models::{FitnessGoal, GeneratedText};

/// A persisted generation and the outcome it came from
#[derive(Debug, Clone, Serialize)]
pub struct CoachingResult {
    /// Stored record
    pub record: GeneratedText,
    /// Tagged outcome of the model call
    pub outcome: CoachingOutcome,
}

/// The coaching pipeline
///
/// Holds only the client; the store is passed to every call. Store errors
/// propagate, text-generation errors never do.
#[derive(Clone)]
pub struct HealthCoach {
    client: CoachingClient,
}

impl HealthCoach {
    /// Pipeline using `client` for generation
    #[must_use]
    pub const fn new(client: CoachingClient) -> Self {
        Self { client }
    }

    /// Underlying client
    #[must_use]
    pub const fn client(&self) -> &CoachingClient {
        &self.client
    }

    /// Workout plan from the fitness window ending at `now`
    ///
    /// # Errors
    ///
    /// Returns an error if reading logs or storing the plan fails
    pub async fn generate_workout_plan(
        &self,
        db: &Database,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<CoachingResult> {
        let summary = summarize_fitness(db, user_id, now).await?;
        let prompt = build_prompt(&PromptInput::Workout {
            user_id,
            summary: &summary,
        });
        self.generate_and_store(db, user_id, &prompt, now).await
    }

    /// Nutrition plan from the nutrition window ending at `now`
    ///
    /// A missing user record only removes the profile context.
    ///
    /// # Errors
    ///
    /// Returns an error if reading logs or storing the plan fails
    pub async fn generate_nutrition_plan(
        &self,
        db: &Database,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<CoachingResult> {
        let summary = summarize_nutrition(db, user_id, now).await?;
        let profile = db.get_user(user_id).await?.map(|user| user.profile());
        let prompt = build_prompt(&PromptInput::Nutrition {
            user_id,
            summary: &summary,
            profile: profile.as_ref(),
        });
        self.generate_and_store(db, user_id, &prompt, now).await
    }

    /// Motivational message for `goal`, or the user's own goal when `None`
    ///
    /// Falls back to the default goal when neither is known.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the user or storing the message fails
    pub async fn generate_motivation(
        &self,
        db: &Database,
        user_id: Uuid,
        goal: Option<FitnessGoal>,
        now: DateTime<Utc>,
    ) -> AppResult<CoachingResult> {
        let profile = db.get_user(user_id).await?.map(|user| user.profile());
        let goal = goal
            .or_else(|| profile.map(|p| p.fitness_goal))
            .unwrap_or_default();
        let prompt = build_prompt(&PromptInput::Motivation {
            goal,
            profile: profile.as_ref(),
        });
        self.generate_and_store(db, user_id, &prompt, now).await
    }

    /// Probe the text-generation service
    pub async fn service_health(&self) -> ServiceHealth {
        self.client.health().await
    }

    async fn generate_and_store(
        &self,
        db: &Database,
        user_id: Uuid,
        prompt: &CoachingPrompt,
        now: DateTime<Utc>,
    ) -> AppResult<CoachingResult> {
        let started = Instant::now();
        let outcome = self.client.generate(prompt).await;
        let kind = prompt.persona.text_kind();

        let record = db
            .create_generated_text(
                user_id,
                kind,
                outcome.text(),
                outcome.status(),
                outcome.cause(),
                now,
            )
            .await?;

        AppLogger::log_generation_event(
            &user_id.to_string(),
            kind.as_str(),
            !outcome.is_success(),
            elapsed_ms(started),
        );
        Ok(CoachingResult { record, outcome })
    }
}
