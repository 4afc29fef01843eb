// ABOUTME: Main library entry point for the personal health coach
// ABOUTME: Log store, seven-day aggregation, and local-LLM coaching plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

#![deny(unsafe_code)]

//! # Health Coach
//!
//! Records fitness and nutrition logs for a user, summarizes the trailing
//! seven days, and asks a locally hosted language model for workout plans,
//! nutrition plans and motivational messages. Every generated text is
//! appended to a plan store so the full history stays available.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite` store for users, logs and generated texts
//! - **Intelligence**: window aggregation and dashboard series
//! - **LLM**: provider trait and the `OpenAI`-compatible client
//! - **Coaching**: personas, prompt builder, client and pipeline
//! - **Config** / **Logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use health_coach::coaching::{CoachingClient, HealthCoach};
//! use health_coach::config::AppConfig;
//! use health_coach::database::Database;
//! use health_coach::errors::AppResult;
//! use health_coach::models::{FitnessGoal, User};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let db = Database::new(&config.database_url).await?;
//!     let user_id = db.create_user(&User::new("alice", FitnessGoal::Endurance)).await?;
//!
//!     let coach = HealthCoach::new(CoachingClient::from_config(&config.llm)?);
//!     let plan = coach.generate_workout_plan(&db, user_id, Utc::now()).await?;
//!     println!("{}", plan.outcome.text());
//!     Ok(())
//! }
//! ```

/// Coaching pipeline: personas, prompts, client, service
pub mod coaching;

/// Environment-based configuration
pub mod config;

/// `SQLite` store for users, logs, and generated texts
pub mod database;

/// Log aggregation and dashboard series
pub mod intelligence;

/// Text-generation provider layer
pub mod llm;

/// Structured logging configuration
pub mod logging;

// Re-export foundation modules from health-coach-core
pub use health_coach_core::{constants, errors, models};
