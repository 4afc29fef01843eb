// ABOUTME: Core data models for the health coach application
// ABOUTME: Re-exports User, FitnessLog, NutritionLog, and GeneratedText definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! # Data Models
//!
//! Every log and generated text is owned by exactly one [`User`]. Logs and
//! generated texts are append-only: they are created and read, never updated
//! or deleted.
//!
//! - [`User`]: identity, demographic attributes, fitness goal
//! - [`FitnessLog`]: a single logged workout
//! - [`NutritionLog`]: a single logged meal or food item
//! - [`GeneratedText`]: a workout plan, nutrition plan, or motivational message

mod coaching;
mod fitness;
mod nutrition;
mod user;

pub use coaching::{GeneratedText, GenerationStatus, TextKind};
pub use fitness::{ActivityType, FitnessLog, NewFitnessLog};
pub use nutrition::{MealType, NewNutritionLog, NutritionLog};
pub use user::{FitnessGoal, User, UserProfile};

/// Normalize a user-supplied label for enum parsing
///
/// Lowercases and maps spaces and hyphens to underscores so that
/// `"Weight Training"`, `"weight-training"` and `"weight_training"` compare equal.
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
