// ABOUTME: Generated coaching text model for the append-only plan store
// ABOUTME: GeneratedText, TextKind, and GenerationStatus definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::normalize_label;
use crate::errors::AppError;

/// Kind of generated coaching text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// Weekly workout plan
    WorkoutPlan,
    /// Nutrition plan
    NutritionPlan,
    /// Short motivational message
    MotivationalText,
}

impl TextKind {
    /// All kinds
    pub const ALL: [Self; 3] = [Self::WorkoutPlan, Self::NutritionPlan, Self::MotivationalText];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WorkoutPlan => "workout_plan",
            Self::NutritionPlan => "nutrition_plan",
            Self::MotivationalText => "motivational_text",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WorkoutPlan => "Workout Plan",
            Self::NutritionPlan => "Nutrition Plan",
            Self::MotivationalText => "Motivational Text",
        }
    }
}

impl Display for TextKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for TextKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid text kind: {s}")))
    }
}

/// Whether a generated text came from the model or is a fallback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// Text is the model's reply
    Success,
    /// Model call failed; text is the fallback message
    Unavailable,
}

impl GenerationStatus {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Unavailable => "unavailable",
        }
    }
}

impl FromStr for GenerationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(AppError::invalid_input(format!(
                "Invalid generation status: {s}"
            ))),
        }
    }
}

/// A persisted workout plan, nutrition plan, or motivational message
///
/// Every generation request creates a new record; earlier records are kept
/// so the full history can be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Kind of text
    pub kind: TextKind,
    /// Full text body as shown to the user
    pub content: String,
    /// Model reply or fallback
    pub status: GenerationStatus,
    /// Error description when `status` is `Unavailable`
    pub failure_cause: Option<String>,
    /// When the text was generated
    pub generated_at: DateTime<Utc>,
}

impl GeneratedText {
    /// Whether this record holds a fallback message rather than a model reply
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self.status, GenerationStatus::Unavailable)
    }
}
