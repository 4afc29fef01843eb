// ABOUTME: User model with demographic attributes and fitness goal
// ABOUTME: User, FitnessGoal, and the UserProfile prompt context
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

/// Fitness goal selected at registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Maintain current condition
    Maintenance,
    /// Improve endurance
    Endurance,
    /// General health and fitness
    #[default]
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals in display order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Maintenance,
        Self::Endurance,
        Self::GeneralFitness,
    ];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }

    /// Human-readable label, as rendered into prompts
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid fitness goal: {s}")))
    }
}

/// A registered user
///
/// Owns all fitness logs, nutrition logs and generated texts that reference
/// its id. The username is unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Unique username
    pub username: String,
    /// Age in years
    pub age: Option<u32>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Selected fitness goal
    pub fitness_goal: FitnessGoal,
    /// Free-text dietary preferences (e.g. "Vegetarian, Gluten-Free")
    pub dietary_preferences: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and the current timestamp
    #[must_use]
    pub fn new(username: impl Into<String>, fitness_goal: FitnessGoal) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            age: None,
            weight_kg: None,
            height_cm: None,
            fitness_goal,
            dietary_preferences: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the age
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the body weight in kilograms
    #[must_use]
    pub const fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the height in centimeters
    #[must_use]
    pub const fn with_height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Set dietary preferences
    #[must_use]
    pub fn with_dietary_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.dietary_preferences = preferences.into();
        self
    }

    /// Profile fields used as prompt context
    #[must_use]
    pub const fn profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            fitness_goal: self.fitness_goal,
        }
    }
}

/// Demographic context rendered into coaching prompts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Selected fitness goal
    pub fitness_goal: FitnessGoal,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        user.profile()
    }
}
