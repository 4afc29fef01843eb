// ABOUTME: Fitness log model for recorded workouts
// ABOUTME: FitnessLog, NewFitnessLog, and the ActivityType enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::normalize_label;
use crate::constants::limits;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Category of a logged workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running
    Running,
    /// Walking
    Walking,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Weight or resistance training
    WeightTraining,
    /// Yoga
    Yoga,
    /// Pilates
    Pilates,
    /// High-intensity interval training
    Hiit,
    /// Anything else
    Other,
}

impl ActivityType {
    /// All activity types in display order
    pub const ALL: [Self; 9] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::Swimming,
        Self::WeightTraining,
        Self::Yoga,
        Self::Pilates,
        Self::Hiit,
        Self::Other,
    ];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::WeightTraining => "weight_training",
            Self::Yoga => "yoga",
            Self::Pilates => "pilates",
            Self::Hiit => "hiit",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::WeightTraining => "Weight Training",
            Self::Yoga => "Yoga",
            Self::Pilates => "Pilates",
            Self::Hiit => "HIIT",
            Self::Other => "Other",
        }
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid activity type: {s}")))
    }
}

/// A fitness log as submitted, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFitnessLog {
    /// Owning user
    pub user_id: Uuid,
    /// Activity category
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: f64,
    /// Optional free-text note
    pub notes: Option<String>,
}

impl NewFitnessLog {
    /// Create a log entry without notes
    #[must_use]
    pub const fn new(
        user_id: Uuid,
        activity_type: ActivityType,
        duration_minutes: u32,
        calories_burned: f64,
    ) -> Self {
        Self {
            user_id,
            activity_type,
            duration_minutes,
            calories_burned,
            notes: None,
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the ranges accepted by the logging form
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if the duration is outside 1-300 minutes
    /// or the calorie count is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        if !(limits::MIN_DURATION_MINUTES..=limits::MAX_DURATION_MINUTES)
            .contains(&self.duration_minutes)
        {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!(
                    "Duration must be between {} and {} minutes, got {}",
                    limits::MIN_DURATION_MINUTES,
                    limits::MAX_DURATION_MINUTES,
                    self.duration_minutes
                ),
            ));
        }
        if !self.calories_burned.is_finite() || self.calories_burned < 0.0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!(
                    "Calories burned must be non-negative, got {}",
                    self.calories_burned
                ),
            ));
        }
        Ok(())
    }
}

/// A stored fitness log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessLog {
    /// Unique log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Activity category
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: f64,
    /// Optional free-text note
    pub notes: Option<String>,
    /// When the log was recorded
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_labels() {
        assert_eq!(ActivityType::Hiit.to_string(), "HIIT");
        assert_eq!(
            "Weight Training".parse::<ActivityType>().unwrap(),
            ActivityType::WeightTraining
        );
        assert_eq!("HIIT".parse::<ActivityType>().unwrap(), ActivityType::Hiit);
        assert!("Climbing".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_duration() {
        let user_id = Uuid::new_v4();
        assert!(NewFitnessLog::new(user_id, ActivityType::Running, 30, 300.0)
            .validate()
            .is_ok());

        let err = NewFitnessLog::new(user_id, ActivityType::Running, 0, 10.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = NewFitnessLog::new(user_id, ActivityType::Running, 301, 10.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_rejects_negative_calories() {
        let log = NewFitnessLog::new(Uuid::new_v4(), ActivityType::Yoga, 45, -1.0);
        assert!(log.validate().is_err());
    }
}
