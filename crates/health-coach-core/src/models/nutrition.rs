// ABOUTME: Nutrition log model for recorded meals and food items
// ABOUTME: NutritionLog, NewNutritionLog, and the MealType enumeration
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

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid meal type: {s}")))
    }
}

/// A nutrition log as submitted, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNutritionLog {
    /// Owning user
    pub user_id: Uuid,
    /// Meal category
    pub meal_type: MealType,
    /// Food description
    pub food_item: String,
    /// Calories consumed
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fats_g: f64,
}

impl NewNutritionLog {
    /// Create a nutrition log entry with zeroed macronutrients
    #[must_use]
    pub fn new(
        user_id: Uuid,
        meal_type: MealType,
        food_item: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            user_id,
            meal_type,
            food_item: food_item.into(),
            calories,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
        }
    }

    /// Set macronutrient grams (protein, carbs, fats)
    #[must_use]
    pub const fn with_macros(mut self, protein_g: f64, carbs_g: f64, fats_g: f64) -> Self {
        self.protein_g = protein_g;
        self.carbs_g = carbs_g;
        self.fats_g = fats_g;
        self
    }

    /// Check the ranges accepted by the logging form
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for an empty or overlong food description and
    /// `VALUE_OUT_OF_RANGE` for any negative or non-finite quantity.
    pub fn validate(&self) -> AppResult<()> {
        let food_item = self.food_item.trim();
        if food_item.is_empty() {
            return Err(AppError::invalid_input("Food item must not be empty"));
        }
        if food_item.chars().count() > limits::MAX_FOOD_ITEM_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Food item must be at most {} characters",
                limits::MAX_FOOD_ITEM_LENGTH
            )));
        }
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein_g),
            ("carbs", self.carbs_g),
            ("fats", self.fats_g),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("{field} must be non-negative, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// A stored nutrition log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Unique log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Meal category
    pub meal_type: MealType,
    /// Food description
    pub food_item: String,
    /// Calories consumed
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fats_g: f64,
    /// When the log was recorded
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_macros() {
        let log = NewNutritionLog::new(Uuid::new_v4(), MealType::Snack, "Apple", 95.0);
        assert!(log.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_macros() {
        let log = NewNutritionLog::new(Uuid::new_v4(), MealType::Lunch, "Salad", 350.0)
            .with_macros(12.0, -3.0, 9.0);
        let err = log.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.contains("carbs"));
    }

    #[test]
    fn test_validate_rejects_blank_food_item() {
        let log = NewNutritionLog::new(Uuid::new_v4(), MealType::Dinner, "   ", 500.0);
        assert_eq!(log.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }
}
