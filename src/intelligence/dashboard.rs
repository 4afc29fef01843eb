// ABOUTME: Dashboard view over the trailing seven-day window
// ABOUTME: Combines window summaries with per-day fitness and nutrition series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::aggregation::{AggregationWindow, FitnessSummary, NutritionSummary};
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{FitnessLog, NutritionLog};

/// Exercise totals for one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFitness {
    /// Calendar day
    pub date: NaiveDate,
    /// Minutes exercised that day
    pub duration_minutes: u64,
    /// Calories burned that day
    pub calories_burned: f64,
}

/// Intake totals for one calendar day (UTC)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNutrition {
    /// Calendar day
    pub date: NaiveDate,
    /// Calories eaten that day
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fats_g: f64,
}

/// Everything the dashboard shows for one user
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Owner of the data
    pub user_id: Uuid,
    /// First instant of the window
    pub window_start: DateTime<Utc>,
    /// Last instant of the window
    pub window_end: DateTime<Utc>,
    /// Fitness totals
    pub fitness: FitnessSummary,
    /// Nutrition totals and daily averages
    pub nutrition: NutritionSummary,
    /// Days with at least one session, ascending
    pub fitness_by_day: Vec<DailyFitness>,
    /// Days with at least one meal, ascending
    pub nutrition_by_day: Vec<DailyNutrition>,
}

impl DashboardSummary {
    /// Whether both windows are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fitness.is_empty() && self.nutrition.is_empty()
    }
}

/// Assemble the dashboard for `user_id` at `now`
///
/// # Errors
///
/// Returns an error if a log query fails
pub async fn build_dashboard(
    db: &Database,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<DashboardSummary> {
    let window = AggregationWindow::trailing(now);
    let fitness_logs = db.get_fitness_logs_in_range(user_id, window.range()).await?;
    let nutrition_logs = db
        .get_nutrition_logs_in_range(user_id, window.range())
        .await?;

    Ok(DashboardSummary {
        user_id,
        window_start: window.start(),
        window_end: window.end(),
        fitness: FitnessSummary::from_logs(&fitness_logs),
        nutrition: NutritionSummary::from_logs(&nutrition_logs),
        fitness_by_day: fitness_series(&fitness_logs),
        nutrition_by_day: nutrition_series(&nutrition_logs),
    })
}

fn fitness_series(logs: &[FitnessLog]) -> Vec<DailyFitness> {
    let mut days: BTreeMap<NaiveDate, DailyFitness> = BTreeMap::new();
    for log in logs {
        let date = log.created_at.date_naive();
        let day = days.entry(date).or_insert(DailyFitness {
            date,
            duration_minutes: 0,
            calories_burned: 0.0,
        });
        day.duration_minutes += u64::from(log.duration_minutes);
        day.calories_burned += log.calories_burned;
    }
    days.into_values().collect()
}

fn nutrition_series(logs: &[NutritionLog]) -> Vec<DailyNutrition> {
    let mut days: BTreeMap<NaiveDate, DailyNutrition> = BTreeMap::new();
    for log in logs {
        let date = log.created_at.date_naive();
        let day = days.entry(date).or_insert(DailyNutrition {
            date,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
        });
        day.calories += log.calories;
        day.protein_g += log.protein_g;
        day.carbs_g += log.carbs_g;
        day.fats_g += log.fats_g;
    }
    days.into_values().collect()
}
