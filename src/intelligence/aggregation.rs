// ABOUTME: Trailing seven-day aggregation of fitness and nutrition logs
// ABOUTME: Produces totals, activity sequences, and fixed-divisor daily nutrition averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::constants::aggregation::{NUTRITION_AVERAGE_DIVISOR, WINDOW_DAYS};
use crate::database::{Database, TimeRange};
use crate::errors::AppResult;
use crate::models::{ActivityType, FitnessLog, NutritionLog};

/// The `[now - 7 days, now]` window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationWindow {
    range: TimeRange,
}

impl AggregationWindow {
    /// Window ending at `now`
    #[must_use]
    pub fn trailing(now: DateTime<Utc>) -> Self {
        Self {
            range: TimeRange::new(now - Duration::days(WINDOW_DAYS), now),
        }
    }

    /// Underlying time range
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    /// Window start
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.range.start
    }

    /// Window end
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.range.end
    }
}

/// Fitness statistics for one window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FitnessSummary {
    /// Sum of session durations
    pub total_duration_minutes: u64,
    /// Sum of calories burned
    pub total_calories_burned: f64,
    /// Activity of each session in log order, duplicates kept
    pub activities: Vec<ActivityType>,
}

impl FitnessSummary {
    /// Fold logs (in log order) into a summary
    #[must_use]
    pub fn from_logs(logs: &[FitnessLog]) -> Self {
        logs.iter().fold(Self::default(), |mut summary, log| {
            summary.total_duration_minutes += u64::from(log.duration_minutes);
            summary.total_calories_burned += log.calories_burned;
            summary.activities.push(log.activity_type);
            summary
        })
    }

    /// Number of sessions in the window
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.activities.len()
    }

    /// Mean session length; 0 when there are no sessions
    #[must_use]
    pub fn average_session_minutes(&self) -> f64 {
        if self.activities.is_empty() {
            0.0
        } else {
            self.total_duration_minutes as f64 / self.activities.len() as f64
        }
    }

    /// Display labels of the logged activities, in log order
    #[must_use]
    pub fn activity_labels(&self) -> Vec<&'static str> {
        self.activities
            .iter()
            .map(ActivityType::display_name)
            .collect()
    }

    /// Whether the window had no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Nutrition statistics for one window
///
/// Daily averages always divide by the window length, so two days of entries
/// inside a seven-day window are spread over seven days.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionSummary {
    /// Sum of calories
    pub total_calories: f64,
    /// Sum of protein grams
    pub total_protein_g: f64,
    /// Sum of carbohydrate grams
    pub total_carbs_g: f64,
    /// Sum of fat grams
    pub total_fats_g: f64,
    /// Number of entries in the window
    pub entry_count: usize,
}

impl NutritionSummary {
    /// Fold logs into a summary
    #[must_use]
    pub fn from_logs(logs: &[NutritionLog]) -> Self {
        logs.iter().fold(Self::default(), |mut summary, log| {
            summary.total_calories += log.calories;
            summary.total_protein_g += log.protein_g;
            summary.total_carbs_g += log.carbs_g;
            summary.total_fats_g += log.fats_g;
            summary.entry_count += 1;
            summary
        })
    }

    /// Calories per day over the full window
    #[must_use]
    pub fn avg_daily_calories(&self) -> f64 {
        self.total_calories / NUTRITION_AVERAGE_DIVISOR
    }

    /// Protein grams per day over the full window
    #[must_use]
    pub fn avg_daily_protein_g(&self) -> f64 {
        self.total_protein_g / NUTRITION_AVERAGE_DIVISOR
    }

    /// Carbohydrate grams per day over the full window
    #[must_use]
    pub fn avg_daily_carbs_g(&self) -> f64 {
        self.total_carbs_g / NUTRITION_AVERAGE_DIVISOR
    }

    /// Fat grams per day over the full window
    #[must_use]
    pub fn avg_daily_fats_g(&self) -> f64 {
        self.total_fats_g / NUTRITION_AVERAGE_DIVISOR
    }

    /// Whether the window had no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

/// Fitness statistics for `user_id` over the window ending at `now`
///
/// # Errors
///
/// Returns an error if the log query fails
pub async fn summarize_fitness(
    db: &Database,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<FitnessSummary> {
    let window = AggregationWindow::trailing(now);
    let logs = db.get_fitness_logs_in_range(user_id, window.range()).await?;
    let summary = FitnessSummary::from_logs(&logs);

    debug!(
        user.id = %user_id,
        sessions = summary.session_count(),
        total_minutes = summary.total_duration_minutes,
        "Aggregated fitness window"
    );
    Ok(summary)
}

/// Nutrition statistics for `user_id` over the window ending at `now`
///
/// # Errors
///
/// Returns an error if the log query fails
pub async fn summarize_nutrition(
    db: &Database,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<NutritionSummary> {
    let window = AggregationWindow::trailing(now);
    let logs = db.get_nutrition_logs_in_range(user_id, window.range()).await?;
    let summary = NutritionSummary::from_logs(&logs);

    debug!(
        user.id = %user_id,
        entries = summary.entry_count,
        total_calories = summary.total_calories,
        "Aggregated nutrition window"
    );
    Ok(summary)
}
