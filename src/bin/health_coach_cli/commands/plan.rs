// ABOUTME: Plan commands for health-coach
// ABOUTME: Generates and stores workout plans, nutrition plans, and motivational messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use chrono::Utc;
use health_coach::{
    coaching::HealthCoach, database::Database, errors::AppResult, models::FitnessGoal,
};
use tracing::info;

use crate::helpers::display::display_coaching_result;

/// Generate next week's workout plan
pub async fn workout(coach: &HealthCoach, database: &Database, username: &str) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;
    info!("Generating workout plan for {}", user.username);

    let result = coach
        .generate_workout_plan(database, user.id, Utc::now())
        .await?;
    display_coaching_result(&result);
    Ok(())
}

/// Generate a nutrition plan
pub async fn nutrition(coach: &HealthCoach, database: &Database, username: &str) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;
    info!("Generating nutrition plan for {}", user.username);

    let result = coach
        .generate_nutrition_plan(database, user.id, Utc::now())
        .await?;
    display_coaching_result(&result);
    Ok(())
}

/// Generate a motivational message, for `goal` or the user's own goal
pub async fn motivation(
    coach: &HealthCoach,
    database: &Database,
    username: &str,
    goal: Option<FitnessGoal>,
) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;
    info!("Generating motivational message for {}", user.username);

    let result = coach
        .generate_motivation(database, user.id, goal, Utc::now())
        .await?;
    display_coaching_result(&result);
    Ok(())
}
