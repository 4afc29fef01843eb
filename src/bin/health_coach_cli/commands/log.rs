// ABOUTME: Log commands for health-coach
// ABOUTME: Records fitness activities and meals for a registered user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use health_coach::{
    database::Database,
    errors::AppResult,
    models::{ActivityType, MealType, NewFitnessLog, NewNutritionLog},
};
use tracing::info;

use crate::helpers::display::{display_fitness_log, display_nutrition_log};

/// Record a fitness activity
pub async fn activity(
    database: &Database,
    username: &str,
    activity: ActivityType,
    duration_minutes: u32,
    calories_burned: f64,
    notes: Option<String>,
) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;

    let mut log = NewFitnessLog::new(user.id, activity, duration_minutes, calories_burned);
    if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
        log = log.with_notes(notes.trim());
    }
    log.validate()?;

    let stored = database.create_fitness_log(&log).await?;
    info!(user.id = %user.id, log.id = %stored.id, "Activity logged");

    println!("Activity logged successfully!");
    display_fitness_log(&stored);
    Ok(())
}

/// Record a meal with its macronutrients in grams
pub async fn meal(
    database: &Database,
    username: &str,
    meal: MealType,
    food_item: String,
    calories: f64,
    (protein_g, carbs_g, fats_g): (f64, f64, f64),
) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;

    let log = NewNutritionLog::new(user.id, meal, food_item.trim(), calories)
        .with_macros(protein_g, carbs_g, fats_g);
    log.validate()?;

    let stored = database.create_nutrition_log(&log).await?;
    info!(user.id = %user.id, log.id = %stored.id, "Meal logged");

    println!("Meal logged successfully!");
    display_nutrition_log(&stored);
    Ok(())
}
