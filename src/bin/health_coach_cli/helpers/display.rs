// ABOUTME: Output formatting helpers for health-coach
// ABOUTME: Renders users, logs, dashboard metrics, and generated texts to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::fmt::Display;

use health_coach::coaching::{CoachingResult, ServiceHealth};
use health_coach::intelligence::DashboardSummary;
use health_coach::models::{FitnessLog, GeneratedText, NutritionLog, User};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

fn or_unknown<T: Display>(value: Option<T>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v}{unit}"))
}

/// Display one user's details
pub fn display_user(user: &User) {
    println!("User: {}", user.username);
    println!("   ID: {}", user.id);
    println!("   Age: {}", or_unknown(user.age, ""));
    println!("   Weight: {}", or_unknown(user.weight_kg, " kg"));
    println!("   Height: {}", or_unknown(user.height_cm, " cm"));
    println!("   Goal: {}", user.fitness_goal);
    if !user.dietary_preferences.is_empty() {
        println!("   Dietary preferences: {}", user.dietary_preferences);
    }
    println!("   Created: {}", user.created_at.format(TIMESTAMP_FORMAT));
}

/// Display the user table
pub fn display_user_list(users: &[User]) {
    if users.is_empty() {
        println!("No users registered yet.");
        return;
    }
    println!("{:<24} {:<18} {}", "USERNAME", "GOAL", "CREATED");
    for user in users {
        println!(
            "{:<24} {:<18} {}",
            user.username,
            user.fitness_goal.display_name(),
            user.created_at.format(TIMESTAMP_FORMAT)
        );
    }
}

/// Display one fitness log
pub fn display_fitness_log(log: &FitnessLog) {
    println!(
        "{}  {:<16} {:>4} min  {:>7.0} kcal{}",
        log.created_at.format(TIMESTAMP_FORMAT),
        log.activity_type.display_name(),
        log.duration_minutes,
        log.calories_burned,
        log.notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!("  ({n})"))
            .unwrap_or_default()
    );
}

/// Display one nutrition log
pub fn display_nutrition_log(log: &NutritionLog) {
    println!(
        "{}  {:<9} {:<30} {:>6.0} kcal  P {:.1}g  C {:.1}g  F {:.1}g",
        log.created_at.format(TIMESTAMP_FORMAT),
        log.meal_type.display_name(),
        log.food_item,
        log.calories,
        log.protein_g,
        log.carbs_g,
        log.fats_g
    );
}

/// Display one stored coaching text with its header
pub fn display_generated_text(text: &GeneratedText) {
    println!("{}", "=".repeat(60));
    println!(
        "{} - {}{}",
        text.kind,
        text.generated_at.format(TIMESTAMP_FORMAT),
        if text.is_degraded() {
            "  [service unavailable]"
        } else {
            ""
        }
    );
    println!("{}", "=".repeat(60));
    println!("{}", text.content);
    println!();
}

/// Display a freshly generated coaching text
pub fn display_coaching_result(result: &CoachingResult) {
    display_generated_text(&result.record);
    if let Some(cause) = result.outcome.cause() {
        eprintln!(
            "Note: the text-generation service failed ({cause}); a fallback message was saved."
        );
    }
}

/// Display the seven-day dashboard
pub fn display_dashboard(username: &str, dashboard: &DashboardSummary) {
    println!(
        "Dashboard for {username}: {} to {}",
        dashboard.window_start.format(TIMESTAMP_FORMAT),
        dashboard.window_end.format(TIMESTAMP_FORMAT)
    );
    println!();

    println!("Fitness");
    if dashboard.fitness.is_empty() {
        println!("   No fitness data available for the last 7 days.");
    } else {
        println!(
            "   Total Exercise Time: {} minutes",
            dashboard.fitness.total_duration_minutes
        );
        println!(
            "   Average Session: {:.1} minutes",
            dashboard.fitness.average_session_minutes()
        );
        println!(
            "   Calories Burned: {:.0}",
            dashboard.fitness.total_calories_burned
        );
        println!("   Sessions: {}", dashboard.fitness.session_count());
        for day in &dashboard.fitness_by_day {
            println!(
                "     {}  {:>4} min  {:>7.0} kcal",
                day.date, day.duration_minutes, day.calories_burned
            );
        }
    }
    println!();

    println!("Nutrition");
    if dashboard.nutrition.is_empty() {
        println!("   No nutrition data available for the last 7 days.");
    } else {
        let nutrition = &dashboard.nutrition;
        println!("   Avg. Daily Calories: {:.0}", nutrition.avg_daily_calories());
        println!("   Avg. Protein: {:.1}g", nutrition.avg_daily_protein_g());
        println!("   Avg. Carbs: {:.1}g", nutrition.avg_daily_carbs_g());
        println!("   Avg. Fats: {:.1}g", nutrition.avg_daily_fats_g());
        for day in &dashboard.nutrition_by_day {
            println!(
                "     {}  {:>6.0} kcal  P {:.1}g  C {:.1}g  F {:.1}g",
                day.date, day.calories, day.protein_g, day.carbs_g, day.fats_g
            );
        }
    }
}

/// Display the service health report
pub fn display_service_health(health: &ServiceHealth) {
    if health.reachable {
        println!("{} is reachable (model: {})", health.service, health.model);
    } else {
        println!("{} is NOT reachable (model: {})", health.service, health.model);
        if let Some(detail) = &health.detail {
            println!("   {detail}");
        }
    }
    if health.capabilities.is_empty() {
        println!("   Capabilities: none");
    } else {
        println!("   Capabilities: {}", health.capabilities.join(", "));
    }
}
