// ABOUTME: End-to-end tests for the coaching pipeline against an in-memory store
// ABOUTME: Covers new users, degraded generations, history ordering, and goal resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use health_coach::intelligence::build_dashboard;
use health_coach::models::{ActivityType, FitnessGoal, GenerationStatus, MealType, TextKind};
use uuid::Uuid;

use common::{
    coach_with, create_test_database, create_test_user, log_activity_at, log_meal_at,
    reference_now, MockLlmProvider,
};

#[tokio::test]
async fn test_new_user_gets_texts_and_zero_dashboard() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "fresh").await?;
    let now = reference_now();
    let (coach, _) = coach_with(MockLlmProvider::failing("connection refused"));

    let workout = coach.generate_workout_plan(&db, user.id, now).await?;
    let nutrition = coach.generate_nutrition_plan(&db, user.id, now).await?;
    let motivation = coach.generate_motivation(&db, user.id, None, now).await?;

    for result in [&workout, &nutrition, &motivation] {
        assert!(!result.outcome.text().is_empty());
        assert!(result.record.is_degraded());
    }

    let dashboard = build_dashboard(&db, user.id, now).await?;
    assert!(dashboard.is_empty());
    assert_eq!(dashboard.fitness.total_duration_minutes, 0);
    assert!(dashboard.nutrition.avg_daily_calories().abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_workout_prompt_reflects_window() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "athlete").await?;
    let now = reference_now();
    log_activity_at(&db, user.id, ActivityType::Running, 30, 300.0, now - Duration::days(2)).await?;
    log_activity_at(&db, user.id, ActivityType::Cycling, 45, 400.0, now - Duration::days(1)).await?;
    log_activity_at(
        &db,
        user.id,
        ActivityType::Swimming,
        60,
        500.0,
        now - Duration::days(10),
    )
    .await?;
    let (coach, provider) = coach_with(MockLlmProvider::replying("Add one interval session."));

    let result = coach.generate_workout_plan(&db, user.id, now).await?;

    assert!(result.outcome.is_success());
    assert_eq!(result.record.content, "Add one interval session.");
    assert_eq!(result.record.status, GenerationStatus::Success);
    assert!(result.record.failure_cause.is_none());

    let requests = provider.requests();
    let user_message = &requests[0].messages[1].content;
    assert!(user_message.contains("- Total exercise duration last 7 days: 75 minutes"));
    assert!(user_message.contains("- Total calories burned: 700"));
    assert!(user_message.contains("- Activities: Running, Cycling"));
    Ok(())
}

#[tokio::test]
async fn test_nutrition_prompt_includes_profile_context() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "planner").await?;
    let now = reference_now();
    log_meal_at(
        &db,
        user.id,
        MealType::Dinner,
        3500.0,
        (200.0, 300.0, 100.0),
        now - Duration::days(1),
    )
    .await?;
    let (coach, provider) = coach_with(MockLlmProvider::replying("Eat more greens."));

    coach.generate_nutrition_plan(&db, user.id, now).await?;

    let requests = provider.requests();
    let user_message = &requests[0].messages[1].content;
    assert!(user_message.contains("(Age: 30, Weight: 70kg, Height: 175cm, Goal: Weight Loss)"));
    assert!(user_message.contains("- Average daily calories: 500.00"));
    assert!(user_message.contains("- Average daily protein: 28.57g"));
    Ok(())
}

#[tokio::test]
async fn test_missing_user_still_generates() -> Result<()> {
    let db = create_test_database().await?;
    let ghost = Uuid::new_v4();
    let now = reference_now();
    let (coach, provider) = coach_with(MockLlmProvider::replying("Keep going!"));

    let nutrition = coach.generate_nutrition_plan(&db, ghost, now).await?;
    let motivation = coach.generate_motivation(&db, ghost, None, now).await?;

    assert!(nutrition.outcome.is_success());
    assert!(motivation.outcome.is_success());

    let requests = provider.requests();
    assert!(requests[0].messages[1]
        .content
        .starts_with(&format!("Analyze this nutrition data for user {ghost}:\n")));
    let motivation = &requests[1].messages[1].content;
    assert!(motivation.starts_with("Generate a short, motivational message for a user"));
    assert!(motivation.contains("with this fitness goal: General Fitness."));
    Ok(())
}

#[tokio::test]
async fn test_motivation_goal_resolution() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "focused").await?;
    let now = reference_now();
    let (coach, provider) = coach_with(MockLlmProvider::failing("offline"));

    let own_goal = coach.generate_motivation(&db, user.id, None, now).await?;
    let explicit = coach
        .generate_motivation(&db, user.id, Some(FitnessGoal::Endurance), now)
        .await?;

    assert!(own_goal
        .outcome
        .text()
        .starts_with("Stay motivated and keep working towards your goal: Weight Loss!"));
    assert!(explicit
        .outcome
        .text()
        .starts_with("Stay motivated and keep working towards your goal: Endurance!"));
    assert!(provider.requests()[1].messages[1]
        .content
        .contains("this fitness goal: Endurance."));
    Ok(())
}

#[tokio::test]
async fn test_history_is_append_only_newest_first() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "historian").await?;
    let now = reference_now();
    let (coach, _) = coach_with(MockLlmProvider::new(vec![
        Ok("First plan".to_owned()),
        Err("service stopped".to_owned()),
        Ok("Third plan".to_owned()),
    ]));

    coach
        .generate_workout_plan(&db, user.id, now - Duration::days(2))
        .await?;
    coach
        .generate_workout_plan(&db, user.id, now - Duration::days(1))
        .await?;
    coach.generate_workout_plan(&db, user.id, now).await?;
    coach.generate_motivation(&db, user.id, None, now).await?;

    let plans = db.list_generated_texts(user.id, TextKind::WorkoutPlan).await?;

    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0].content, "Third plan");
    assert_eq!(plans[0].generated_at, now);
    assert!(plans[1].is_degraded());
    assert!(plans[1]
        .failure_cause
        .as_deref()
        .unwrap()
        .contains("service stopped"));
    assert!(plans[1]
        .content
        .starts_with("Error generating fitness analysis: "));
    assert_eq!(plans[2].content, "First plan");
    assert_eq!(plans[2].status, GenerationStatus::Success);

    let motivations = db
        .list_generated_texts(user.id, TextKind::MotivationalText)
        .await?;
    assert_eq!(motivations.len(), 1);
    assert_eq!(motivations[0].content, "Third plan");
    Ok(())
}

#[tokio::test]
async fn test_stored_record_matches_returned_record() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "consistent").await?;
    let (coach, _) = coach_with(MockLlmProvider::failing("unreachable"));

    let result = coach
        .generate_nutrition_plan(&db, user.id, reference_now())
        .await?;
    let stored = db
        .list_generated_texts(user.id, TextKind::NutritionPlan)
        .await?;

    assert_eq!(stored, vec![result.record.clone()]);
    assert_eq!(result.record.content, result.outcome.text());
    assert_eq!(result.record.failure_cause.as_deref(), result.outcome.cause());
    Ok(())
}
