// ABOUTME: Integration tests for the SQLite store
// ABOUTME: Validates user registration, log persistence, ordering, and file-backed databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use health_coach::database::{Database, TimeRange};
use health_coach::errors::ErrorCode;
use health_coach::models::{
    ActivityType, FitnessGoal, GenerationStatus, MealType, NewFitnessLog, NewNutritionLog,
    TextKind, User,
};
use tempfile::TempDir;
use uuid::Uuid;

use common::{create_test_database, create_test_user, log_activity_at, log_meal_at, reference_now};

#[tokio::test]
async fn test_user_round_trip() -> Result<()> {
    let db = create_test_database().await?;
    let user = User::new("alice", FitnessGoal::MuscleGain)
        .with_age(41)
        .with_weight_kg(64.5)
        .with_dietary_preferences("vegetarian");

    let id = db.create_user(&user).await?;
    let loaded = db.get_user(id).await?.expect("user should exist");

    assert_eq!(loaded.username, "alice");
    assert_eq!(loaded.age, Some(41));
    assert_eq!(loaded.weight_kg, Some(64.5));
    assert_eq!(loaded.height_cm, None);
    assert_eq!(loaded.fitness_goal, FitnessGoal::MuscleGain);
    assert_eq!(loaded.dietary_preferences, "vegetarian");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_username_rejected() -> Result<()> {
    let db = create_test_database().await?;
    create_test_user(&db, "taken").await?;

    let err = db
        .create_user(&User::new("taken", FitnessGoal::Maintenance))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(db.list_users().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_lookup_by_username() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "bob").await?;

    let found = db.get_user_by_username_required("bob").await?;
    assert_eq!(found.id, user.id);

    let err = db.get_user_by_username_required("nobody").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(db.get_user(Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_users_listed_by_username() -> Result<()> {
    let db = create_test_database().await?;
    create_test_user(&db, "zoe").await?;
    create_test_user(&db, "adam").await?;
    create_test_user(&db, "mia").await?;

    let names: Vec<String> = db
        .list_users()
        .await?
        .into_iter()
        .map(|u| u.username)
        .collect();

    assert_eq!(names, vec!["adam", "mia", "zoe"]);
    Ok(())
}

#[tokio::test]
async fn test_fitness_log_insert_assigns_id_and_timestamp() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "logger").await?;
    let log = NewFitnessLog::new(user.id, ActivityType::WeightTraining, 50, 320.0)
        .with_notes("leg day");

    let stored = db.create_fitness_log(&log).await?;
    let listed = db.list_fitness_logs(user.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
    assert_eq!(listed[0].activity_type, ActivityType::WeightTraining);
    assert_eq!(listed[0].notes.as_deref(), Some("leg day"));
    assert_eq!(listed[0].created_at, stored.created_at);
    Ok(())
}

#[tokio::test]
async fn test_nutrition_log_insert_keeps_macros() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "cook").await?;
    let log = NewNutritionLog::new(user.id, MealType::Snack, "Greek yogurt", 150.0)
        .with_macros(15.0, 8.0, 4.0);

    let stored = db.create_nutrition_log(&log).await?;
    let listed = db.list_nutrition_logs(user.id).await?;

    assert_eq!(listed, vec![stored]);
    assert_eq!(listed[0].meal_type, MealType::Snack);
    assert!((listed[0].protein_g - 15.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_logs_listed_newest_first_and_ranged_oldest_first() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "ordered").await?;
    let now = reference_now();

    log_meal_at(
        &db,
        user.id,
        MealType::Breakfast,
        300.0,
        (10.0, 40.0, 8.0),
        now - Duration::days(2),
    )
    .await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Dinner,
        700.0,
        (40.0, 60.0, 25.0),
        now - Duration::hours(3),
    )
    .await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Lunch,
        500.0,
        (30.0, 50.0, 15.0),
        now - Duration::days(1),
    )
    .await?;

    let listed = db.list_nutrition_logs(user.id).await?;
    let meals: Vec<MealType> = listed.iter().map(|l| l.meal_type).collect();
    assert_eq!(meals, vec![MealType::Dinner, MealType::Lunch, MealType::Breakfast]);

    let ranged = db
        .get_nutrition_logs_in_range(user.id, TimeRange::new(now - Duration::days(7), now))
        .await?;
    let meals: Vec<MealType> = ranged.iter().map(|l| l.meal_type).collect();
    assert_eq!(meals, vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]);
    Ok(())
}

#[tokio::test]
async fn test_range_excludes_outside_entries() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "ranged").await?;
    let now = reference_now();
    let range = TimeRange::new(now - Duration::days(1), now);

    log_activity_at(&db, user.id, ActivityType::Walking, 20, 90.0, now - Duration::days(2)).await?;
    let inside = log_activity_at(
        &db,
        user.id,
        ActivityType::Running,
        30,
        300.0,
        now - Duration::hours(5),
    )
    .await?;

    let logs = db.get_fitness_logs_in_range(user.id, range).await?;

    assert_eq!(logs, vec![inside.clone()]);
    assert!(range.contains(inside.created_at));
    assert!(!range.contains(now + Duration::seconds(1)));
    Ok(())
}

#[tokio::test]
async fn test_generated_texts_filtered_by_kind() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "texts").await?;
    let now = reference_now();

    db.create_generated_text(
        user.id,
        TextKind::WorkoutPlan,
        "Plan A",
        GenerationStatus::Success,
        None,
        now - Duration::hours(1),
    )
    .await?;
    db.create_generated_text(
        user.id,
        TextKind::NutritionPlan,
        "Eat well",
        GenerationStatus::Unavailable,
        Some("LocalLLM: down"),
        now,
    )
    .await?;

    let workout = db.list_generated_texts(user.id, TextKind::WorkoutPlan).await?;
    let nutrition = db
        .list_generated_texts(user.id, TextKind::NutritionPlan)
        .await?;

    assert_eq!(workout.len(), 1);
    assert_eq!(workout[0].content, "Plan A");
    assert!(!workout[0].is_degraded());
    assert_eq!(nutrition.len(), 1);
    assert_eq!(nutrition[0].failure_cause.as_deref(), Some("LocalLLM: down"));
    assert!(db
        .list_generated_texts(user.id, TextKind::MotivationalText)
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_file_database_persists_across_connections() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("coach.db");
    let url = format!("sqlite:{}", path.display());

    let db = Database::new(&url).await?;
    let user = create_test_user(&db, "durable").await?;
    db.close().await;

    assert!(path.exists());

    let reopened = Database::new(&url).await?;
    let loaded = reopened.get_user_by_username_required("durable").await?;
    assert_eq!(loaded.id, user.id);
    reopened.close().await;
    Ok(())
}
