// ABOUTME: Integration tests for seven-day log aggregation and the dashboard
// ABOUTME: Covers window boundaries, empty windows, and the fixed nutrition divisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use health_coach::intelligence::{
    build_dashboard, summarize_fitness, summarize_nutrition, AggregationWindow,
};
use health_coach::models::{ActivityType, MealType};

use common::{create_test_database, create_test_user, log_activity_at, log_meal_at, reference_now};

#[tokio::test]
async fn test_fitness_totals_for_two_sessions() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "runner").await?;
    let now = reference_now();

    log_activity_at(&db, user.id, ActivityType::Running, 30, 300.0, now - Duration::days(3)).await?;
    log_activity_at(&db, user.id, ActivityType::Cycling, 45, 400.0, now - Duration::days(1)).await?;

    let summary = summarize_fitness(&db, user.id, now).await?;

    assert_eq!(summary.total_duration_minutes, 75);
    assert!((summary.total_calories_burned - 700.0).abs() < f64::EPSILON);
    assert_eq!(summary.activity_labels(), vec!["Running", "Cycling"]);
    assert_eq!(summary.session_count(), 2);
    assert!((summary.average_session_minutes() - 37.5).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_activities_keep_log_order_and_duplicates() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "mixer").await?;
    let now = reference_now();

    log_activity_at(&db, user.id, ActivityType::Yoga, 20, 80.0, now - Duration::days(5)).await?;
    log_activity_at(&db, user.id, ActivityType::Running, 25, 250.0, now - Duration::days(4)).await?;
    log_activity_at(&db, user.id, ActivityType::Yoga, 30, 120.0, now - Duration::days(2)).await?;

    let summary = summarize_fitness(&db, user.id, now).await?;

    assert_eq!(
        summary.activities,
        vec![ActivityType::Yoga, ActivityType::Running, ActivityType::Yoga]
    );
    Ok(())
}

#[tokio::test]
async fn test_nutrition_averages_divide_by_seven() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "eater").await?;
    let now = reference_now();

    log_meal_at(
        &db,
        user.id,
        MealType::Breakfast,
        1000.0,
        (60.0, 100.0, 30.0),
        now - Duration::days(6),
    )
    .await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Lunch,
        1200.0,
        (70.0, 100.0, 35.0),
        now - Duration::days(3),
    )
    .await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Dinner,
        1300.0,
        (70.0, 100.0, 35.0),
        now - Duration::hours(2),
    )
    .await?;

    let summary = summarize_nutrition(&db, user.id, now).await?;

    assert_eq!(summary.entry_count, 3);
    assert_eq!(format!("{:.2}", summary.avg_daily_calories()), "500.00");
    assert_eq!(format!("{:.2}", summary.avg_daily_protein_g()), "28.57");
    assert_eq!(format!("{:.2}", summary.avg_daily_carbs_g()), "42.86");
    assert_eq!(format!("{:.2}", summary.avg_daily_fats_g()), "14.29");
    Ok(())
}

// Averages use the full window length, not the number of days that have
// entries. Two days of meals are still spread over seven.
#[tokio::test]
async fn test_nutrition_average_ignores_days_without_entries() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "sparse").await?;
    let now = reference_now();

    log_meal_at(
        &db,
        user.id,
        MealType::Lunch,
        700.0,
        (35.0, 0.0, 0.0),
        now - Duration::days(2),
    )
    .await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Dinner,
        700.0,
        (35.0, 0.0, 0.0),
        now - Duration::days(1),
    )
    .await?;

    let summary = summarize_nutrition(&db, user.id, now).await?;

    assert!((summary.avg_daily_calories() - 200.0).abs() < 1e-9);
    assert!((summary.avg_daily_protein_g() - 10.0).abs() < 1e-9);
    assert!((summary.avg_daily_calories() - 700.0).abs() > 1.0);
    Ok(())
}

#[tokio::test]
async fn test_empty_window_yields_zeroes() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "newcomer").await?;
    let now = reference_now();

    let fitness = summarize_fitness(&db, user.id, now).await?;
    let nutrition = summarize_nutrition(&db, user.id, now).await?;

    assert!(fitness.is_empty());
    assert_eq!(fitness.total_duration_minutes, 0);
    assert!(fitness.total_calories_burned.abs() < f64::EPSILON);
    assert!(fitness.average_session_minutes().abs() < f64::EPSILON);
    assert!(nutrition.is_empty());
    assert!(nutrition.avg_daily_calories().abs() < f64::EPSILON);
    assert!(nutrition.avg_daily_protein_g().abs() < f64::EPSILON);
    assert!(nutrition.avg_daily_carbs_g().is_finite());
    Ok(())
}

#[tokio::test]
async fn test_window_bounds_are_inclusive() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "edges").await?;
    let now = reference_now();
    let window = AggregationWindow::trailing(now);

    log_activity_at(&db, user.id, ActivityType::Walking, 10, 40.0, window.start()).await?;
    log_activity_at(&db, user.id, ActivityType::Swimming, 20, 200.0, window.end()).await?;
    log_activity_at(
        &db,
        user.id,
        ActivityType::Hiit,
        15,
        180.0,
        window.start() - Duration::seconds(1),
    )
    .await?;
    log_activity_at(
        &db,
        user.id,
        ActivityType::Pilates,
        15,
        90.0,
        window.end() + Duration::seconds(1),
    )
    .await?;

    let summary = summarize_fitness(&db, user.id, now).await?;

    assert_eq!(
        summary.activities,
        vec![ActivityType::Walking, ActivityType::Swimming]
    );
    assert_eq!(summary.total_duration_minutes, 30);
    Ok(())
}

#[tokio::test]
async fn test_other_users_logs_are_excluded() -> Result<()> {
    let db = create_test_database().await?;
    let alice = create_test_user(&db, "alice").await?;
    let bob = create_test_user(&db, "bob").await?;
    let now = reference_now();

    log_activity_at(
        &db,
        alice.id,
        ActivityType::Running,
        30,
        300.0,
        now - Duration::days(1),
    )
    .await?;
    log_activity_at(&db, bob.id, ActivityType::Cycling, 60, 500.0, now - Duration::days(1)).await?;

    let summary = summarize_fitness(&db, alice.id, now).await?;

    assert_eq!(summary.activities, vec![ActivityType::Running]);
    assert_eq!(summary.total_duration_minutes, 30);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_groups_by_day() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "daily").await?;
    let now = reference_now();

    log_activity_at(
        &db,
        user.id,
        ActivityType::Running,
        30,
        300.0,
        now - Duration::hours(30),
    )
    .await?;
    log_activity_at(
        &db,
        user.id,
        ActivityType::Cycling,
        45,
        400.0,
        now - Duration::hours(28),
    )
    .await?;
    log_activity_at(&db, user.id, ActivityType::Yoga, 20, 60.0, now - Duration::hours(1)).await?;
    log_meal_at(
        &db,
        user.id,
        MealType::Lunch,
        650.0,
        (40.0, 70.0, 20.0),
        now - Duration::hours(1),
    )
    .await?;

    let dashboard = build_dashboard(&db, user.id, now).await?;

    assert!(!dashboard.is_empty());
    assert_eq!(dashboard.window_end, now);
    assert_eq!(dashboard.window_start, now - Duration::days(7));
    assert_eq!(dashboard.fitness.total_duration_minutes, 95);
    assert_eq!(dashboard.fitness_by_day.len(), 2);
    assert!(dashboard.fitness_by_day[0].date < dashboard.fitness_by_day[1].date);
    assert_eq!(dashboard.fitness_by_day[0].duration_minutes, 75);
    assert_eq!(dashboard.fitness_by_day[1].duration_minutes, 20);
    assert_eq!(dashboard.nutrition_by_day.len(), 1);
    assert!((dashboard.nutrition_by_day[0].calories - 650.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_for_new_user_is_all_zero() -> Result<()> {
    let db = create_test_database().await?;
    let user = create_test_user(&db, "blank").await?;

    let dashboard = build_dashboard(&db, user.id, reference_now()).await?;

    assert!(dashboard.is_empty());
    assert_eq!(dashboard.fitness.total_duration_minutes, 0);
    assert!(dashboard.nutrition.total_calories.abs() < f64::EPSILON);
    assert!(dashboard.fitness_by_day.is_empty());
    assert!(dashboard.nutrition_by_day.is_empty());
    Ok(())
}
