// ABOUTME: History command for health-coach
// ABOUTME: Lists stored logs and generated texts for a user, newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use clap::ValueEnum;
use health_coach::{database::Database, errors::AppResult, models::TextKind};
use uuid::Uuid;

use crate::helpers::display::{display_fitness_log, display_generated_text, display_nutrition_log};

/// Which history to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryKind {
    FitnessLogs,
    NutritionLogs,
    WorkoutPlans,
    NutritionPlans,
    MotivationalTexts,
}

impl HistoryKind {
    const fn empty_message(self) -> &'static str {
        match self {
            Self::FitnessLogs => "No fitness logs recorded yet.",
            Self::NutritionLogs => "No nutrition logs recorded yet.",
            Self::WorkoutPlans => "No workout plans generated yet.",
            Self::NutritionPlans => "No nutrition plans generated yet.",
            Self::MotivationalTexts => "No motivational messages generated yet.",
        }
    }
}

/// List entries of `kind` for a user
pub async fn list(
    database: &Database,
    username: &str,
    kind: HistoryKind,
    limit: Option<usize>,
) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;
    let limit = limit.unwrap_or(usize::MAX);

    let shown = match kind {
        HistoryKind::FitnessLogs => {
            let logs = database.list_fitness_logs(user.id).await?;
            logs.iter().take(limit).for_each(display_fitness_log);
            logs.len().min(limit)
        }
        HistoryKind::NutritionLogs => {
            let logs = database.list_nutrition_logs(user.id).await?;
            logs.iter().take(limit).for_each(display_nutrition_log);
            logs.len().min(limit)
        }
        HistoryKind::WorkoutPlans => {
            list_texts(database, user.id, TextKind::WorkoutPlan, limit).await?
        }
        HistoryKind::NutritionPlans => {
            list_texts(database, user.id, TextKind::NutritionPlan, limit).await?
        }
        HistoryKind::MotivationalTexts => {
            list_texts(database, user.id, TextKind::MotivationalText, limit).await?
        }
    };

    if shown == 0 {
        println!("{}", kind.empty_message());
    }
    Ok(())
}

async fn list_texts(
    database: &Database,
    user_id: Uuid,
    kind: TextKind,
    limit: usize,
) -> AppResult<usize> {
    let texts = database.list_generated_texts(user_id, kind).await?;
    texts.iter().take(limit).for_each(display_generated_text);
    Ok(texts.len().min(limit))
}
