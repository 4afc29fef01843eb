// ABOUTME: Nutrition log store with per-user time-window queries
// ABOUTME: Inserts immutable meal logs and reads them for aggregation and history

use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::{elapsed_ms, Database, TimeRange};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{MealType, NewNutritionLog, NutritionLog};

impl Database {
    /// Create the nutrition logs table
    pub(super) async fn migrate_nutrition_logs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                food_item TEXT NOT NULL,
                calories REAL NOT NULL DEFAULT 0,
                protein_g REAL NOT NULL DEFAULT 0,
                carbs_g REAL NOT NULL DEFAULT 0,
                fats_g REAL NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_logs_user_created ON nutrition_logs(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a nutrition log stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_nutrition_log(&self, log: &NewNutritionLog) -> AppResult<NutritionLog> {
        self.create_nutrition_log_at(log, Utc::now()).await
    }

    /// Record a nutrition log with an explicit creation timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_nutrition_log_at(
        &self,
        log: &NewNutritionLog,
        created_at: DateTime<Utc>,
    ) -> AppResult<NutritionLog> {
        let started = Instant::now();
        let stored = NutritionLog {
            id: Uuid::new_v4(),
            user_id: log.user_id,
            meal_type: log.meal_type,
            food_item: log.food_item.clone(),
            calories: log.calories,
            protein_g: log.protein_g,
            carbs_g: log.carbs_g,
            fats_g: log.fats_g,
            created_at,
        };

        sqlx::query(
            r"
            INSERT INTO nutrition_logs (
                id, user_id, meal_type, food_item,
                calories, protein_g, carbs_g, fats_g, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(stored.id.to_string())
        .bind(stored.user_id.to_string())
        .bind(stored.meal_type.as_str())
        .bind(&stored.food_item)
        .bind(stored.calories)
        .bind(stored.protein_g)
        .bind(stored.carbs_g)
        .bind(stored.fats_g)
        .bind(stored.created_at)
        .execute(&self.pool)
        .await?;

        AppLogger::log_database_operation("insert", "nutrition_logs", true, elapsed_ms(started));
        Ok(stored)
    }

    /// Nutrition logs of a user created within `range`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_nutrition_logs_in_range(
        &self,
        user_id: Uuid,
        range: TimeRange,
    ) -> AppResult<Vec<NutritionLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, meal_type, food_item,
                   calories, protein_g, carbs_g, fats_g, created_at
            FROM nutrition_logs
            WHERE user_id = $1 AND created_at >= $2 AND created_at <= $3
            ORDER BY created_at ASC, rowid ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            user.id = %user_id,
            count = rows.len(),
            "Loaded nutrition logs for window"
        );
        rows.iter().map(Self::row_to_nutrition_log).collect()
    }

    /// All nutrition logs of a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_nutrition_logs(&self, user_id: Uuid) -> AppResult<Vec<NutritionLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, meal_type, food_item,
                   calories, protein_g, carbs_g, fats_g, created_at
            FROM nutrition_logs
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_nutrition_log).collect()
    }

    fn row_to_nutrition_log(row: &SqliteRow) -> AppResult<NutritionLog> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let meal_type: String = row.try_get("meal_type")?;

        Ok(NutritionLog {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            meal_type: meal_type.parse::<MealType>()?,
            food_item: row.try_get("food_item")?,
            calories: row.try_get("calories")?,
            protein_g: row.try_get("protein_g")?,
            carbs_g: row.try_get("carbs_g")?,
            fats_g: row.try_get("fats_g")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
