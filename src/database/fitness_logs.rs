// ABOUTME: Fitness log store with per-user time-window queries
// ABOUTME: Inserts immutable workout logs and reads them for aggregation and history

use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::{elapsed_ms, Database, TimeRange};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{ActivityType, FitnessLog, NewFitnessLog};

impl Database {
    /// Create the fitness logs table
    pub(super) async fn migrate_fitness_logs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS fitness_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                activity_type TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                calories_burned REAL NOT NULL,
                notes TEXT,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_fitness_logs_user_created ON fitness_logs(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a fitness log stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_fitness_log(&self, log: &NewFitnessLog) -> AppResult<FitnessLog> {
        self.create_fitness_log_at(log, Utc::now()).await
    }

    /// Record a fitness log with an explicit creation timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_fitness_log_at(
        &self,
        log: &NewFitnessLog,
        created_at: DateTime<Utc>,
    ) -> AppResult<FitnessLog> {
        let started = Instant::now();
        let stored = FitnessLog {
            id: Uuid::new_v4(),
            user_id: log.user_id,
            activity_type: log.activity_type,
            duration_minutes: log.duration_minutes,
            calories_burned: log.calories_burned,
            notes: log.notes.clone(),
            created_at,
        };

        sqlx::query(
            r"
            INSERT INTO fitness_logs (
                id, user_id, activity_type, duration_minutes,
                calories_burned, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(stored.id.to_string())
        .bind(stored.user_id.to_string())
        .bind(stored.activity_type.as_str())
        .bind(i64::from(stored.duration_minutes))
        .bind(stored.calories_burned)
        .bind(&stored.notes)
        .bind(stored.created_at)
        .execute(&self.pool)
        .await?;

        AppLogger::log_database_operation("insert", "fitness_logs", true, elapsed_ms(started));
        Ok(stored)
    }

    /// Fitness logs of a user created within `range`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_fitness_logs_in_range(
        &self,
        user_id: Uuid,
        range: TimeRange,
    ) -> AppResult<Vec<FitnessLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, activity_type, duration_minutes,
                   calories_burned, notes, created_at
            FROM fitness_logs
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
            "Loaded fitness logs for window"
        );
        rows.iter().map(Self::row_to_fitness_log).collect()
    }

    /// All fitness logs of a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_fitness_logs(&self, user_id: Uuid) -> AppResult<Vec<FitnessLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, activity_type, duration_minutes,
                   calories_burned, notes, created_at
            FROM fitness_logs
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_fitness_log).collect()
    }

    fn row_to_fitness_log(row: &SqliteRow) -> AppResult<FitnessLog> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let activity_type: String = row.try_get("activity_type")?;
        let duration_minutes: i64 = row.try_get("duration_minutes")?;

        Ok(FitnessLog {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            activity_type: activity_type.parse::<ActivityType>()?,
            duration_minutes: u32::try_from(duration_minutes).map_err(|_| {
                AppError::database(format!("Invalid stored duration: {duration_minutes}"))
            })?,
            calories_burned: row.try_get("calories_burned")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
