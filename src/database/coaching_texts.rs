// ABOUTME: Append-only plan store for generated coaching texts
// ABOUTME: Persists workout plans, nutrition plans, and motivational messages per user

use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{elapsed_ms, Database};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{GeneratedText, GenerationStatus, TextKind};

impl Database {
    /// Create the coaching texts table
    ///
    /// Rows are never updated or deleted; every generation adds a row.
    pub(super) async fn migrate_coaching_texts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS coaching_texts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                kind TEXT NOT NULL CHECK (kind IN ('workout_plan', 'nutrition_plan', 'motivational_text')),
                content TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'success' CHECK (status IN ('success', 'unavailable')),
                failure_cause TEXT,
                generated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_coaching_texts_user_kind ON coaching_texts(user_id, kind, generated_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append a generated text to the plan store
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_generated_text(
        &self,
        user_id: Uuid,
        kind: TextKind,
        content: &str,
        status: GenerationStatus,
        failure_cause: Option<&str>,
        generated_at: DateTime<Utc>,
    ) -> AppResult<GeneratedText> {
        let started = Instant::now();
        let stored = GeneratedText {
            id: Uuid::new_v4(),
            user_id,
            kind,
            content: content.to_owned(),
            status,
            failure_cause: failure_cause.map(ToOwned::to_owned),
            generated_at,
        };

        sqlx::query(
            r"
            INSERT INTO coaching_texts (
                id, user_id, kind, content, status, failure_cause, generated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(stored.id.to_string())
        .bind(stored.user_id.to_string())
        .bind(stored.kind.as_str())
        .bind(&stored.content)
        .bind(stored.status.as_str())
        .bind(&stored.failure_cause)
        .bind(stored.generated_at)
        .execute(&self.pool)
        .await?;

        AppLogger::log_database_operation("insert", "coaching_texts", true, elapsed_ms(started));
        Ok(stored)
    }

    /// Generated texts of one kind for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_generated_texts(
        &self,
        user_id: Uuid,
        kind: TextKind,
    ) -> AppResult<Vec<GeneratedText>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, kind, content, status, failure_cause, generated_at
            FROM coaching_texts
            WHERE user_id = $1 AND kind = $2
            ORDER BY generated_at DESC, rowid DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_generated_text).collect()
    }

    fn row_to_generated_text(row: &SqliteRow) -> AppResult<GeneratedText> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let kind: String = row.try_get("kind")?;
        let status: String = row.try_get("status")?;

        Ok(GeneratedText {
            id: Uuid::parse_str(&id)?,
            user_id: Uuid::parse_str(&user_id)?,
            kind: kind.parse::<TextKind>()?,
            content: row.try_get("content")?,
            status: status.parse::<GenerationStatus>()?,
            failure_cause: row.try_get("failure_cause")?,
            generated_at: row.try_get("generated_at")?,
        })
    }
}
