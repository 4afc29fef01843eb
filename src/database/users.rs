// ABOUTME: User management database operations
// ABOUTME: Handles user registration, lookup by id or username, and listing

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{FitnessGoal, User};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                age INTEGER,
                weight_kg REAL,
                height_cm REAL,
                fitness_goal TEXT NOT NULL,
                dietary_preferences TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the username is taken, or a
    /// database error if the insert fails.
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        if self.get_user_by_username(&user.username).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "User '{}'",
                user.username
            )));
        }

        sqlx::query(
            r"
            INSERT INTO users (
                id, username, age, weight_kg, height_cm,
                fitness_goal, dietary_preferences, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(user.age.map(i64::from))
        .bind(user.weight_kg)
        .bind(user.height_cm)
        .bind(user.fitness_goal.as_str())
        .bind(&user.dietary_preferences)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        info!(user.id = %user.id, user.username = %user.username, "User created");
        Ok(user.id)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, age, weight_kg, height_cm,
                   fitness_goal, dietary_preferences, created_at
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Get a user by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, age, weight_kg, height_cm,
                   fitness_goal, dietary_preferences, created_at
            FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Get a user by username, returning an error if not found
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no user has this username.
    pub async fn get_user_by_username_required(&self, username: &str) -> AppResult<User> {
        self.get_user_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}'")))
    }

    /// List all users ordered by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query(
            r"
            SELECT id, username, age, weight_kg, height_cm,
                   fitness_goal, dietary_preferences, created_at
            FROM users ORDER BY username ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Convert a database row to a User struct
    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        let id: String = row.try_get("id")?;
        let age: Option<i64> = row.try_get("age")?;
        let fitness_goal: String = row.try_get("fitness_goal")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(User {
            id: Uuid::parse_str(&id)?,
            username: row.try_get("username")?,
            age: age.and_then(|a| u32::try_from(a).ok()),
            weight_kg: row.try_get("weight_kg")?,
            height_cm: row.try_get("height_cm")?,
            fitness_goal: fitness_goal.parse::<FitnessGoal>()?,
            dietary_preferences: row.try_get("dietary_preferences")?,
            created_at,
        })
    }
}
