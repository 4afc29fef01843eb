// ABOUTME: SQLite-backed store for users, logs, and generated coaching texts
// ABOUTME: Owns the connection pool and runs schema migrations on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! # Database Management
//!
//! The [`Database`] handle is passed explicitly to every operation that needs
//! the store; there is no process-wide session. Each statement acquires a
//! connection from the pool and releases it when the statement completes.
//!
//! Tables are grouped by concern, one submodule per group:
//!
//! - `users`: user accounts and profile attributes
//! - `fitness_logs`: workout log store with time-window queries
//! - `nutrition_logs`: meal log store with time-window queries
//! - `coaching_texts`: append-only plan store for generated texts

mod coaching_texts;
mod fitness_logs;
mod nutrition_logs;
mod users;

use std::fs;
use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Inclusive time range used by log queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Earliest timestamp included
    pub start: DateTime<Utc>,
    /// Latest timestamp included
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range covering `[start, end]`
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `timestamp` falls inside the range
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Database manager for users, logs, and generated texts
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// File-backed `SQLite` databases are created if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                    .with_source(e)
                })?;
            }
        }

        // Every connection to `sqlite::memory:` gets its own database, so the
        // in-memory pool is pinned to one connection that never expires.
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(database_url, "Connected to database");

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails.
    pub async fn migrate(&self) -> AppResult<()> {
        let started = Instant::now();

        self.migrate_users().await?;
        self.migrate_fitness_logs().await?;
        self.migrate_nutrition_logs().await?;
        self.migrate_coaching_texts().await?;

        AppLogger::log_database_operation("migrate", "*", true, elapsed_ms(started));
        info!("Database schema is up to date");
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Milliseconds elapsed since `started`, saturating
pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
