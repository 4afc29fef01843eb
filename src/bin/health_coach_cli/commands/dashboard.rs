// ABOUTME: Dashboard command for health-coach
// ABOUTME: Prints the seven-day fitness and nutrition summary as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use chrono::Utc;
use health_coach::{
    database::Database,
    errors::{AppError, AppResult},
    intelligence::build_dashboard,
};

use crate::helpers::display::display_dashboard;

/// Show the dashboard for the window ending now
pub async fn show(database: &Database, username: &str, json: bool) -> AppResult<()> {
    let user = database.get_user_by_username_required(username).await?;
    let dashboard = build_dashboard(database, user.id, Utc::now()).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&dashboard).map_err(|e| {
            AppError::internal(format!("Failed to serialize dashboard: {e}")).with_source(e)
        })?;
        println!("{rendered}");
    } else {
        display_dashboard(&user.username, &dashboard);
    }
    Ok(())
}
