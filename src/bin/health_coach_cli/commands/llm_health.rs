// ABOUTME: Service health command for health-coach
// ABOUTME: Probes the text-generation service and reports whether it is reachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use health_coach::{
    coaching::HealthCoach,
    errors::{AppError, AppResult},
};
use tracing::warn;

use crate::helpers::display::display_service_health;

/// Probe the service; fails when it cannot be reached
pub async fn run(coach: &HealthCoach) -> AppResult<()> {
    let health = coach.service_health().await;
    display_service_health(&health);

    if health.reachable {
        return Ok(());
    }
    warn!(service = %health.service, "Text-generation service is not reachable");
    Err(AppError::external_unavailable(
        health.service,
        health
            .detail
            .unwrap_or_else(|| "health check failed".to_owned()),
    ))
}
