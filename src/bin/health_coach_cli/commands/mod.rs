// ABOUTME: Re-exports command modules for health-coach
// ABOUTME: Users, logging, dashboard, plan generation, history, and service health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

pub mod dashboard;
pub mod history;
pub mod llm_health;
pub mod log;
pub mod plan;
pub mod user;
