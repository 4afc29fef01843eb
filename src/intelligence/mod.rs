// ABOUTME: Log aggregation for coaching prompts and dashboard summaries
// ABOUTME: Computes trailing-window totals, averages, and per-day series from the log store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! # Intelligence Module
//!
//! Turns raw fitness and nutrition logs into the statistics consumed by the
//! prompt builder and the dashboard. All computations take the current time
//! as an argument; nothing in this module reads the clock.

/// Trailing-window totals and averages
pub mod aggregation;
/// Dashboard view with session metrics and per-day series
pub mod dashboard;

pub use aggregation::{
    summarize_fitness, summarize_nutrition, AggregationWindow, FitnessSummary, NutritionSummary,
};
pub use dashboard::{build_dashboard, DailyFitness, DailyNutrition, DashboardSummary};
