// ABOUTME: Core types and constants for the health coach application
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

#![deny(unsafe_code)]

//! # Health Coach Core
//!
//! Foundation crate providing shared types and constants for the health coach.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Users, fitness and nutrition logs, generated coaching texts

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (User, `FitnessLog`, `NutritionLog`, `GeneratedText`)
pub mod models;
