// ABOUTME: Configuration management module for the health coach
// ABOUTME: Loads database and text-generation settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! Configuration module
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file). Command-line flags override individual values after loading.

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LlmConfig};
