// ABOUTME: Re-exports helper modules for health-coach
// ABOUTME: Provides argument parsers and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

pub mod display;
pub mod parsers;
