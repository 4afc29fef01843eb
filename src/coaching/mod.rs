// ABOUTME: Coaching pipeline turning aggregated logs into persisted coaching texts
// ABOUTME: Personas, prompt builder, text-generation client, and the orchestrating service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! # Coaching
//!
//! Control flow for every generation request:
//!
//! 1. aggregate the user's trailing seven-day window ([`crate::intelligence`])
//! 2. render a persona prompt ([`prompts::build_prompt`])
//! 3. call the model ([`CoachingClient::generate`]), which degrades to a
//!    fallback text instead of failing
//! 4. append the text to the plan store
//!
//! Each step is awaited before the next; nothing runs in the background.

/// Text-generation client and tagged outcome
pub mod client;
/// Persona descriptors and fallback texts
pub mod persona;
/// Prompt builder
pub mod prompts;
/// Orchestrating service
pub mod service;

pub use client::{CoachingClient, CoachingOutcome, ServiceHealth};
pub use persona::{FailureContext, Persona, PersonaDescriptor};
pub use prompts::{build_prompt, CoachingPrompt, PromptInput};
pub use service::{CoachingResult, HealthCoach};
