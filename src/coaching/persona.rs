// ABOUTME: Coaching personas and their descriptor table
// ABOUTME: Role framing, closing instruction, length hint, and fallback phrasing per persona
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::models::{FitnessGoal, TextKind};

/// Which coach is speaking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Weekly workout planning
    Fitness,
    /// Balanced nutrition planning
    Nutrition,
    /// Short motivational messages
    Motivation,
}

/// Static text that parameterizes the shared prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaDescriptor {
    /// Who the model should act as, with article ("a professional nutritionist")
    pub role: &'static str,
    /// Style guidance appended to the role in the system message
    pub guidance: &'static str,
    /// Closing instruction of the user message
    pub instruction: &'static str,
    /// Soft length request; not enforced on the reply
    pub length_hint: Option<&'static str>,
}

const FITNESS: PersonaDescriptor = PersonaDescriptor {
    role: "a professional fitness coach",
    guidance: "Provide concise, actionable advice with specific recommendations.",
    instruction: "Provide a brief analysis and recommendation for the next week's workout plan.\n\
                  Focus on progressive overload and variety. \
                  Be specific with exercise types, duration, and frequency.",
    length_hint: None,
};

const NUTRITION: PersonaDescriptor = PersonaDescriptor {
    role: "a professional nutritionist",
    guidance: "Provide concise, actionable advice with specific food and meal recommendations.",
    instruction: "Provide a brief analysis and specific recommendations for a balanced nutrition plan.\n\
                  Consider macronutrient balance, meal timing, and food suggestions.",
    length_hint: None,
};

const MOTIVATION: PersonaDescriptor = PersonaDescriptor {
    role: "an enthusiastic motivational coach",
    guidance: "Create inspiring, concise messages that encourage action.",
    instruction: "Make it encouraging, personalized, and actionable.",
    length_hint: Some("Keep it under 2 sentences."),
};

/// Details of a failed generation, embedded into fallback texts
#[derive(Debug, Clone, Copy)]
pub struct FailureContext<'a> {
    /// Error description from the provider
    pub cause: &'a str,
    /// Display name of the text-generation service
    pub service: &'a str,
    /// Model that was requested
    pub model: &'a str,
}

impl Persona {
    /// All personas
    pub const ALL: [Self; 3] = [Self::Fitness, Self::Nutrition, Self::Motivation];

    /// Template parameters for this persona
    #[must_use]
    pub const fn descriptor(&self) -> &'static PersonaDescriptor {
        match self {
            Self::Fitness => &FITNESS,
            Self::Nutrition => &NUTRITION,
            Self::Motivation => &MOTIVATION,
        }
    }

    /// Kind of text this persona produces
    #[must_use]
    pub const fn text_kind(&self) -> TextKind {
        match self {
            Self::Fitness => TextKind::WorkoutPlan,
            Self::Nutrition => TextKind::NutritionPlan,
            Self::Motivation => TextKind::MotivationalText,
        }
    }

    /// System message framing the model's role
    #[must_use]
    pub fn system_message(&self) -> String {
        let descriptor = self.descriptor();
        format!("You are {}. {}", descriptor.role, descriptor.guidance)
    }

    /// Text shown in place of a model reply when generation fails
    ///
    /// `goal` is only used by the motivation persona.
    #[must_use]
    pub fn fallback_text(&self, goal: FitnessGoal, failure: &FailureContext<'_>) -> String {
        let FailureContext {
            cause,
            service,
            model,
        } = failure;
        match self {
            Self::Fitness => format!(
                "Error generating fitness analysis: {cause}. \
                 Please ensure {service} is running and the {model} model is installed."
            ),
            Self::Nutrition => format!(
                "Error generating nutrition analysis: {cause}. \
                 Please ensure {service} is running and the {model} model is installed."
            ),
            Self::Motivation => {
                format!("Stay motivated and keep working towards your goal: {goal}! Error: {cause}")
            }
        }
    }
}

impl Display for Persona {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fitness => f.write_str("fitness"),
            Self::Nutrition => f.write_str("nutrition"),
            Self::Motivation => f.write_str("motivation"),
        }
    }
}
