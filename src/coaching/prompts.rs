// ABOUTME: Prompt builder rendering aggregated statistics into persona-framed chat prompts
// ABOUTME: One parameterized template shared by the workout, nutrition, and motivation coaches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

//! Prompt construction
//!
//! [`build_prompt`] is a pure function: it never reads the clock or the
//! store, so identical inputs always produce byte-identical prompts.

use uuid::Uuid;

use super::persona::{FailureContext, Persona};
use crate::constants::aggregation::NO_ACTIVITIES_PLACEHOLDER;
use crate::intelligence::{FitnessSummary, NutritionSummary};
use crate::llm::{ChatMessage, ChatRequest, LlmCapabilities};
use crate::models::{FitnessGoal, UserProfile};

/// Data a persona needs to build its prompt
#[derive(Debug, Clone, Copy)]
pub enum PromptInput<'a> {
    /// Workout plan from the fitness window
    Workout {
        /// Subject of the analysis
        user_id: Uuid,
        /// Fitness window statistics
        summary: &'a FitnessSummary,
    },
    /// Nutrition plan from the nutrition window and profile
    Nutrition {
        /// Subject of the analysis
        user_id: Uuid,
        /// Nutrition window statistics
        summary: &'a NutritionSummary,
        /// Profile context; `None` when the user record is missing
        profile: Option<&'a UserProfile>,
    },
    /// Motivational message for a goal
    Motivation {
        /// Goal the message should encourage
        goal: FitnessGoal,
        /// Profile context; `None` when the user record is missing
        profile: Option<&'a UserProfile>,
    },
}

impl PromptInput<'_> {
    /// Persona that handles this input
    #[must_use]
    pub const fn persona(&self) -> Persona {
        match self {
            Self::Workout { .. } => Persona::Fitness,
            Self::Nutrition { .. } => Persona::Nutrition,
            Self::Motivation { .. } => Persona::Motivation,
        }
    }

    fn goal(&self) -> FitnessGoal {
        match self {
            Self::Workout { .. } => FitnessGoal::default(),
            Self::Nutrition { profile, .. } => {
                profile.map(|p| p.fitness_goal).unwrap_or_default()
            }
            Self::Motivation { goal, .. } => *goal,
        }
    }
}

/// A rendered prompt ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingPrompt {
    /// Persona that produced the prompt
    pub persona: Persona,
    /// System message
    pub system: String,
    /// User message
    pub user: String,
    /// Goal quoted by the motivation fallback
    pub goal: FitnessGoal,
}

impl CoachingPrompt {
    /// Chat request carrying the system and user messages
    ///
    /// Providers that ignore system messages get the persona framing as the
    /// opening paragraph of the single user message.
    #[must_use]
    pub fn to_chat_request(&self, model: &str, capabilities: LlmCapabilities) -> ChatRequest {
        let messages = if capabilities.supports_system_messages() {
            vec![
                ChatMessage::system(self.system.clone()),
                ChatMessage::user(self.user.clone()),
            ]
        } else {
            vec![ChatMessage::user(format!("{}\n\n{}", self.system, self.user))]
        };
        ChatRequest::new(messages).with_model(model)
    }

    /// Fallback text for this prompt's persona
    #[must_use]
    pub fn fallback_text(&self, failure: &FailureContext<'_>) -> String {
        self.persona.fallback_text(self.goal, failure)
    }
}

/// Render the prompt for `input`
#[must_use]
pub fn build_prompt(input: &PromptInput<'_>) -> CoachingPrompt {
    let persona = input.persona();
    let (lead, facts) = match input {
        PromptInput::Workout { user_id, summary } => workout_body(*user_id, summary),
        PromptInput::Nutrition {
            user_id,
            summary,
            profile,
        } => nutrition_body(*user_id, summary, *profile),
        PromptInput::Motivation { goal, profile } => motivation_body(*goal, *profile),
    };

    CoachingPrompt {
        persona,
        system: persona.system_message(),
        user: render_template(persona, &lead, &facts),
        goal: input.goal(),
    }
}

/// Lead line, then one `- fact` line per fact, a blank line, and the closing
/// instruction with the optional length hint
fn render_template(persona: Persona, lead: &str, facts: &[String]) -> String {
    let descriptor = persona.descriptor();
    let mut text = String::from(lead);
    for fact in facts {
        text.push_str("\n- ");
        text.push_str(fact);
    }
    text.push_str(if facts.is_empty() { "\n" } else { "\n\n" });
    text.push_str(descriptor.instruction);
    if let Some(hint) = descriptor.length_hint {
        text.push(' ');
        text.push_str(hint);
    }
    text
}

fn workout_body(user_id: Uuid, summary: &FitnessSummary) -> (String, Vec<String>) {
    let activities = if summary.is_empty() {
        NO_ACTIVITIES_PLACEHOLDER.to_owned()
    } else {
        summary.activity_labels().join(", ")
    };

    (
        format!("Analyze this fitness data for user {user_id}:"),
        vec![
            format!(
                "Total exercise duration last 7 days: {} minutes",
                summary.total_duration_minutes
            ),
            format!("Total calories burned: {}", summary.total_calories_burned),
            format!("Activities: {activities}"),
        ],
    )
}

fn nutrition_body(
    user_id: Uuid,
    summary: &NutritionSummary,
    profile: Option<&UserProfile>,
) -> (String, Vec<String>) {
    let context = profile.map(nutrition_context).unwrap_or_default();
    let lead = if context.is_empty() {
        format!("Analyze this nutrition data for user {user_id}:")
    } else {
        format!("Analyze this nutrition data for user {user_id} ({context}):")
    };

    (
        lead,
        vec![
            format!("Average daily calories: {:.2}", summary.avg_daily_calories()),
            format!("Average daily protein: {:.2}g", summary.avg_daily_protein_g()),
            format!("Average daily carbs: {:.2}g", summary.avg_daily_carbs_g()),
            format!("Average daily fats: {:.2}g", summary.avg_daily_fats_g()),
        ],
    )
}

fn motivation_body(goal: FitnessGoal, profile: Option<&UserProfile>) -> (String, Vec<String>) {
    let context = profile.map(motivation_context).unwrap_or_default();
    (
        format!(
            "{context}Generate a short, motivational message for a user with this fitness goal: {goal}."
        ),
        Vec::new(),
    )
}

/// `Age: 30, Weight: 70kg, Height: 175cm, Goal: Weight Loss`, skipping unknown fields
fn nutrition_context(profile: &UserProfile) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some(age) = profile.age {
        parts.push(format!("Age: {age}"));
    }
    if let Some(weight) = profile.weight_kg {
        parts.push(format!("Weight: {weight}kg"));
    }
    if let Some(height) = profile.height_cm {
        parts.push(format!("Height: {height}cm"));
    }
    parts.push(format!("Goal: {}", profile.fitness_goal));
    parts.join(", ")
}

/// `User profile: 30 years old, 70kg, 175cm. ` or empty when nothing is known
fn motivation_context(profile: &UserProfile) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(age) = profile.age {
        parts.push(format!("{age} years old"));
    }
    if let Some(weight) = profile.weight_kg {
        parts.push(format!("{weight}kg"));
    }
    if let Some(height) = profile.height_cm {
        parts.push(format!("{height}cm"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("User profile: {}. ", parts.join(", "))
    }
}
