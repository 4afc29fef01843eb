// ABOUTME: health-coach CLI - personal fitness and nutrition tracking with LLM coaching
// ABOUTME: Manages users, records logs, shows the dashboard, and generates coaching plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors
//!
//! Usage:
//! ```bash
//! # Register a user
//! health-coach user create --username alice --age 34 --weight 68 --height 170 --goal "Weight Loss"
//!
//! # Record an activity and a meal
//! health-coach log activity --user alice --activity Running --duration 30 --calories 300
//! health-coach log meal --user alice --meal Lunch --food "Chicken salad" --calories 550 --protein 40
//!
//! # Seven-day dashboard
//! health-coach dashboard --user alice
//!
//! # Generate coaching texts
//! health-coach plan workout --user alice
//! health-coach plan motivation --user alice --goal Endurance
//!
//! # Past workout plans, newest first
//! health-coach history workout-plans --user alice
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use health_coach::{
    coaching::{CoachingClient, HealthCoach},
    config::AppConfig,
    constants::limits,
    database::Database,
    errors::AppResult,
    models::{ActivityType, FitnessGoal, MealType},
};
use tracing::info;

use helpers::parsers::{parse_non_negative, parse_positive};

#[derive(Parser)]
#[command(
    name = "health-coach",
    about = "Personal health coach",
    long_about = "Track fitness and nutrition logs and get coaching plans from a locally hosted language model."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// OpenAI-compatible base URL override (e.g. http://localhost:11434/v1)
    #[arg(long, global = true)]
    llm_base_url: Option<String>,

    /// Model identifier override
    #[arg(long, global = true)]
    model: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// User management commands
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Record fitness activities and meals
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Show the last seven days of activity and nutrition
    Dashboard {
        /// Username
        #[arg(long, short = 'u')]
        user: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a coaching text
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// List stored logs or generated texts, newest first
    History {
        /// What to list
        #[arg(value_enum)]
        kind: commands::history::HistoryKind,

        /// Username
        #[arg(long, short = 'u')]
        user: String,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check that the text-generation service is reachable
    LlmHealth,
}

#[derive(Subcommand)]
enum UserCommand {
    /// Register a new user
    Create {
        /// Unique username
        #[arg(long)]
        username: String,

        /// Age in years
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(limits::MIN_AGE)..=i64::from(limits::MAX_AGE)))]
        age: Option<u32>,

        /// Weight in kilograms
        #[arg(long, value_parser = parse_positive)]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long, value_parser = parse_positive)]
        height: Option<f64>,

        /// Fitness goal (Weight Loss, Muscle Gain, Maintenance, Endurance, General Fitness)
        #[arg(long, default_value = "General Fitness")]
        goal: FitnessGoal,

        /// Dietary preferences, free text
        #[arg(long, default_value = "")]
        dietary_preferences: String,
    },

    /// List all users
    List,

    /// Show one user
    Show {
        /// Username
        username: String,
    },
}

#[derive(Subcommand)]
enum LogCommand {
    /// Record a fitness activity
    Activity {
        /// Username
        #[arg(long, short = 'u')]
        user: String,

        /// Activity type (Running, Walking, Cycling, Swimming, Weight Training, Yoga, Pilates, HIIT, Other)
        #[arg(long)]
        activity: ActivityType,

        /// Duration in minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(limits::MIN_DURATION_MINUTES)..=i64::from(limits::MAX_DURATION_MINUTES)))]
        duration: u32,

        /// Calories burned
        #[arg(long, value_parser = parse_non_negative)]
        calories: f64,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record a meal
    Meal {
        /// Username
        #[arg(long, short = 'u')]
        user: String,

        /// Meal type (Breakfast, Lunch, Dinner, Snack)
        #[arg(long)]
        meal: MealType,

        /// Food description
        #[arg(long)]
        food: String,

        /// Calories
        #[arg(long, value_parser = parse_non_negative)]
        calories: f64,

        /// Protein in grams
        #[arg(long, default_value = "0", value_parser = parse_non_negative)]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long, default_value = "0", value_parser = parse_non_negative)]
        carbs: f64,

        /// Fats in grams
        #[arg(long, default_value = "0", value_parser = parse_non_negative)]
        fats: f64,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Next week's workout plan from the last seven days of activity
    Workout {
        /// Username
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Nutrition plan from the last seven days of meals
    Nutrition {
        /// Username
        #[arg(long, short = 'u')]
        user: String,
    },

    /// Short motivational message
    Motivation {
        /// Username
        #[arg(long, short = 'u')]
        user: String,

        /// Goal to encourage (defaults to the user's goal)
        #[arg(long)]
        goal: Option<FitnessGoal>,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::from_env()?.with_overrides(cli.database_url, cli.llm_base_url, cli.model)?;

    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    let result = run_command(cli.command, &database, &config).await;
    database.close().await;
    result
}

async fn run_command(command: Command, database: &Database, config: &AppConfig) -> AppResult<()> {
    match command {
        Command::User { action } => match action {
            UserCommand::Create {
                username,
                age,
                weight,
                height,
                goal,
                dietary_preferences,
            } => {
                let profile = commands::user::NewUserArgs {
                    username,
                    age,
                    weight_kg: weight,
                    height_cm: height,
                    goal,
                    dietary_preferences,
                };
                commands::user::create(database, profile).await
            }
            UserCommand::List => commands::user::list(database).await,
            UserCommand::Show { username } => commands::user::show(database, &username).await,
        },
        Command::Log { action } => match action {
            LogCommand::Activity {
                user,
                activity,
                duration,
                calories,
                notes,
            } => {
                commands::log::activity(database, &user, activity, duration, calories, notes).await
            }
            LogCommand::Meal {
                user,
                meal,
                food,
                calories,
                protein,
                carbs,
                fats,
            } => {
                commands::log::meal(
                    database,
                    &user,
                    meal,
                    food,
                    calories,
                    (protein, carbs, fats),
                )
                .await
            }
        },
        Command::Dashboard { user, json } => commands::dashboard::show(database, &user, json).await,
        Command::Plan { action } => {
            let coach = HealthCoach::new(CoachingClient::from_config(&config.llm)?);
            match action {
                PlanCommand::Workout { user } => {
                    commands::plan::workout(&coach, database, &user).await
                }
                PlanCommand::Nutrition { user } => {
                    commands::plan::nutrition(&coach, database, &user).await
                }
                PlanCommand::Motivation { user, goal } => {
                    commands::plan::motivation(&coach, database, &user, goal).await
                }
            }
        }
        Command::History { kind, user, limit } => {
            commands::history::list(database, &user, kind, limit).await
        }
        Command::LlmHealth => {
            let coach = HealthCoach::new(CoachingClient::from_config(&config.llm)?);
            commands::llm_health::run(&coach).await
        }
    }
}
