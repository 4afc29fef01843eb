// ABOUTME: User commands for health-coach
// ABOUTME: Registers users and shows stored profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Health Coach Contributors

use health_coach::{
    constants::limits,
    database::Database,
    errors::{AppError, AppResult},
    models::{FitnessGoal, User},
};
use tracing::info;

use crate::helpers::display::{display_user, display_user_list};

type Result<T> = AppResult<T>;

/// Registration form values
pub struct NewUserArgs {
    pub username: String,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub goal: FitnessGoal,
    pub dietary_preferences: String,
}

impl NewUserArgs {
    fn into_user(self) -> Result<User> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AppError::invalid_input("Username must not be empty"));
        }
        if username.chars().count() > limits::MAX_USERNAME_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Username must be at most {} characters",
                limits::MAX_USERNAME_LENGTH
            )));
        }

        let mut user = User::new(username, self.goal)
            .with_dietary_preferences(self.dietary_preferences.trim());
        if let Some(age) = self.age {
            user = user.with_age(age);
        }
        if let Some(weight_kg) = self.weight_kg {
            user = user.with_weight_kg(weight_kg);
        }
        if let Some(height_cm) = self.height_cm {
            user = user.with_height_cm(height_cm);
        }
        Ok(user)
    }
}

/// Register a new user
pub async fn create(database: &Database, args: NewUserArgs) -> Result<()> {
    let user = args.into_user()?;
    info!("Registering user {}", user.username);

    database.create_user(&user).await?;

    println!("User created successfully.");
    display_user(&user);
    Ok(())
}

/// List all users
pub async fn list(database: &Database) -> Result<()> {
    let users = database.list_users().await?;
    display_user_list(&users);
    Ok(())
}

/// Show one user by username
pub async fn show(database: &Database, username: &str) -> Result<()> {
    let user = database.get_user_by_username_required(username).await?;
    display_user(&user);
    Ok(())
}
