//! Request DTOs for Web API.
//!
//! Board bodies deserialize straight into [`crate::board::BoardDraft`] and
//! [`crate::board::BoardUpdate`]; their rules live in the board module.

use serde::Deserialize;
use validator::Validate;

use super::validation::not_empty_trimmed;

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    /// Plain-text password, hashed before storage.
    #[validate(length(min = 8, max = 128, message = "Must be 8-128 characters"))]
    pub password: String,
    /// Display name.
    #[validate(
        length(min = 1, max = 50, message = "Must be 1-50 characters"),
        custom(function = "not_empty_trimmed")
    )]
    pub name: String,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
