//! User model for Noticeboard.

use chrono::{DateTime, Utc};

/// User entity representing a registered account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login identifier (unique).
    pub email: String,
    /// Password hash (Argon2 PHC string), never the plaintext.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login identifier.
    pub email: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Display name.
    pub name: String,
}

impl NewUser {
    /// Create a new user record from an already hashed password.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password_hash.into(),
            name: name.into(),
        }
    }
}
