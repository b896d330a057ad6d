//! Authentication module for Noticeboard.
//!
//! This module provides password hashing, the user credential service,
//! and bearer-token issuance and verification.

mod credentials;
mod password;
mod strategy;

pub use credentials::UserService;
pub use password::{hash_password, verify_password, PasswordError};
pub use strategy::{extract_bearer, AuthRejection, AuthStrategy, AuthenticatedUser, TokenClaims};
