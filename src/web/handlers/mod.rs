//! API handlers for the Noticeboard HTTP surface.

pub mod auth;
pub mod board;

pub use auth::*;
pub use board::*;

use std::sync::Arc;

use crate::auth::{AuthStrategy, UserService};
use crate::board::{BoardRepository, BoardService, BoardStore, MemoryBoardStore};
use crate::config::{BoardStorage, Config};
use crate::db::{Database, UserRepository};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Board business logic over the configured store.
    pub boards: BoardService,
    /// User accounts and credential checks.
    pub users: UserService,
    /// Token issuance and verification.
    pub auth: AuthStrategy,
}

impl AppState {
    /// Wire the services from configuration and an open database.
    pub fn from_config(config: &Config, db: &Database) -> Arc<Self> {
        let store: Arc<dyn BoardStore> = match config.boards.storage {
            BoardStorage::Database => Arc::new(BoardRepository::new(db.pool().clone())),
            BoardStorage::Memory => Arc::new(MemoryBoardStore::new()),
        };
        let boards =
            BoardService::new(store).with_update_validation(config.boards.validate_updates);

        let users = UserService::new(UserRepository::new(db.pool().clone()));
        let auth = AuthStrategy::new(
            &config.auth.jwt_secret,
            config.auth.token_expiry_secs,
            users.clone(),
        );

        Arc::new(Self {
            boards,
            users,
            auth,
        })
    }
}
