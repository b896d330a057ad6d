//! Noticeboard - a small REST service for boards with JWT-guarded writes.
//!
//! Boards are short titled notes kept behind a [`board::BoardStore`], either
//! in SQLite or in process memory. Users register with an email and password
//! and receive bearer tokens that unlock the mutating board routes.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, verify_password, AuthRejection, AuthStrategy, AuthenticatedUser,
    PasswordError, UserService,
};
pub use board::{
    Board, BoardDraft, BoardService, BoardStore, BoardUpdate, MemoryBoardStore, Violations,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{NoticeboardError, Result};
pub use web::WebServer;
