//! Board module for Noticeboard.
//!
//! This module provides the board resource:
//! - Board types and partial updates
//! - Field validation reporting every violated rule
//! - A storage trait with in-memory and SQLite implementations
//! - The service that ties them together

mod repository;
mod service;
mod store;
mod types;
pub mod validation;

pub use repository::BoardRepository;
pub use service::BoardService;
pub use store::{BoardStore, MemoryBoardStore};
pub use types::{Board, BoardDraft, BoardUpdate, NewBoard, TextInput};
pub use validation::{Violation, Violations};
