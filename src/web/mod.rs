//! HTTP surface for Noticeboard.
//!
//! Board CRUD under `/boards`, account and token routes under `/auth`,
//! and a plain `/health` check.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
