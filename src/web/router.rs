//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{get, patch, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_board, delete_board, get_board, list_boards, login, me, register, update_board,
    AppState,
};
use super::middleware::{create_cors_layer, require_auth};
use crate::config::Config;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, config: &Config) -> Router {
    let guard = middleware::from_fn_with_state(app_state.clone(), require_auth);

    // Reads stay public; writes go through the guard only when configured.
    let (collection, item): (MethodRouter<Arc<AppState>>, MethodRouter<Arc<AppState>>) =
        if config.auth.protect_writes {
            (
                get(list_boards).merge(post(create_board).route_layer(guard.clone())),
                get(get_board).merge(
                    patch(update_board)
                        .delete(delete_board)
                        .route_layer(guard.clone()),
                ),
            )
        } else {
            (
                get(list_boards).post(create_board),
                get(get_board).patch(update_board).delete(delete_board),
            )
        };

    let board_routes = Router::new()
        .route("/", collection)
        .route("/:id", item);

    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).route_layer(guard));

    Router::new()
        .nest("/boards", board_routes)
        .nest("/auth", auth_routes)
        .with_state(app_state)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.server.cors_origins)),
        )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
