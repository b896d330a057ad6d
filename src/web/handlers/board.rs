//! Board handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::board::{BoardDraft, BoardUpdate};
use crate::web::dto::{BoardResponse, IdPath, JsonBody};
use crate::web::error::ApiError;

/// GET /boards - List every board in creation order.
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let boards = state.boards.find_all().await?;
    Ok(Json(boards.into_iter().map(BoardResponse::from).collect()))
}

/// GET /boards/:id - Fetch one board.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = state.boards.find_one(id).await?;
    Ok(Json(board.into()))
}

/// POST /boards - Create a board.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<BoardDraft>,
) -> Result<(StatusCode, Json<BoardResponse>), ApiError> {
    let board = state.boards.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(board.into())))
}

/// PATCH /boards/:id - Overwrite the fields present in the body.
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    JsonBody(update): JsonBody<BoardUpdate>,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = state.boards.update(id, &update).await?;
    Ok(Json(board.into()))
}

/// DELETE /boards/:id - Remove a board.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.boards.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
