//! Board repository for Noticeboard.
//!
//! SQLite-backed implementation of [`BoardStore`].

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::store::BoardStore;
use super::types::{Board, NewBoard};
use crate::{NoticeboardError, Result};

/// Repository for board rows.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: SqlitePool,
}

impl BoardRepository {
    /// Create a new BoardRepository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardStore for BoardRepository {
    async fn list(&self) -> Result<Vec<Board>> {
        let boards = sqlx::query_as::<_, Board>(
            "SELECT id, title, description, created_at FROM boards ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(boards)
    }

    async fn get(&self, id: i64) -> Result<Option<Board>> {
        let board = sqlx::query_as::<_, Board>(
            "SELECT id, title, description, created_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(board)
    }

    async fn insert(&self, new_board: &NewBoard) -> Result<Board> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (title, description, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_board.title)
        .bind(&new_board.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        self.get(id)
            .await?
            .ok_or_else(|| NoticeboardError::board_not_found(id))
    }

    async fn save(&self, board: &Board) -> Result<Option<Board>> {
        let result = sqlx::query("UPDATE boards SET title = ?, description = ? WHERE id = ?")
            .bind(&board.title)
            .bind(&board.description)
            .bind(board.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(board.id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::store::contract;
    use crate::db::Database;

    async fn setup_repo() -> BoardRepository {
        let db = Database::open_in_memory().await.unwrap();
        BoardRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        contract::insert_assigns_increasing_ids(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        contract::list_keeps_insertion_order(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_get_returns_inserted_board() {
        contract::get_returns_inserted_board(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_save_overwrites_text_only() {
        contract::save_overwrites_text_only(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_delete_removes_once() {
        contract::delete_removes_once(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        contract::ids_are_not_reused(&setup_repo().await).await;
    }

    #[tokio::test]
    async fn test_boards_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards.db");

        let db = Database::open(&path, 1).await.unwrap();
        let created = BoardRepository::new(db.pool().clone())
            .insert(&NewBoard {
                title: "kept".to_string(),
                description: "still here".to_string(),
            })
            .await
            .unwrap();
        db.pool().close().await;

        let db = Database::open(&path, 1).await.unwrap();
        let fetched = BoardRepository::new(db.pool().clone())
            .get(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
    }
}
