//! Board service for Noticeboard.
//!
//! Business rules for boards on top of any [`BoardStore`]: validation at the
//! boundary, `NotFound` for unknown IDs, and partial-update merging.

use std::sync::Arc;

use tracing::info;

use super::store::BoardStore;
use super::types::{Board, BoardDraft, BoardUpdate};
use super::validation::{check_update_types, validate_board_update, validate_new_board};
use crate::{NoticeboardError, Result};

/// Service for board operations.
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn BoardStore>,
    validate_updates: bool,
}

impl BoardService {
    /// Create a new BoardService over the given store.
    ///
    /// Present fields of an update are validated unless turned off with
    /// [`with_update_validation`](Self::with_update_validation).
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self {
            store,
            validate_updates: true,
        }
    }

    /// Choose whether `update` checks present fields against the creation rules.
    pub fn with_update_validation(mut self, enabled: bool) -> Self {
        self.validate_updates = enabled;
        self
    }

    /// All boards in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Board>> {
        self.store.list().await
    }

    /// Get a board by ID.
    pub async fn find_one(&self, id: i64) -> Result<Board> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| NoticeboardError::board_not_found(id))
    }

    /// Validate and persist a new board.
    pub async fn create(&self, draft: &BoardDraft) -> Result<Board> {
        let new_board = validate_new_board(draft)?;
        let board = self.store.insert(&new_board).await?;
        info!(board_id = board.id, "Board created");
        Ok(board)
    }

    /// Apply a partial update.
    ///
    /// Only fields present in `update` are overwritten.
    pub async fn update(&self, id: i64, update: &BoardUpdate) -> Result<Board> {
        let mut board = self.find_one(id).await?;

        if self.validate_updates {
            validate_board_update(update)?;
        } else {
            check_update_types(update)?;
        }

        if update.is_empty() {
            return Ok(board);
        }

        board.apply(update);

        // The row can vanish between the read and the write
        let board = self
            .store
            .save(&board)
            .await?
            .ok_or_else(|| NoticeboardError::board_not_found(id))?;
        info!(board_id = id, "Board updated");
        Ok(board)
    }

    /// Delete a board by ID.
    pub async fn remove(&self, id: i64) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(NoticeboardError::board_not_found(id));
        }
        info!(board_id = id, "Board removed");
        Ok(())
    }
}
