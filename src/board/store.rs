//! Board storage abstraction.
//!
//! [`BoardStore`] is the contract the board service is written against.
//! [`MemoryBoardStore`] keeps boards in process memory; the SQLite-backed
//! [`BoardRepository`](super::BoardRepository) persists them.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::types::{Board, NewBoard};
use crate::Result;

/// Persistence operations for boards.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// All boards in insertion order.
    async fn list(&self) -> Result<Vec<Board>>;

    /// Get a board by ID.
    async fn get(&self, id: i64) -> Result<Option<Board>>;

    /// Persist a new board, assigning a fresh ID and creation time.
    async fn insert(&self, new_board: &NewBoard) -> Result<Board>;

    /// Write back the title and description of an existing board.
    ///
    /// Returns `None` if no board with that ID exists.
    async fn save(&self, board: &Board) -> Result<Option<Board>>;

    /// Delete a board by ID.
    ///
    /// Returns true if a board was deleted, false if not found.
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[derive(Debug)]
struct MemoryState {
    boards: Vec<Board>,
    next_id: i64,
}

/// Process-local board store.
#[derive(Debug)]
pub struct MemoryBoardStore {
    state: RwLock<MemoryState>,
}

impl MemoryBoardStore {
    /// Create an empty store; the first board gets ID 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                boards: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryBoardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn list(&self) -> Result<Vec<Board>> {
        Ok(self.state.read().await.boards.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Board>> {
        let state = self.state.read().await;
        Ok(state.boards.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, new_board: &NewBoard) -> Result<Board> {
        let mut state = self.state.write().await;
        let board = Board {
            id: state.next_id,
            title: new_board.title.clone(),
            description: new_board.description.clone(),
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.boards.push(board.clone());
        Ok(board)
    }

    async fn save(&self, board: &Board) -> Result<Option<Board>> {
        let mut state = self.state.write().await;
        let Some(stored) = state.boards.iter_mut().find(|b| b.id == board.id) else {
            return Ok(None);
        };
        stored.title = board.title.clone();
        stored.description = board.description.clone();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.write().await;
        match state.boards.iter().position(|b| b.id == id) {
            Some(index) => {
                state.boards.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Contract checks shared by every [`BoardStore`] implementation.
#[cfg(test)]
pub(crate) mod contract {
    use super::*;

    fn new_board(title: &str) -> NewBoard {
        NewBoard {
            title: title.to_string(),
            description: format!("{title} description"),
        }
    }

    pub async fn insert_assigns_increasing_ids(store: &dyn BoardStore) {
        let first = store.insert(&new_board("first")).await.unwrap();
        let second = store.insert(&new_board("second")).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert!(first.created_at <= Utc::now());
    }

    pub async fn list_keeps_insertion_order(store: &dyn BoardStore) {
        assert!(store.list().await.unwrap().is_empty());

        for title in ["one", "two", "three"] {
            store.insert(&new_board(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    pub async fn get_returns_inserted_board(store: &dyn BoardStore) {
        let created = store.insert(&new_board("hello")).await.unwrap();
        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(store.get(created.id + 100).await.unwrap().is_none());
    }

    pub async fn save_overwrites_text_only(store: &dyn BoardStore) {
        let created = store.insert(&new_board("before")).await.unwrap();

        let mut changed = created.clone();
        changed.title = "after".to_string();
        changed.created_at = Utc::now() + chrono::Duration::days(1);

        let saved = store.save(&changed).await.unwrap().unwrap();
        assert_eq!(saved.title, "after");
        assert_eq!(saved.description, created.description);
        assert_eq!(saved.created_at, created.created_at);

        let mut missing = created;
        missing.id = 9999;
        assert!(store.save(&missing).await.unwrap().is_none());
    }

    pub async fn delete_removes_once(store: &dyn BoardStore) {
        let created = store.insert(&new_board("doomed")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(!store.delete(created.id).await.unwrap());
    }

    pub async fn ids_are_not_reused(store: &dyn BoardStore) {
        let first = store.insert(&new_board("first")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.insert(&new_board("second")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
