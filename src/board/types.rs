//! Board model for Noticeboard.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Board entity: a titled note-like record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID, assigned on creation.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Creation timestamp, never changed afterwards.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Overwrite the fields present in `update`, leaving the rest untouched.
    ///
    /// `id` and `created_at` are never touched.
    ///
    /// Values that are not text are skipped; callers check types first.
    pub fn apply(&mut self, update: &BoardUpdate) {
        if let Some(title) = update.title.as_ref().and_then(TextInput::as_text) {
            self.title = title.to_string();
        }
        if let Some(description) = update.description.as_ref().and_then(TextInput::as_text) {
            self.description = description.to_string();
        }
    }
}

/// A text field as it arrived: a string, or any other JSON value.
///
/// Keeping the wrong-typed value lets validation report it alongside the
/// other fields instead of failing the whole body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    /// A JSON string.
    Text(String),
    /// A number, boolean, array or object.
    Other(serde_json::Value),
}

impl TextInput {
    /// The string, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextInput::Text(text) => Some(text),
            TextInput::Other(_) => None,
        }
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Text(text)
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Text(text.to_string())
    }
}

/// Raw create input as received from a caller; not yet validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardDraft {
    /// Requested title.
    #[serde(default)]
    pub title: Option<TextInput>,
    /// Requested description.
    #[serde(default)]
    pub description: Option<TextInput>,
}

impl BoardDraft {
    /// Create a draft with both fields present.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(TextInput::Text(title.into())),
            description: Some(TextInput::Text(description.into())),
        }
    }
}

/// Validated data for creating a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
}

/// Partial update: only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardUpdate {
    /// New title.
    #[serde(default)]
    pub title: Option<TextInput>,
    /// New description.
    #[serde(default)]
    pub description: Option<TextInput>,
}

impl BoardUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(TextInput::Text(title.into()));
        self
    }

    /// Set new description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(TextInput::Text(description.into()));
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            id: 1,
            title: "Original".to_string(),
            description: "Original description".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_title_only() {
        let mut board = sample_board();
        let before = board.clone();

        board.apply(&BoardUpdate::new().title("X"));

        assert_eq!(board.title, "X");
        assert_eq!(board.description, before.description);
        assert_eq!(board.id, before.id);
        assert_eq!(board.created_at, before.created_at);
    }

    #[test]
    fn test_apply_both_fields() {
        let mut board = sample_board();
        board.apply(&BoardUpdate::new().title("New").description("New description"));

        assert_eq!(board.title, "New");
        assert_eq!(board.description, "New description");
    }

    #[test]
    fn test_apply_empty_update() {
        let mut board = sample_board();
        let before = board.clone();
        board.apply(&BoardUpdate::new());
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_update_is_empty() {
        assert!(BoardUpdate::new().is_empty());
        assert!(!BoardUpdate::new().description("desc").is_empty());
    }

    #[test]
    fn test_draft_deserialize_missing_fields() {
        let draft: BoardDraft = serde_json::from_str(r#"{"title":"ab"}"#).unwrap();
        assert_eq!(draft.title, Some(TextInput::from("ab")));
        assert!(draft.description.is_none());
    }

    #[test]
    fn test_draft_deserialize_keeps_wrong_types() {
        let draft: BoardDraft =
            serde_json::from_str(r#"{"title":123,"description":"abc"}"#).unwrap();
        assert_eq!(
            draft.title,
            Some(TextInput::Other(serde_json::json!(123)))
        );
        assert_eq!(draft.description, Some(TextInput::from("abc")));
    }

    #[test]
    fn test_apply_skips_non_text() {
        let mut board = sample_board();
        let update = BoardUpdate {
            title: Some(TextInput::Other(serde_json::json!(true))),
            description: Some(TextInput::from("Replaced description")),
        };

        board.apply(&update);

        assert_eq!(board.title, "Original");
        assert_eq!(board.description, "Replaced description");
    }

    #[test]
    fn test_update_deserialize_null_is_absent() {
        let update: BoardUpdate =
            serde_json::from_str(r#"{"title":null,"description":"hello"}"#).unwrap();
        assert!(update.title.is_none());
        assert_eq!(update.description, Some(TextInput::from("hello")));
    }
}
