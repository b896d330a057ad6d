//! Field constraints for board input.
//!
//! Every violated rule is collected; nothing stops at the first failure.

use std::collections::HashMap;
use std::fmt;

use super::types::{BoardDraft, BoardUpdate, NewBoard, TextInput};

/// Minimum title length (in characters).
pub const MIN_TITLE_LENGTH: usize = 2;

/// Maximum title length (in characters).
pub const MAX_TITLE_LENGTH: usize = 50;

/// Minimum description length (in characters).
pub const MIN_DESCRIPTION_LENGTH: usize = 5;

/// Maximum description length (in characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending field name.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// All rules violated by one input, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Record a violation.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(Violation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// True when no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Messages only, in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.message.as_str()).collect()
    }

    /// Messages grouped by field.
    pub fn by_field(&self) -> HashMap<String, Vec<String>> {
        let mut details: HashMap<String, Vec<String>> = HashMap::new();
        for v in &self.0 {
            details
                .entry(v.field.clone())
                .or_default()
                .push(v.message.clone());
        }
        details
    }

    fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Check one string field.
///
/// A missing value fails the type and emptiness rules; a value of another
/// JSON type fails the type rule. Length is only measured on strings.
fn check_text(
    violations: &mut Violations,
    field: &str,
    value: Option<&TextInput>,
    min: usize,
    max: usize,
) {
    let value = match value {
        None => {
            violations.push(field, format!("{field} must be a string"));
            violations.push(field, format!("{field} should not be empty"));
            return;
        }
        Some(TextInput::Other(_)) => {
            violations.push(field, format!("{field} must be a string"));
            return;
        }
        Some(TextInput::Text(text)) => text,
    };

    if value.is_empty() {
        violations.push(field, format!("{field} should not be empty"));
    }

    let len = value.chars().count();
    if len < min {
        violations.push(
            field,
            format!("{field} must be longer than or equal to {min} characters"),
        );
    }
    if len > max {
        violations.push(
            field,
            format!("{field} must be shorter than or equal to {max} characters"),
        );
    }
}

fn text_of(value: &Option<TextInput>) -> String {
    value
        .as_ref()
        .and_then(TextInput::as_text)
        .unwrap_or_default()
        .to_string()
}

/// Validate create input and turn it into a [`NewBoard`].
pub fn validate_new_board(draft: &BoardDraft) -> Result<NewBoard, Violations> {
    let mut violations = Violations::default();
    check_text(
        &mut violations,
        "title",
        draft.title.as_ref(),
        MIN_TITLE_LENGTH,
        MAX_TITLE_LENGTH,
    );
    check_text(
        &mut violations,
        "description",
        draft.description.as_ref(),
        MIN_DESCRIPTION_LENGTH,
        MAX_DESCRIPTION_LENGTH,
    );
    violations.into_result()?;

    Ok(NewBoard {
        title: text_of(&draft.title),
        description: text_of(&draft.description),
    })
}

/// Validate the fields present in a partial update.
///
/// Absent fields are not checked.
pub fn validate_board_update(update: &BoardUpdate) -> Result<(), Violations> {
    let mut violations = Violations::default();
    if let Some(title) = update.title.as_ref() {
        check_text(
            &mut violations,
            "title",
            Some(title),
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        );
    }
    if let Some(description) = update.description.as_ref() {
        check_text(
            &mut violations,
            "description",
            Some(description),
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        );
    }
    violations.into_result()
}

/// Check only that the present fields of an update are strings.
///
/// Used when length rules are not enforced on update; a non-string can
/// never be stored either way.
pub fn check_update_types(update: &BoardUpdate) -> Result<(), Violations> {
    let mut violations = Violations::default();
    for (field, value) in [("title", &update.title), ("description", &update.description)] {
        if let Some(TextInput::Other(_)) = value {
            violations.push(field, format!("{field} must be a string"));
        }
    }
    violations.into_result()
}
