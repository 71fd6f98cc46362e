use crate::model::RecipeId;
use std::fmt;
use thiserror::Error;

/// A single failing field in a create/update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(RecipeId),

    #[error("Invalid recipe: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let err = RecipeError::Validation(vec![
            FieldError::new("name", "Recipe name is required"),
            FieldError::new("servings", "Servings must be at least 1"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid recipe: name: Recipe name is required; servings: Servings must be at least 1"
        );
    }

    #[test]
    fn not_found_names_the_id() {
        let err = RecipeError::RecipeNotFound(RecipeId(42));
        assert_eq!(err.to_string(), "Recipe not found with id: 42");
    }
}
