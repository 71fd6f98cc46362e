use crate::error::{FieldError, RecipeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Store-assigned recipe identity. Never reused within a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeError;

    /// Accepts `7` as well as `#7`, the form recipes are listed with.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        digits
            .parse()
            .map(RecipeId)
            .map_err(|_| RecipeError::Api(format!("Invalid recipe id: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub vegetarian: bool,
    pub servings: u32,
    pub instructions: String,
    pub ingredients: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            vegetarian: draft.vegetarian,
            servings: draft.servings,
            instructions: draft.instructions,
            ingredients: draft.ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every user-editable field. Identity and `created_at` stay put.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.vegetarian = draft.vegetarian;
        self.servings = draft.servings;
        self.instructions = draft.instructions;
        self.ingredients = draft.ingredients;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a recipe or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub vegetarian: bool,
    pub servings: u32,
    pub instructions: String,
    pub ingredients: BTreeSet<String>,
}

impl RecipeDraft {
    pub fn new(
        name: impl Into<String>,
        vegetarian: bool,
        servings: u32,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            servings,
            instructions: instructions.into(),
            ingredients: BTreeSet::new(),
        }
    }

    /// Adds ingredients, trimming surrounding whitespace. Duplicates collapse.
    pub fn with_ingredients<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(|i| i.as_ref().trim().to_string()));
        self
    }

    /// Checks the payload, reporting every failing field at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Recipe name is required"));
        }
        if self.servings < 1 {
            errors.push(FieldError::new("servings", "Servings must be at least 1"));
        }
        if self.instructions.trim().is_empty() {
            errors.push(FieldError::new("instructions", "Instructions are required"));
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            errors.push(FieldError::new("ingredients", "Ingredients cannot be blank"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RecipeError::Validation(errors))
        }
    }
}
