//! # Storage Layer
//!
//! The [`DataStore`] trait is the record store the rest of the crate talks
//! to. Commands never know which backend they run against.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//! - [`fs::FileStore`]: one JSON document (`recipes.json`) in the data dir.
//! - [`sqlite::SqliteStore`]: SQLite database (`recipes.db`), ingredients in
//!   their own table. Overrides [`DataStore::scan`] with a native query.
//!
//! ## Identity
//!
//! Stores assign ids on insert, starting at 1 and increasing. An id is never
//! handed out twice, even after the recipe holding it is deleted.
//!
//! ## Scanning
//!
//! `scan` returns every recipe the predicate accepts, ordered by id, each at
//! most once. The provided implementation filters `list()` in memory.

use crate::error::{RecipeError, Result};
use crate::filter::RecipePredicate;
use crate::model::{Recipe, RecipeDraft, RecipeId};

pub mod fs;
pub mod memory;
pub mod sqlite;

/// Abstract interface for recipe storage.
pub trait DataStore {
    /// Insert a new recipe, assigning its id and timestamps
    fn insert(&mut self, draft: RecipeDraft) -> Result<Recipe>;

    /// Replace an existing recipe
    fn save(&mut self, recipe: &Recipe) -> Result<()>;

    /// Get a recipe by id
    fn get(&self, id: RecipeId) -> Result<Recipe>;

    /// List all recipes, ordered by id
    fn list(&self) -> Result<Vec<Recipe>>;

    /// Delete a recipe permanently
    fn delete(&mut self, id: RecipeId) -> Result<()>;

    fn exists(&self, id: RecipeId) -> Result<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(RecipeError::RecipeNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Recipes accepted by `predicate`, ordered by id
    fn scan(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| predicate.matches(r))
            .collect())
    }
}

impl<S: DataStore + ?Sized> DataStore for Box<S> {
    fn insert(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        (**self).insert(draft)
    }

    fn save(&mut self, recipe: &Recipe) -> Result<()> {
        (**self).save(recipe)
    }

    fn get(&self, id: RecipeId) -> Result<Recipe> {
        (**self).get(id)
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        (**self).list()
    }

    fn delete(&mut self, id: RecipeId) -> Result<()> {
        (**self).delete(id)
    }

    fn exists(&self, id: RecipeId) -> Result<bool> {
        (**self).exists(id)
    }

    fn scan(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>> {
        (**self).scan(predicate)
    }
}
