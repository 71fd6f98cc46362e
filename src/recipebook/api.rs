//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! recipebook operation, whichever UI drives it.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It holds no business logic and performs no terminal I/O.
//!
//! `RecipeApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RecipeApi<Box<dyn DataStore>>`, backend picked from config
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::filter::RecipeCriteria;
use crate::model::{RecipeDraft, RecipeId};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct RecipeApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> RecipeApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_recipe(&mut self, draft: RecipeDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn view_recipes(&self, ids: &[RecipeId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_recipe(
        &mut self,
        id: RecipeId,
        draft: RecipeDraft,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete_recipes(&mut self, ids: &[RecipeId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn filter_recipes(&self, criteria: &RecipeCriteria) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, criteria)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{gratin, salmon_bake, stir_fry};
    use crate::store::memory::InMemoryStore;

    fn api() -> RecipeApi<InMemoryStore> {
        RecipeApi::new(InMemoryStore::new(), PathBuf::from("/unused"))
    }

    #[test]
    fn create_then_view() {
        let mut api = api();
        api.create_recipe(gratin()).unwrap();
        let result = api.view_recipes(&[RecipeId(1)]).unwrap();
        assert_eq!(result.listed_recipes[0].name, "Potato Gratin");
    }

    #[test]
    fn filter_dispatches_to_search() {
        let mut api = api();
        api.create_recipe(gratin()).unwrap();
        api.create_recipe(salmon_bake()).unwrap();
        api.create_recipe(stir_fry()).unwrap();

        let result = api
            .filter_recipes(&RecipeCriteria::new().vegetarian(false).servings(4))
            .unwrap();
        assert_eq!(result.listed_recipes.len(), 1);
        assert_eq!(result.listed_recipes[0].name, "Chicken Stir Fry");
    }

    #[test]
    fn update_and_delete_dispatch() {
        let mut api = api();
        api.create_recipe(gratin()).unwrap();
        api.update_recipe(RecipeId(1), stir_fry()).unwrap();
        assert_eq!(
            api.list_recipes().unwrap().listed_recipes[0].name,
            "Chicken Stir Fry"
        );

        api.delete_recipes(&[RecipeId(1)]).unwrap();
        assert!(api.list_recipes().unwrap().listed_recipes.is_empty());
    }

    #[test]
    fn works_through_a_boxed_store() {
        let store: Box<dyn DataStore> = Box::new(InMemoryStore::new());
        let mut api = RecipeApi::new(store, PathBuf::from("/unused"));
        api.create_recipe(salmon_bake()).unwrap();
        let result = api
            .filter_recipes(&RecipeCriteria::new().including(["SALMON"]))
            .unwrap();
        assert_eq!(result.listed_recipes.len(), 1);
    }
}
