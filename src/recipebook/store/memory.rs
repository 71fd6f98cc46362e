use super::DataStore;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    recipes: BTreeMap<RecipeId, Recipe>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            recipes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        let id = RecipeId(self.next_id);
        self.next_id += 1;
        let recipe = Recipe::from_draft(id, draft);
        self.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    fn save(&mut self, recipe: &Recipe) -> Result<()> {
        match self.recipes.get_mut(&recipe.id) {
            Some(slot) => {
                *slot = recipe.clone();
                Ok(())
            }
            None => Err(RecipeError::RecipeNotFound(recipe.id)),
        }
    }

    fn get(&self, id: RecipeId) -> Result<Recipe> {
        self.recipes
            .get(&id)
            .cloned()
            .ok_or(RecipeError::RecipeNotFound(id))
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.values().cloned().collect())
    }

    fn delete(&mut self, id: RecipeId) -> Result<()> {
        if self.recipes.remove(&id).is_none() {
            return Err(RecipeError::RecipeNotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipe(mut self, draft: RecipeDraft) -> Self {
            self.store.insert(draft).unwrap();
            self
        }

        /// Potato gratin (#1), salmon bake (#2), chicken stir fry (#3).
        pub fn with_kitchen(self) -> Self {
            self.with_recipe(gratin()).with_recipe(salmon_bake()).with_recipe(stir_fry())
        }
    }

    pub fn gratin() -> RecipeDraft {
        RecipeDraft::new("Potato Gratin", true, 4, "Slice, layer and bake in oven")
            .with_ingredients(["potatoes", "onions", "cream"])
    }

    pub fn salmon_bake() -> RecipeDraft {
        RecipeDraft::new("Salmon Bake", false, 2, "Season and bake in oven")
            .with_ingredients(["salmon", "potatoes"])
    }

    pub fn stir_fry() -> RecipeDraft {
        RecipeDraft::new("Chicken Stir Fry", false, 4, "Stir fry over high heat")
            .with_ingredients(["chicken", "rice"])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::filter::{compile, RecipeCriteria};

    #[test]
    fn ids_start_at_one_and_are_never_reused() {
        let mut store = InMemoryStore::new();
        let a = store.insert(gratin()).unwrap();
        let b = store.insert(stir_fry()).unwrap();
        assert_eq!((a.id, b.id), (RecipeId(1), RecipeId(2)));

        store.delete(b.id).unwrap();
        let c = store.insert(salmon_bake()).unwrap();
        assert_eq!(c.id, RecipeId(3));
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.get(RecipeId(9)),
            Err(RecipeError::RecipeNotFound(RecipeId(9)))
        ));
        assert!(matches!(
            store.delete(RecipeId(9)),
            Err(RecipeError::RecipeNotFound(_))
        ));
        assert!(!store.exists(RecipeId(9)).unwrap());
    }

    #[test]
    fn save_requires_existing_recipe() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::from_draft(RecipeId(5), gratin());
        assert!(matches!(
            store.save(&recipe),
            Err(RecipeError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn scan_uses_predicate() {
        let fixture = StoreFixture::new().with_kitchen();
        let found = fixture
            .store
            .scan(&compile(&RecipeCriteria::new().excluding(["salmon"])))
            .unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Potato Gratin", "Chicken Stir Fry"]);
    }
}
