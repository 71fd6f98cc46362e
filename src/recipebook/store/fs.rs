use super::DataStore;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILENAME: &str = "recipes.json";

/// On-disk layout of `recipes.json`.
#[derive(Debug, Serialize, Deserialize)]
struct RecipeFile {
    next_id: u64,
    recipes: Vec<Recipe>,
}

impl Default for RecipeFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            recipes: Vec::new(),
        }
    }
}

/// JSON-file storage. The whole document is read for every operation and
/// rewritten for every mutation.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<RecipeFile> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(RecipeFile::default());
        }
        let content = fs::read_to_string(&data_file)?;
        let mut file: RecipeFile = serde_json::from_str(&content)?;
        file.recipes.sort_by_key(|r| r.id);
        Ok(file)
    }

    fn write(&self, file: &RecipeFile) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(file)?;

        // Readers never see a partially written document.
        let tmp = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.data_file())?;
        debug!("Wrote {} recipes to {}", file.recipes.len(), self.data_file().display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn insert(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        let mut file = self.load()?;
        let id = RecipeId(file.next_id);
        file.next_id += 1;

        let recipe = Recipe::from_draft(id, draft);
        file.recipes.push(recipe.clone());
        self.write(&file)?;
        Ok(recipe)
    }

    fn save(&mut self, recipe: &Recipe) -> Result<()> {
        let mut file = self.load()?;
        let slot = file
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(RecipeError::RecipeNotFound(recipe.id))?;
        *slot = recipe.clone();
        self.write(&file)
    }

    fn get(&self, id: RecipeId) -> Result<Recipe> {
        self.load()?
            .recipes
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(RecipeError::RecipeNotFound(id))
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        Ok(self.load()?.recipes)
    }

    fn delete(&mut self, id: RecipeId) -> Result<()> {
        let mut file = self.load()?;
        let before = file.recipes.len();
        file.recipes.retain(|r| r.id != id);
        if file.recipes.len() == before {
            return Err(RecipeError::RecipeNotFound(id));
        }
        self.write(&file)
    }
}
