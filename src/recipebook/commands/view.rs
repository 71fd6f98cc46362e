use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::DataStore;
use tracing::{info, warn};

pub fn run<S: DataStore>(store: &S, ids: &[RecipeId]) -> Result<CmdResult> {
    let mut recipes = Vec::with_capacity(ids.len());
    for &id in ids {
        info!("Fetching recipe with id: {}", id);
        let recipe = store.get(id).inspect_err(|e| warn!("{}", e))?;
        recipes.push(recipe);
    }
    Ok(CmdResult::default().with_listed_recipes(recipes))
}
