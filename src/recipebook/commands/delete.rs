use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::DataStore;
use tracing::{info, warn};

pub fn run<S: DataStore>(store: &mut S, ids: &[RecipeId]) -> Result<CmdResult> {
    // Resolve every id before the first delete so an unknown id changes nothing.
    let recipes = ids
        .iter()
        .map(|&id| store.get(id).inspect_err(|e| warn!("Cannot delete: {}", e)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for recipe in recipes {
        let id = recipe.id;
        info!("Deleting recipe with id: {}", id);
        store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Recipe deleted (#{}): {}",
            id, recipe.name
        )));
        result.affected_recipes.push(recipe);
    }

    Ok(result)
}
