use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecipeDraft, RecipeId};
use crate::store::DataStore;
use tracing::{debug, info, warn};

/// Replaces every field of an existing recipe.
pub fn run<S: DataStore>(store: &mut S, id: RecipeId, draft: RecipeDraft) -> Result<CmdResult> {
    info!("Updating recipe with id: {}", id);
    debug!("Update draft: {:?}", draft);
    draft.validate()?;

    let mut recipe = store.get(id).inspect_err(|e| warn!("{}", e))?;
    recipe.apply(draft);
    store.save(&recipe)?;
    info!("Updated recipe with id: {}", id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated (#{}): {}",
        recipe.id, recipe.name
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}
