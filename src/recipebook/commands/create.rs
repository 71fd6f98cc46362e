use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeDraft;
use crate::store::DataStore;
use tracing::{debug, info};

pub fn run<S: DataStore>(store: &mut S, draft: RecipeDraft) -> Result<CmdResult> {
    info!("Creating new recipe with name: {}", draft.name);
    debug!("Recipe draft: {:?}", draft);
    draft.validate()?;

    let recipe = store.insert(draft)?;
    info!("Created recipe with id: {}", recipe.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe created (#{}): {}",
        recipe.id, recipe.name
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::model::RecipeId;
    use crate::store::memory::fixtures::gratin;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_recipe_with_assigned_id() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, gratin()).unwrap();

        assert_eq!(result.affected_recipes.len(), 1);
        assert_eq!(result.affected_recipes[0].id, RecipeId(1));
        assert_eq!(result.messages[0].content, "Recipe created (#1): Potato Gratin");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn invalid_draft_is_not_stored() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, RecipeDraft::new("", true, 0, "Bake")).unwrap_err();

        assert!(matches!(err, RecipeError::Validation(ref e) if e.len() == 2));
        assert!(store.list().unwrap().is_empty());
    }
}
