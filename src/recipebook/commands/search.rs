use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{compile, fold, RecipeCriteria};
use crate::store::DataStore;
use tracing::{debug, info};

/// Recipes matching every supplied criterion. Empty criteria lists everything.
pub fn run<S: DataStore>(store: &S, criteria: &RecipeCriteria) -> Result<CmdResult> {
    if criteria.is_empty() {
        return list::run(store);
    }

    info!("Filtering recipes with criteria: {:?}", criteria);
    let predicate = compile(criteria);
    debug!("Compiled predicate: {}", predicate);

    let recipes = store.scan(&predicate)?;
    info!("Found {} recipes matching filter criteria", recipes.len());

    let mut result = CmdResult::default();
    for term in criteria
        .include_ingredients
        .iter()
        .filter(|term| criteria.exclude_ingredients.iter().any(|ex| fold(ex) == fold(term)))
    {
        result.add_message(CmdMessage::warning(format!(
            "Ingredient '{}' is both included and excluded",
            term
        )));
    }
    result.add_message(CmdMessage::info(match recipes.len() {
        1 => "1 recipe matches".to_string(),
        n => format!("{} recipes match", n),
    }));
    Ok(result.with_listed_recipes(recipes))
}
