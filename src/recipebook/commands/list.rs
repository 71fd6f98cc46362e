use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    info!("Fetching all recipes");
    let recipes = store.list()?;
    info!("Retrieved {} recipes", recipes.len());
    Ok(CmdResult::default().with_listed_recipes(recipes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_every_recipe_by_id() {
        let fixture = StoreFixture::new().with_kitchen();
        let result = run(&fixture.store).unwrap();
        let ids: Vec<_> = result.listed_recipes.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed_recipes.is_empty());
    }
}
