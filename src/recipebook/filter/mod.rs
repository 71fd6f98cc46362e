//! # Filter Compiler
//!
//! Turns a [`RecipeCriteria`] into a [`RecipePredicate`]: the conjunction of
//! one clause per supplied criterion. Absent criteria contribute nothing.
//!
//! ## Multi-valued fields
//!
//! `ingredients` is a set, so include/exclude filters are quantified over it
//! rather than joined against it:
//!
//! - include term `t`: *some* ingredient of this recipe contains `t`
//! - exclude term `t`: *no* ingredient of this recipe contains `t`
//!
//! Each term of the include set becomes its own clause, so
//! `{"potato", "onion"}` requires both. The predicate is evaluated once per
//! recipe, which means a recipe appears at most once in any result no matter
//! how many of its ingredients satisfy a term.
//!
//! ## Backends
//!
//! [`RecipePredicate::matches`] evaluates in memory. [`sql::to_sql`] renders
//! the same predicate as correlated `EXISTS` / `NOT EXISTS` sub-queries for
//! the SQLite store. Both use [`fold`] for case-insensitive matching.
//!
//! Compilation is pure: no I/O, no shared state, no failure modes.

pub mod criteria;
pub mod predicate;
pub mod sql;

pub use criteria::RecipeCriteria;
pub use predicate::{contains_folded, fold, Clause, RecipePredicate};

pub fn compile(criteria: &RecipeCriteria) -> RecipePredicate {
    let mut predicate = RecipePredicate::all();

    if let Some(vegetarian) = criteria.vegetarian {
        predicate = predicate.and(Clause::VegetarianIs(vegetarian));
    }

    if let Some(servings) = criteria.servings {
        predicate = predicate.and(Clause::ServingsIs(servings));
    }

    for term in &criteria.include_ingredients {
        predicate = predicate.and(Clause::HasIngredient(fold(term)));
    }

    for term in &criteria.exclude_ingredients {
        predicate = predicate.and(Clause::LacksIngredient(fold(term)));
    }

    if let Some(text) = criteria.search_text.as_deref().filter(|t| !t.is_empty()) {
        predicate = predicate.and(Clause::InstructionsContain(fold(text)));
    }

    predicate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Recipe, RecipeDraft, RecipeId};

    fn recipe(
        id: u64,
        vegetarian: bool,
        servings: u32,
        ingredients: &[&str],
        text: &str,
    ) -> Recipe {
        Recipe::from_draft(
            RecipeId(id),
            RecipeDraft::new(format!("Recipe {}", id), vegetarian, servings, text)
                .with_ingredients(ingredients),
        )
    }

    fn catalogue() -> Vec<Recipe> {
        vec![
            recipe(1, true, 4, &["potatoes", "onions", "cream"], "bake in oven"),
            recipe(2, false, 2, &["salmon", "potatoes"], "bake in oven"),
            recipe(3, false, 4, &["chicken", "rice"], "stir fry"),
        ]
    }

    fn ids(criteria: &RecipeCriteria) -> Vec<u64> {
        let predicate = compile(criteria);
        catalogue()
            .into_iter()
            .filter(|r| predicate.matches(r))
            .map(|r| r.id.0)
            .collect()
    }

    #[test]
    fn empty_criteria_compiles_to_match_all() {
        let predicate = compile(&RecipeCriteria::new());
        assert!(predicate.is_empty());
        assert_eq!(ids(&RecipeCriteria::new()), vec![1, 2, 3]);
    }

    #[test]
    fn empty_collections_and_search_impose_nothing() {
        let criteria = RecipeCriteria::new()
            .including(Vec::<String>::new())
            .excluding(Vec::<String>::new())
            .search("");
        assert!(compile(&criteria).is_empty());
    }

    #[test]
    fn scalar_filters() {
        assert_eq!(ids(&RecipeCriteria::new().vegetarian(true)), vec![1]);
        assert_eq!(ids(&RecipeCriteria::new().vegetarian(false)), vec![2, 3]);
        assert_eq!(ids(&RecipeCriteria::new().servings(4)), vec![1, 3]);
        assert_eq!(ids(&RecipeCriteria::new().servings(7)), Vec::<u64>::new());
    }

    #[test]
    fn include_requires_every_term() {
        assert_eq!(ids(&RecipeCriteria::new().including(["potato"])), vec![1, 2]);
        assert_eq!(
            ids(&RecipeCriteria::new().including(["potato", "onion"])),
            vec![1]
        );
        assert_eq!(
            ids(&RecipeCriteria::new().including(["potato", "rice"])),
            Vec::<u64>::new()
        );
    }

    #[test]
    fn exclude_rejects_any_matching_ingredient() {
        assert_eq!(ids(&RecipeCriteria::new().excluding(["salmon"])), vec![1, 3]);
        assert_eq!(
            ids(&RecipeCriteria::new().excluding(["salmon", "rice"])),
            vec![1]
        );
    }

    #[test]
    fn include_and_search_combine_as_conjunction() {
        let criteria = RecipeCriteria::new().including(["potato"]).search("oven");
        assert_eq!(ids(&criteria), vec![1, 2]);

        let criteria = criteria.excluding(["salmon"]);
        assert_eq!(ids(&criteria), vec![1]);
    }

    #[test]
    fn terms_are_folded_at_compile_time() {
        let predicate = compile(&RecipeCriteria::new().including(["POTATOES"]).search("OVEN"));
        assert_eq!(
            predicate.clauses(),
            &[
                Clause::HasIngredient("potatoes".into()),
                Clause::InstructionsContain("oven".into()),
            ]
        );
        assert_eq!(ids(&RecipeCriteria::new().including(["POTATOES"])), vec![1, 2]);
    }

    #[test]
    fn clause_order_follows_criteria_fields() {
        let predicate = compile(
            &RecipeCriteria::new()
                .search("fry")
                .excluding(["nuts"])
                .including(["rice"])
                .servings(4)
                .vegetarian(false),
        );
        assert_eq!(
            predicate.to_string(),
            "vegetarian = false AND servings = 4 AND has ingredient ~ \"rice\" \
             AND lacks ingredient ~ \"nuts\" AND instructions ~ \"fry\""
        );
    }
}
