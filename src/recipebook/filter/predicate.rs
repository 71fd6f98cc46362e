use crate::model::Recipe;
use std::fmt;

/// Case folding shared by every backend. SQLite gets the same function
/// registered as `contains_ci`, so in-memory and SQL evaluation agree.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// `haystack` folded contains `folded_needle` (which must already be folded).
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}

/// One conjunct of a compiled predicate.
///
/// Ingredient terms and search text are stored already folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    VegetarianIs(bool),
    ServingsIs(u32),
    /// At least one ingredient contains the term.
    HasIngredient(String),
    /// No ingredient contains the term.
    LacksIngredient(String),
    InstructionsContain(String),
}

impl Clause {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Clause::VegetarianIs(v) => recipe.vegetarian == *v,
            Clause::ServingsIs(n) => recipe.servings == *n,
            Clause::HasIngredient(term) => recipe
                .ingredients
                .iter()
                .any(|i| contains_folded(i, term)),
            Clause::LacksIngredient(term) => !recipe
                .ingredients
                .iter()
                .any(|i| contains_folded(i, term)),
            Clause::InstructionsContain(text) => contains_folded(&recipe.instructions, text),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::VegetarianIs(v) => write!(f, "vegetarian = {}", v),
            Clause::ServingsIs(n) => write!(f, "servings = {}", n),
            Clause::HasIngredient(t) => write!(f, "has ingredient ~ {:?}", t),
            Clause::LacksIngredient(t) => write!(f, "lacks ingredient ~ {:?}", t),
            Clause::InstructionsContain(t) => write!(f, "instructions ~ {:?}", t),
        }
    }
}

/// A conjunction of clauses. Matches everything when there are none.
///
/// Each clause is evaluated against a whole recipe, so a recipe is either in
/// or out of the result: several ingredients satisfying the same term never
/// yield extra rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePredicate {
    clauses: Vec<Clause>,
}

impl RecipePredicate {
    /// The predicate that accepts every recipe.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.clauses.iter().all(|c| c.matches(recipe))
    }
}

impl fmt::Display for RecipePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "<all>");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeDraft, RecipeId};

    fn recipe(ingredients: &[&str], instructions: &str) -> Recipe {
        Recipe::from_draft(
            RecipeId(1),
            RecipeDraft::new("Test", true, 2, instructions).with_ingredients(ingredients),
        )
    }

    #[test]
    fn has_ingredient_is_substring_and_case_insensitive() {
        let r = recipe(&["POTATOES", "onions"], "Bake");
        assert!(Clause::HasIngredient("potato".into()).matches(&r));
        assert!(Clause::HasIngredient("potatoes".into()).matches(&r));
        assert!(!Clause::HasIngredient("leek".into()).matches(&r));
    }

    #[test]
    fn lacks_ingredient_looks_at_every_ingredient() {
        let r = recipe(&["salmon", "potatoes"], "Bake");
        assert!(!Clause::LacksIngredient("salmon".into()).matches(&r));
        assert!(Clause::LacksIngredient("chicken".into()).matches(&r));
    }

    #[test]
    fn ingredient_clauses_on_empty_set() {
        let r = recipe(&[], "Bake");
        assert!(!Clause::HasIngredient("salt".into()).matches(&r));
        assert!(Clause::LacksIngredient("salt".into()).matches(&r));
    }

    #[test]
    fn instructions_match_ignores_case() {
        let r = recipe(&[], "Bake in the OVEN for 20 minutes");
        assert!(Clause::InstructionsContain("oven".into()).matches(&r));
        assert!(!Clause::InstructionsContain("grill".into()).matches(&r));
    }

    #[test]
    fn folding_handles_non_ascii() {
        assert!(contains_folded("CRÈME FRAÎCHE", &fold("crème")));
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let pred = RecipePredicate::all();
        assert!(pred.is_empty());
        assert!(pred.matches(&recipe(&[], "anything")));
    }

    #[test]
    fn display_joins_clauses() {
        let pred = RecipePredicate::all()
            .and(Clause::VegetarianIs(true))
            .and(Clause::HasIngredient("potato".into()));
        assert_eq!(
            pred.to_string(),
            "vegetarian = true AND has ingredient ~ \"potato\""
        );
        assert_eq!(RecipePredicate::all().to_string(), "<all>");
    }
}
