use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Optional filters for a recipe query.
///
/// Every field is independent. An absent option, an empty set or an empty
/// search string imposes no constraint, so `RecipeCriteria::default()`
/// matches the whole catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCriteria {
    pub vegetarian: Option<bool>,
    pub servings: Option<u32>,
    #[serde(default)]
    pub include_ingredients: BTreeSet<String>,
    #[serde(default)]
    pub exclude_ingredients: BTreeSet<String>,
    pub search_text: Option<String>,
}

impl RecipeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = Some(vegetarian);
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn including<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.include_ingredients.extend(terms(ingredients));
        self
    }

    pub fn excluding<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.exclude_ingredients.extend(terms(ingredients));
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// True when no supplied field would constrain the result.
    pub fn is_empty(&self) -> bool {
        self.vegetarian.is_none()
            && self.servings.is_none()
            && self.include_ingredients.is_empty()
            && self.exclude_ingredients.is_empty()
            && self.search_text.as_deref().map_or(true, str::is_empty)
    }
}

/// Trimmed ingredient terms; blank ones are dropped.
fn terms<I, T>(ingredients: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    ingredients.into_iter().filter_map(|term| {
        let term = term.into();
        let trimmed = term.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
