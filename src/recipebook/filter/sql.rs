//! Translation of a [`RecipePredicate`] into a SQL `WHERE` clause.
//!
//! The rendered clause expects the recipes table aliased as `r` and the
//! ingredient table `recipe_ingredients(recipe_id, ingredient)`. Ingredient
//! clauses become correlated `EXISTS` / `NOT EXISTS` sub-queries, which never
//! multiply the outer row, so the query needs no `DISTINCT`.
//!
//! Values are always bound as numbered parameters (`?1`, `?2`, ...). The
//! `contains_ci(haystack, needle)` function must be registered on the
//! connection; it folds the haystack the same way [`super::fold`] does.

use super::predicate::{Clause, RecipePredicate};

/// Name of the scalar SQL function the rendered clause calls.
pub const CONTAINS_FN: &str = "contains_ci";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFilter {
    pub where_clause: String,
    pub params: Vec<SqlParam>,
}

pub fn to_sql(predicate: &RecipePredicate) -> SqlFilter {
    if predicate.is_empty() {
        return SqlFilter {
            where_clause: "1 = 1".to_string(),
            params: Vec::new(),
        };
    }

    let mut params = Vec::with_capacity(predicate.clauses().len());
    let mut parts = Vec::with_capacity(predicate.clauses().len());

    for clause in predicate.clauses() {
        let n = params.len() + 1;
        let (param, part) = match clause {
            Clause::VegetarianIs(v) => (SqlParam::Bool(*v), format!("r.vegetarian = ?{}", n)),
            Clause::ServingsIs(s) => (
                SqlParam::Int(i64::from(*s)),
                format!("r.servings = ?{}", n),
            ),
            Clause::HasIngredient(term) => (
                SqlParam::Text(term.clone()),
                format!("EXISTS ({})", ingredient_subquery(n)),
            ),
            Clause::LacksIngredient(term) => (
                SqlParam::Text(term.clone()),
                format!("NOT EXISTS ({})", ingredient_subquery(n)),
            ),
            Clause::InstructionsContain(text) => (
                SqlParam::Text(text.clone()),
                format!("{}(r.instructions, ?{})", CONTAINS_FN, n),
            ),
        };
        params.push(param);
        parts.push(part);
    }

    SqlFilter {
        where_clause: parts.join(" AND "),
        params,
    }
}

fn ingredient_subquery(param: usize) -> String {
    format!(
        "SELECT 1 FROM recipe_ingredients i WHERE i.recipe_id = r.id AND {}(i.ingredient, ?{})",
        CONTAINS_FN, param
    )
}
