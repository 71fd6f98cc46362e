//! SQLite-backed recipe store.
//!
//! Ingredients live in their own table, one row per ingredient. Filtering is
//! pushed down to SQLite through [`crate::filter::sql`], so a scan never
//! loads recipes the predicate rejects.

use super::DataStore;
use crate::error::{RecipeError, Result};
use crate::filter::sql::{to_sql, SqlParam, CONTAINS_FN};
use crate::filter::{contains_folded, fold, RecipePredicate};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::{params, params_from_iter, Connection, Row, ToSql};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

pub const SCHEMA_VERSION: i32 = 1;

const RECIPE_COLUMNS: &str =
    "r.id, r.name, r.vegetarian, r.servings, r.instructions, r.created_at, r.updated_at";

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self {
            SqlParam::Bool(b) => Value::Integer(i64::from(*b)),
            SqlParam::Int(i) => Value::Integer(*i),
            SqlParam::Text(s) => Value::Text(s.clone()),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!("Opening recipe database at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        register_functions(&conn)?;
        migrate(&conn)?;
        Ok(Self { conn })
    }

    /// Recipes and their ingredients come from one statement, so a scan reads
    /// a single snapshot even while another connection writes.
    fn query_recipes(&self, where_clause: &str, params: &[SqlParam]) -> Result<Vec<Recipe>> {
        let sql = format!(
            "SELECT {}, ri.ingredient FROM recipes r
             LEFT JOIN recipe_ingredients ri ON ri.recipe_id = r.id
             WHERE {} ORDER BY r.id, ri.ingredient",
            RECIPE_COLUMNS, where_clause
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;

        let mut recipes: Vec<Recipe> = Vec::new();
        while let Some(row) = rows.next()? {
            let id = RecipeId(row.get::<_, i64>(0)? as u64);
            if recipes.last().map(|r| r.id) != Some(id) {
                recipes.push(row_to_recipe(row)?);
            }
            if let Some(ingredient) = row.get::<_, Option<String>>(7)? {
                if let Some(recipe) = recipes.last_mut() {
                    recipe.ingredients.insert(ingredient);
                }
            }
        }
        Ok(recipes)
    }
}

/// `contains_ci(haystack, needle)`: case-insensitive substring test using the
/// same folding as in-memory evaluation.
fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        CONTAINS_FN,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack = ctx.get::<String>(0)?;
            let needle = ctx.get::<String>(1)?;
            Ok(contains_folded(&haystack, &fold(&needle)))
        },
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn migrate(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;
    if current > SCHEMA_VERSION {
        return Err(RecipeError::Store(format!(
            "recipe database schema v{} is newer than supported v{}",
            current, SCHEMA_VERSION
        )));
    }
    if current == SCHEMA_VERSION {
        return Ok(());
    }

    info!("Migrating recipe schema from v{} to v{}", current, SCHEMA_VERSION);
    conn.execute_batch(
        "BEGIN;
        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            vegetarian INTEGER NOT NULL,
            servings INTEGER NOT NULL CHECK (servings >= 1),
            instructions TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS recipe_ingredients (
            recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
            ingredient TEXT NOT NULL,
            PRIMARY KEY (recipe_id, ingredient)
        );
        INSERT INTO schema_version (version) VALUES (1);
        COMMIT;",
    )?;
    Ok(())
}

fn row_to_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let id: i64 = row.get(0)?;
    Ok(Recipe {
        id: RecipeId(id as u64),
        name: row.get(1)?,
        vegetarian: row.get(2)?,
        servings: row.get(3)?,
        instructions: row.get(4)?,
        ingredients: BTreeSet::new(),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn insert_ingredients(
    conn: &Connection,
    id: RecipeId,
    ingredients: &BTreeSet<String>,
) -> rusqlite::Result<()> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO recipe_ingredients (recipe_id, ingredient) VALUES (?1, ?2)")?;
    for ingredient in ingredients {
        stmt.execute(params![id.0 as i64, ingredient])?;
    }
    Ok(())
}

impl DataStore for SqliteStore {
    fn insert(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        let mut recipe = Recipe::from_draft(RecipeId(0), draft);

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO recipes (name, vegetarian, servings, instructions, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                recipe.name,
                recipe.vegetarian,
                recipe.servings,
                recipe.instructions,
                recipe.created_at,
                recipe.updated_at
            ],
        )?;
        recipe.id = RecipeId(tx.last_insert_rowid() as u64);
        insert_ingredients(&tx, recipe.id, &recipe.ingredients)?;
        tx.commit()?;

        Ok(recipe)
    }

    fn save(&mut self, recipe: &Recipe) -> Result<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE recipes
             SET name = ?1, vegetarian = ?2, servings = ?3, instructions = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                recipe.name,
                recipe.vegetarian,
                recipe.servings,
                recipe.instructions,
                recipe.updated_at,
                recipe.id.0 as i64
            ],
        )?;
        if changed == 0 {
            return Err(RecipeError::RecipeNotFound(recipe.id));
        }

        tx.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [recipe.id.0 as i64],
        )?;
        insert_ingredients(&tx, recipe.id, &recipe.ingredients)?;
        tx.commit()?;
        Ok(())
    }

    fn get(&self, id: RecipeId) -> Result<Recipe> {
        self.query_recipes("r.id = ?1", &[SqlParam::Int(id.0 as i64)])?
            .into_iter()
            .next()
            .ok_or(RecipeError::RecipeNotFound(id))
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        self.query_recipes("1 = 1", &[])
    }

    fn delete(&mut self, id: RecipeId) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [id.0 as i64],
        )?;
        let changed = tx.execute("DELETE FROM recipes WHERE id = ?1", [id.0 as i64])?;
        if changed == 0 {
            return Err(RecipeError::RecipeNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    fn scan(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>> {
        let filter = to_sql(predicate);
        debug!(
            "Scanning recipes WHERE {} ({} params)",
            filter.where_clause,
            filter.params.len()
        );
        self.query_recipes(&filter.where_clause, &filter.params)
    }
}
