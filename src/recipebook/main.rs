use clap::Parser;
use directories::ProjectDirs;
use recipebook::api::{ConfigAction, RecipeApi};
use recipebook::config::{Backend, RecipeConfig};
use recipebook::error::{RecipeError, Result};
use recipebook::filter::RecipeCriteria;
use recipebook::model::{RecipeDraft, RecipeId};
use recipebook::store::fs::FileStore;
use recipebook::store::sqlite::SqliteStore;
use recipebook::store::DataStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands, RecipeFields};
use print::{print_full_recipes, print_messages, print_recipes};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

struct AppContext {
    api: RecipeApi<Box<dyn DataStore>>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(cli.data_dir)?;

    match cli.command {
        Some(Commands::Create(fields)) => handle_create(&mut ctx, fields),
        Some(Commands::List {
            vegetarian,
            servings,
            include,
            exclude,
            search,
        }) => {
            let criteria = RecipeCriteria {
                vegetarian,
                servings,
                search_text: search,
                ..RecipeCriteria::new()
            }
            .including(include)
            .excluding(exclude);
            handle_list(&ctx, criteria)
        }
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Update { id, fields }) => handle_update(&mut ctx, id, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, RecipeCriteria::new()),
    }
}

fn init_context(data_dir: Option<PathBuf>) -> Result<AppContext> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("org", "recipebook", "recipebook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| RecipeError::Api("Could not determine data directory".into()))?,
    };

    let config = RecipeConfig::load(&data_dir)?;
    debug!(
        "Using {} backend in {}",
        config.backend,
        data_dir.display()
    );

    let store: Box<dyn DataStore> = match config.backend {
        Backend::Json => Box::new(FileStore::new(&data_dir)),
        Backend::Sqlite => Box::new(SqliteStore::open(data_dir.join("recipes.db"))?),
    };

    Ok(AppContext {
        api: RecipeApi::new(store, data_dir),
    })
}

fn draft_from(fields: RecipeFields) -> RecipeDraft {
    RecipeDraft::new(
        fields.name,
        fields.vegetarian,
        fields.servings,
        fields.instructions,
    )
    .with_ingredients(fields.ingredients)
}

fn handle_create(ctx: &mut AppContext, fields: RecipeFields) -> Result<()> {
    let result = ctx.api.create_recipe(draft_from(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, criteria: RecipeCriteria) -> Result<()> {
    let result = ctx.api.filter_recipes(&criteria)?;
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let parsed = parse_ids(&ids)?;
    let result = ctx.api.view_recipes(&parsed)?;
    print_full_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: String, fields: RecipeFields) -> Result<()> {
    let id: RecipeId = id.parse()?;
    let result = ctx.api.update_recipe(id, draft_from(fields))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let parsed = parse_ids(&ids)?;
    let result = ctx.api.delete_recipes(&parsed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in RecipeConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_ids(strs: &[String]) -> Result<Vec<RecipeId>> {
    strs.iter().map(|s| s.parse()).collect()
}
