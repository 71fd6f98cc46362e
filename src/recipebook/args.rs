use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebook")]
#[command(about = "Keep your favourite recipes and find the right one", long_about = None)]
#[command(version, long_version = env!("RECIPEBOOK_LONG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes and config
    #[arg(long, global = true, env = "RECIPEBOOK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Fields shared by create and update. Update replaces all of them.
#[derive(Args, Debug)]
pub struct RecipeFields {
    /// Name of the recipe
    pub name: String,

    /// Number of servings
    #[arg(short, long)]
    pub servings: u32,

    /// Mark the recipe as vegetarian
    #[arg(long)]
    pub vegetarian: bool,

    /// Cooking instructions
    #[arg(long)]
    pub instructions: String,

    /// Ingredients (repeat the flag or separate with commas)
    #[arg(short, long = "ingredient", value_delimiter = ',')]
    pub ingredients: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new recipe
    #[command(alias = "n")]
    Create(RecipeFields),

    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only vegetarian (true) or only non-vegetarian (false) recipes
        #[arg(long)]
        vegetarian: Option<bool>,

        /// Exact number of servings
        #[arg(long)]
        servings: Option<u32>,

        /// Ingredients that must all be present (comma-separated)
        #[arg(long, value_delimiter = ',')]
        include: Vec<String>,

        /// Ingredients that must not be present (comma-separated)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Text to search for in the instructions
        #[arg(long)]
        search: Option<String>,
    },

    /// View one or more recipes
    #[command(alias = "v")]
    View {
        /// Recipe ids (e.g. 1 #3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Replace an existing recipe
    #[command(alias = "u")]
    Update {
        /// Recipe id
        id: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Recipe ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., backend)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
