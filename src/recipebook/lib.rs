//! # Recipebook Architecture
//!
//! Recipebook is a **UI-agnostic recipe catalogue library** with a thin CLI
//! client. The library never touches stdout, stderr or exit codes; the same
//! core could sit behind a REST API just as well.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over DataStore        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, CRUD, filtering; returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────┐
//! │  Filter Compiler (filter/)   │──▶│  Storage Layer (store/)  │
//! │  RecipeCriteria → Predicate  │   │  memory / json / sqlite  │
//! └──────────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! ## Filtering
//!
//! A [`filter::RecipeCriteria`] bundles optional filters: vegetarian flag,
//! servings, ingredients to include, ingredients to exclude and text to find
//! in the instructions. [`filter::compile`] ANDs the supplied ones into a
//! [`filter::RecipePredicate`], and [`store::DataStore::scan`] returns every
//! recipe it accepts, exactly once. See the [`filter`] module docs for the
//! ingredient semantics.
//!
//! ## Testing Strategy
//!
//! 1. **Filter** and **commands**: unit tests against `InMemoryStore`
//!    fixtures. This is where most tests live.
//! 2. **Stores**: each backend tested on its own, the SQLite one also
//!    checked against in-memory evaluation.
//! 3. **CLI**: `tests/` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Criteria, predicate compilation, SQL translation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Recipe`, `RecipeDraft`, `RecipeId`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
