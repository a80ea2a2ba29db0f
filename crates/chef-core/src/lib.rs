//! Chef Core - planning and generation of React project scaffolds
//!
//! Given an app name, a project variant and a handful of answers, this library
//! decides which directories, files and packages a new React project gets, and
//! then carries that plan out.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure core** - [`variant`], [`config`], [`templates`] and [`planner`]
//!   resolve a recipe and compute a [`Plan`] without touching the disk
//! - **Layer 2: Orchestration** - [`executor`], [`installer`] and [`runtime`]
//!   write the tree, call npm and rewrite the manifest
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use chef_core::{planner, Answers, Feature, ProjectVariant, VariantRegistry};
//!
//! let recipe = VariantRegistry::recipe(ProjectVariant::Slim);
//! let config = recipe.resolver.resolve()?;
//! let answers = Answers::new(3000).with(Feature::Eslint, true);
//! let plan = planner::plan(&config, recipe.templates, "shop", &answers)?;
//! for action in &plan.actions {
//!     println!("{}", action.target().display());
//! }
//! # Ok::<(), chef_core::ConfigurationError>(())
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod installer;
pub mod planner;
pub mod runtime;
pub mod templates;
pub mod variant;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ConfigResolver, Feature, FeatureFlags, ProjectConfig};
pub use error::{ChefError, ConfigurationError, InstallMode};
pub use planner::{plan, Action, Answers, DependencyRequest, ManifestRewrite, Plan};
pub use templates::TemplateProvider;
pub use variant::{ProjectVariant, Recipe, VariantRegistry};

#[cfg(feature = "tui")]
pub use tui::run;
