//! Error types for recipe resolution, planning and project generation

use std::path::PathBuf;
use thiserror::Error;

/// A defect in the recipe definitions themselves.
///
/// These never originate from user input: the set of variants, file ids and
/// bundles is fixed at build time, so hitting one of these means a recipe and
/// the planner disagree.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown project variant '{0}' (expected one of: slim, basic)")]
    UnknownVariant(String),

    #[error("file '{file_id}' is not defined for the {variant} recipe")]
    UnknownFile { variant: String, file_id: String },

    #[error("bundle '{bundle}' is not defined for the {variant} recipe")]
    UnknownBundle { variant: String, bundle: String },

    #[error("invalid recipe manifest for {variant}: {source}")]
    InvalidRecipe {
        variant: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("source_dir.{area} = '{path}' must be a normalized relative path inside the project")]
    InvalidSourceDir { area: &'static str, path: String },

    #[error("failed to render '{file_id}': {source}")]
    Template {
        file_id: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Which dependency set an install targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Runtime,
    Dev,
}

impl InstallMode {
    /// npm flag selecting the manifest section
    pub fn npm_flag(&self) -> &'static str {
        match self {
            InstallMode::Runtime => "--save",
            InstallMode::Dev => "--save-dev",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallMode::Runtime => "dependencies",
            InstallMode::Dev => "dev dependencies",
        }
    }
}

impl std::fmt::Display for InstallMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors surfaced by a generation run
#[derive(Debug, Error)]
pub enum ChefError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Choose a different app name. {} already exists in {}", path.display(), cwd.display())]
    AlreadyExists { path: PathBuf, cwd: PathBuf },

    #[error("failed to install {mode} ({packages}): {detail}")]
    Installation {
        mode: InstallMode,
        packages: String,
        detail: String,
    },

    #[error("failed to rewrite package manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
