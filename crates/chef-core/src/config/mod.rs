//! Project configuration resolved from a variant's recipe manifest
//!
//! Each variant ships a `recipe.yaml` describing its directory layout, which
//! optional subsystems it supports and which packages it installs. Resolving a
//! variant parses and validates that manifest; nothing here touches the disk.

pub mod feature;

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use feature::{Feature, FeatureFlags};

/// Dev-server port used when a recipe does not declare one
pub const DEFAULT_PORT: u16 = 7000;

/// Ports offered by the port prompt
pub const PORT_CHOICES: [u16; 5] = [3000, 4000, 5000, 6000, 7000];

/// Logical source areas of a generated project.
///
/// `main` is relative to the project root; every other entry is relative to
/// `main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceDirs {
    pub main: String,
    pub components: String,
    pub containers: String,
    pub business_logic: String,
    pub i18n: String,
    pub utils: String,
    pub assets: String,
}

impl Default for SourceDirs {
    fn default() -> Self {
        Self {
            main: "src".to_string(),
            components: "components".to_string(),
            containers: "modules".to_string(),
            business_logic: "blocks".to_string(),
            i18n: "i18n".to_string(),
            utils: "utils".to_string(),
            assets: "static".to_string(),
        }
    }
}

/// Source areas nested under `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArea {
    Components,
    Containers,
    BusinessLogic,
    I18n,
    Utils,
    Assets,
}

impl SourceDirs {
    pub fn get(&self, area: SourceArea) -> &str {
        match area {
            SourceArea::Components => &self.components,
            SourceArea::Containers => &self.containers,
            SourceArea::BusinessLogic => &self.business_logic,
            SourceArea::I18n => &self.i18n,
            SourceArea::Utils => &self.utils,
            SourceArea::Assets => &self.assets,
        }
    }

    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("main", &self.main),
            ("components", &self.components),
            ("containers", &self.containers),
            ("business_logic", &self.business_logic),
            ("i18n", &self.i18n),
            ("utils", &self.utils),
            ("assets", &self.assets),
        ]
    }

    /// Reject anything that could escape the project root
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (area, path) in self.entries() {
            if !is_normalized_relative(path) {
                return Err(ConfigurationError::InvalidSourceDir {
                    area,
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_normalized_relative(path: &str) -> bool {
    !path.is_empty()
        && !path.contains('\\')
        && !Path::new(path).has_root()
        && path
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | ".."))
}

/// Concrete directory names of the generated feature modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleNames {
    pub sign_in: String,
    pub dashboard: String,
}

/// Generated feature modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSlot {
    SignIn,
    Dashboard,
}

impl ModuleNames {
    pub fn get(&self, slot: ModuleSlot) -> &str {
        match slot {
            ModuleSlot::SignIn => &self.sign_in,
            ModuleSlot::Dashboard => &self.dashboard,
        }
    }
}

impl Default for ModuleNames {
    fn default() -> Self {
        Self {
            sign_in: "SignIn".to_string(),
            dashboard: "Dashboard".to_string(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Resolved configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Dev-server port. Holds the recipe default until [`ProjectConfig::with_port`].
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub source_dir: SourceDirs,

    #[serde(default)]
    pub can_add: FeatureFlags,

    #[serde(default)]
    pub modules: ModuleNames,

    /// Runtime packages, installed with `--save`
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Build tooling, installed with `--save-dev`
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
}

impl ProjectConfig {
    /// Copy of this config with the chosen dev-server port
    pub fn with_port(&self, port: u16) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }
}

/// Recipe manifest (`recipes/<variant>/recipe.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeManifest {
    /// Display name shown in the variant prompt
    pub name: String,

    /// One-line summary shown next to the name
    pub description: String,

    #[serde(flatten)]
    pub config: ProjectConfig,
}

impl RecipeManifest {
    /// Parse and validate a recipe manifest
    pub fn parse(variant: &str, content: &str) -> Result<Self, ConfigurationError> {
        let manifest: RecipeManifest =
            serde_yaml::from_str(content).map_err(|source| ConfigurationError::InvalidRecipe {
                variant: variant.to_string(),
                source,
            })?;
        manifest.config.source_dir.validate()?;
        Ok(manifest)
    }
}

/// Produces the [`ProjectConfig`] of one variant
pub trait ConfigResolver: Send + Sync {
    /// Display name and description of the variant
    fn describe(&self) -> Result<(String, String), ConfigurationError>;

    /// Pure function of the variant: same output every call
    fn resolve(&self) -> Result<ProjectConfig, ConfigurationError>;
}
