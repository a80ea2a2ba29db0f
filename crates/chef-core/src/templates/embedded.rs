//! Recipes compiled into the binary
//!
//! Layout of `recipes/<variant>/`:
//! - `recipe.yaml` - layout, feature availability and package lists
//! - `static/` - tooling files written verbatim
//! - `dynamic/<file>.j2` - sources rendered per app
//! - `sources/<bundle>/` - trees copied into the project's main directory

use super::{render_source, TemplateProvider};
use crate::config::{ConfigResolver, ProjectConfig, RecipeManifest};
use crate::error::ConfigurationError;
use crate::variant::ProjectVariant;
use include_dir::{include_dir, Dir};

static RECIPES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/recipes");

/// A variant's recipe, read from the embedded tree
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedRecipe {
    variant: ProjectVariant,
}

impl EmbeddedRecipe {
    pub const fn new(variant: ProjectVariant) -> Self {
        Self { variant }
    }

    fn file_utf8(&self, relative: &str) -> Option<&'static str> {
        let path = format!("{}/{}", self.variant.name(), relative);
        RECIPES_DIR
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
    }

    fn unknown_file(&self, file_id: &str) -> ConfigurationError {
        ConfigurationError::UnknownFile {
            variant: self.variant.name().to_string(),
            file_id: file_id.to_string(),
        }
    }

    fn manifest(&self) -> Result<RecipeManifest, ConfigurationError> {
        let content = self
            .file_utf8("recipe.yaml")
            .ok_or_else(|| self.unknown_file("recipe.yaml"))?;
        RecipeManifest::parse(self.variant.name(), content)
    }
}

impl ConfigResolver for EmbeddedRecipe {
    fn describe(&self) -> Result<(String, String), ConfigurationError> {
        let manifest = self.manifest()?;
        Ok((manifest.name, manifest.description))
    }

    fn resolve(&self) -> Result<ProjectConfig, ConfigurationError> {
        Ok(self.manifest()?.config)
    }
}

impl TemplateProvider for EmbeddedRecipe {
    fn variant_name(&self) -> &'static str {
        self.variant.name()
    }

    fn static_content(&self, file_id: &str) -> Result<String, ConfigurationError> {
        self.file_utf8(&format!("static/{}", file_id))
            .map(str::to_string)
            .ok_or_else(|| self.unknown_file(file_id))
    }

    fn render(
        &self,
        file_id: &str,
        app_name: &str,
        config: &ProjectConfig,
    ) -> Result<String, ConfigurationError> {
        let source = self
            .file_utf8(&format!("dynamic/{}.j2", file_id))
            .ok_or_else(|| self.unknown_file(file_id))?;
        render_source(file_id, source, app_name, config)
    }

    fn bundle(&self, name: &str) -> Result<&'static Dir<'static>, ConfigurationError> {
        let path = format!("{}/sources/{}", self.variant.name(), name);
        RECIPES_DIR
            .get_dir(&path)
            .ok_or_else(|| ConfigurationError::UnknownBundle {
                variant: self.variant.name().to_string(),
                bundle: name.to_string(),
            })
    }
}
