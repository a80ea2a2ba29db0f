//! Project variants and the registry mapping them to recipes

use crate::config::ConfigResolver;
use crate::error::ConfigurationError;
use crate::templates::{EmbeddedRecipe, TemplateProvider};
use std::fmt;
use std::str::FromStr;

/// The closed set of project variants offered to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectVariant {
    #[default]
    Slim,
    Basic,
}

impl ProjectVariant {
    /// Prompt order; the first entry is the default
    pub const ALL: [ProjectVariant; 2] = [ProjectVariant::Slim, ProjectVariant::Basic];

    pub const fn name(&self) -> &'static str {
        match self {
            ProjectVariant::Slim => "slim",
            ProjectVariant::Basic => "basic",
        }
    }
}

impl fmt::Display for ProjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectVariant {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownVariant(s.to_string()))
    }
}

/// The config resolver and template provider active for a run
#[derive(Clone, Copy)]
pub struct Recipe {
    pub variant: ProjectVariant,
    pub resolver: &'static dyn ConfigResolver,
    pub templates: &'static dyn TemplateProvider,
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

static SLIM: EmbeddedRecipe = EmbeddedRecipe::new(ProjectVariant::Slim);
static BASIC: EmbeddedRecipe = EmbeddedRecipe::new(ProjectVariant::Basic);

/// Maps each [`ProjectVariant`] to its immutable recipe
pub struct VariantRegistry;

impl VariantRegistry {
    pub fn recipe(variant: ProjectVariant) -> Recipe {
        let embedded: &'static EmbeddedRecipe = match variant {
            ProjectVariant::Slim => &SLIM,
            ProjectVariant::Basic => &BASIC,
        };
        Recipe {
            variant,
            resolver: embedded,
            templates: embedded,
        }
    }

    /// Look a variant up by name (case-insensitive)
    pub fn lookup(name: &str) -> Result<Recipe, ConfigurationError> {
        Ok(Self::recipe(name.parse()?))
    }

    pub fn all() -> impl Iterator<Item = Recipe> {
        ProjectVariant::ALL.into_iter().map(Self::recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant_case_insensitive() {
        assert_eq!("Slim".parse::<ProjectVariant>().unwrap(), ProjectVariant::Slim);
        assert_eq!("basic".parse::<ProjectVariant>().unwrap(), ProjectVariant::Basic);
        assert_eq!(" BASIC ".parse::<ProjectVariant>().unwrap(), ProjectVariant::Basic);
    }

    #[test]
    fn test_unknown_variant_is_configuration_error() {
        let err = VariantRegistry::lookup("fancy").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownVariant(name) if name == "fancy"));
    }

    #[test]
    fn test_registry_pairs_match_variant() {
        for recipe in VariantRegistry::all() {
            assert_eq!(recipe.templates.variant_name(), recipe.variant.name());
            assert!(recipe.resolver.resolve().is_ok());
        }
    }

    #[test]
    fn test_default_variant_is_first() {
        assert_eq!(ProjectVariant::default(), ProjectVariant::ALL[0]);
    }
}
