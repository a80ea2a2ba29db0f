//! Optional subsystems a recipe may offer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every optional subsystem a recipe can declare in `can_add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Eslint,
    Prettier,
    Husky,
    HookForm,
    Routes,
    Utils,
    Static,
    I18n,
    Modules,
    ComponentsCopy,
    FullComponents,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::Eslint,
        Feature::Prettier,
        Feature::Husky,
        Feature::HookForm,
        Feature::Routes,
        Feature::Utils,
        Feature::Static,
        Feature::I18n,
        Feature::Modules,
        Feature::ComponentsCopy,
        Feature::FullComponents,
    ];

    /// Features the user is asked about, in prompt order
    pub const PROMPTED: [Feature; 4] = [
        Feature::Eslint,
        Feature::Prettier,
        Feature::Husky,
        Feature::HookForm,
    ];

    /// Key used in recipe manifests and in the template context
    pub fn key(&self) -> &'static str {
        match self {
            Feature::Eslint => "eslint",
            Feature::Prettier => "prettier",
            Feature::Husky => "husky",
            Feature::HookForm => "hook_form",
            Feature::Routes => "routes",
            Feature::Utils => "utils",
            Feature::Static => "static",
            Feature::I18n => "i18n",
            Feature::Modules => "modules",
            Feature::ComponentsCopy => "components_copy",
            Feature::FullComponents => "full_components",
        }
    }

    /// Confirm prompt shown when the recipe offers this feature.
    /// `None` for features that follow from the recipe alone.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Feature::Eslint => Some("do you want to add eslint?"),
            Feature::Prettier => Some("do you want to add prettier?"),
            Feature::Husky => Some(
                "do you want to add husky which enables linting and prettier on pre-commit hook?",
            ),
            Feature::HookForm => Some("do you want to add react-hook-form?"),
            _ => None,
        }
    }

    /// Answer used when the prompt is skipped (`--yes`)
    pub fn default_answer(&self) -> bool {
        matches!(self, Feature::Eslint)
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which optional subsystems a recipe supports.
///
/// Total over [`Feature::ALL`]: a key missing from the manifest is `false`,
/// an unknown key fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureFlags {
    pub eslint: bool,
    pub prettier: bool,
    pub husky: bool,
    pub hook_form: bool,
    pub routes: bool,
    pub utils: bool,
    #[serde(rename = "static")]
    pub static_assets: bool,
    pub i18n: bool,
    pub modules: bool,
    pub components_copy: bool,
    pub full_components: bool,
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::Eslint => self.eslint,
            Feature::Prettier => self.prettier,
            Feature::Husky => self.husky,
            Feature::HookForm => self.hook_form,
            Feature::Routes => self.routes,
            Feature::Utils => self.utils,
            Feature::Static => self.static_assets,
            Feature::I18n => self.i18n,
            Feature::Modules => self.modules,
            Feature::ComponentsCopy => self.components_copy,
            Feature::FullComponents => self.full_components,
        }
    }

    /// Keys of every enabled feature, in [`Feature::ALL`] order
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.get(*f))
            .map(|f| f.key())
            .collect()
    }

    /// Prompted features this recipe offers
    pub fn offered_prompts(&self) -> Vec<Feature> {
        Feature::PROMPTED
            .into_iter()
            .filter(|f| self.get(*f))
            .collect()
    }
}
