//! Template lookup and rendering
//!
//! This module provides:
//! - The [`TemplateProvider`] seam the planner and executor work against
//! - File ids understood by the planner
//! - minijinja rendering of app-specific sources
//! - The embedded recipe trees ([`EmbeddedRecipe`])

pub mod embedded;

use crate::config::ProjectConfig;
use crate::error::ConfigurationError;
use include_dir::Dir;
use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};

pub use embedded::EmbeddedRecipe;

/// File ids the planner asks for
pub mod files {
    pub const BABEL_CONFIG: &str = ".babelrc";
    pub const BUNDLER_CONFIG: &str = "webpack.config.js";
    pub const ESLINT_CONFIG: &str = ".eslintrc.json";
    pub const PRETTIER_CONFIG: &str = ".prettierrc.json";
    pub const HUSKY_CONFIG: &str = ".huskyrc.json";
    pub const ENTRY: &str = "index.js";
    pub const APP: &str = "App.js";
    pub const ROUTES: &str = "Routes.js";
    pub const WITH_I18N: &str = "withI18n.js";
    pub const SIGN_IN: &str = "SignIn.js";
    pub const DASHBOARD: &str = "Dashboard.js";
    pub const PAGE_LOADER: &str = "PageLoader.js";
    pub const SIDEBAR: &str = "Sidebar.js";
    pub const TOP_BAR: &str = "TopBar.js";
}

/// Source of file contents and copyable bundles for one variant
pub trait TemplateProvider: Send + Sync {
    /// Variant name used in error messages
    fn variant_name(&self) -> &'static str;

    /// Fixed boilerplate, independent of the app name
    fn static_content(&self, file_id: &str) -> Result<String, ConfigurationError>;

    /// Source text embedding `app_name` and config-derived values.
    ///
    /// Must be referentially transparent: the same arguments always produce
    /// byte-identical output. `app_name` is inserted verbatim.
    fn render(
        &self,
        file_id: &str,
        app_name: &str,
        config: &ProjectConfig,
    ) -> Result<String, ConfigurationError>;

    /// Directory tree copied as-is into a generated project
    fn bundle(&self, name: &str) -> Result<&'static Dir<'static>, ConfigurationError>;
}

/// Render a jinja source with the standard project context
pub fn render_source(
    file_id: &str,
    source: &str,
    app_name: &str,
    config: &ProjectConfig,
) -> Result<String, ConfigurationError> {
    let template_error = |source: minijinja::Error| ConfigurationError::Template {
        file_id: file_id.to_string(),
        source,
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    // File ids carry .js/.json extensions; output is source code, never markup
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(file_id, source).map_err(template_error)?;

    let ctx = context! {
        app_name => app_name,
        port => config.port,
        source_dir => &config.source_dir,
        modules => &config.modules,
        features => config.can_add.enabled_keys(),
    };

    env.get_template(file_id)
        .and_then(|template| template.render(ctx))
        .map_err(template_error)
}
