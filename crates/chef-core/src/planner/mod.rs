//! Turns a resolved config and the user's answers into a generation plan
//!
//! Planning is pure: the same `(config, app_name, answers)` always yields the
//! same actions, dependency lists and manifest rewrite, and nothing here
//! touches the filesystem.

pub mod manifest;
pub mod rules;

use crate::config::{Feature, ProjectConfig};
use crate::error::ConfigurationError;
use crate::templates::{files, TemplateProvider};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use manifest::{ManifestRewrite, Scripts, MANIFEST_FILE};
pub use rules::{BundleRule, RenderRule, ToolingRule, BUNDLES, TOOLING};

/// The user's choices for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub port: u16,
    accepted: BTreeSet<Feature>,
}

impl Answers {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            accepted: BTreeSet::new(),
        }
    }

    pub fn with(mut self, feature: Feature, accepted: bool) -> Self {
        self.set(feature, accepted);
        self
    }

    pub fn set(&mut self, feature: Feature, accepted: bool) {
        if accepted {
            self.accepted.insert(feature);
        } else {
            self.accepted.remove(&feature);
        }
    }

    pub fn accepts(&self, feature: Feature) -> bool {
        self.accepted.contains(&feature)
    }
}

/// A filesystem effect, executed in order by the orchestrator.
///
/// Paths are relative to the directory the generator runs in and start with
/// the app name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir(PathBuf),
    WriteFile {
        path: PathBuf,
        content: String,
    },
    /// Copy `sources/<source>` of the active recipe to `dest`
    CopyTree {
        source: String,
        dest: PathBuf,
    },
}

impl Action {
    /// Path this action creates or writes
    pub fn target(&self) -> &Path {
        match self {
            Action::CreateDir(path) => path,
            Action::WriteFile { path, .. } => path,
            Action::CopyTree { dest, .. } => dest,
        }
    }
}

/// Packages to install, in request order and without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRequest {
    pub runtime: Vec<String>,
    pub dev: Vec<String>,
}

fn push_unique<'a>(list: &mut Vec<String>, packages: impl IntoIterator<Item = &'a str>) {
    for package in packages {
        if !list.iter().any(|existing| existing == package) {
            list.push(package.to_string());
        }
    }
}

/// Everything a run needs, computed up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub actions: Vec<Action>,
    pub dependencies: DependencyRequest,
    pub manifest: ManifestRewrite,
}

/// A feature is installed only when the recipe offers it and the user accepted it
fn installs(config: &ProjectConfig, answers: &Answers, feature: Feature) -> bool {
    config.can_add.get(feature) && answers.accepts(feature)
}

/// Build the full plan for `app_name`.
///
/// Fails with a [`ConfigurationError`] when the recipe is missing a file or
/// bundle the plan needs; no partial plan is returned.
pub fn plan(
    config: &ProjectConfig,
    templates: &dyn TemplateProvider,
    app_name: &str,
    answers: &Answers,
) -> Result<Plan, ConfigurationError> {
    let config = config.with_port(answers.port);
    let root = PathBuf::from(app_name);
    let main = root.join(&config.source_dir.main);

    let static_file = |dir: &Path, file_id: &str| -> Result<Action, ConfigurationError> {
        Ok(Action::WriteFile {
            path: dir.join(file_id),
            content: templates.static_content(file_id)?,
        })
    };
    let rendered = |path: PathBuf, file_id: &str| -> Result<Action, ConfigurationError> {
        Ok(Action::WriteFile {
            path,
            content: templates.render(file_id, app_name, &config)?,
        })
    };

    let mut actions = vec![
        Action::CreateDir(root.clone()),
        Action::CreateDir(main.clone()),
    ];

    // Baseline tooling
    actions.push(static_file(&root, files::BABEL_CONFIG)?);
    actions.push(rendered(
        root.join(files::BUNDLER_CONFIG),
        files::BUNDLER_CONFIG,
    )?);

    for rule in TOOLING.iter().filter(|r| installs(&config, answers, r.feature)) {
        if let Some(file_id) = rule.config_file {
            actions.push(static_file(&root, file_id)?);
        }
    }

    for file_id in [files::ENTRY, files::APP] {
        actions.push(rendered(main.join(file_id), file_id)?);
    }
    if config.can_add.routes {
        actions.push(rendered(main.join(files::ROUTES), files::ROUTES)?);
    }

    for rule in BUNDLES.iter().filter(|r| r.enabled(&config.can_add)) {
        templates.bundle(rule.bundle)?;
        actions.push(Action::CopyTree {
            source: rule.bundle.to_string(),
            dest: main.join(config.source_dir.get(rule.area)),
        });
        for render in rule.renders.iter().filter(|r| config.can_add.get(r.gate)) {
            actions.push(rendered(
                main.join(render.relative_path(&config)),
                render.file_id,
            )?);
        }
    }

    let mut dependencies = DependencyRequest::default();
    push_unique(
        &mut dependencies.runtime,
        config.dependencies.iter().map(String::as_str),
    );
    push_unique(
        &mut dependencies.dev,
        config.dev_dependencies.iter().map(String::as_str),
    );
    for rule in TOOLING.iter().filter(|r| installs(&config, answers, r.feature)) {
        push_unique(&mut dependencies.runtime, rule.runtime_packages.iter().copied());
        push_unique(&mut dependencies.dev, rule.dev_packages.iter().copied());
    }

    let manifest = ManifestRewrite {
        path: root.join(MANIFEST_FILE),
        scripts: Scripts::new(
            installs(&config, answers, Feature::Eslint),
            installs(&config, answers, Feature::Prettier),
        ),
    };

    Ok(Plan {
        root,
        actions,
        dependencies,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::variant::{ProjectVariant, VariantRegistry};
    use include_dir::Dir;

    fn resolve(variant: ProjectVariant) -> (ProjectConfig, &'static dyn TemplateProvider) {
        let recipe = VariantRegistry::recipe(variant);
        (recipe.resolver.resolve().unwrap(), recipe.templates)
    }

    fn all_answers(port: u16) -> Answers {
        Feature::PROMPTED
            .into_iter()
            .fold(Answers::new(port), |answers, f| answers.with(f, true))
    }

    fn written<'a>(plan: &'a Plan, path: &str) -> Option<&'a str> {
        plan.actions.iter().find_map(|action| match action {
            Action::WriteFile { path: p, content } if p == Path::new(path) => {
                Some(content.as_str())
            }
            _ => None,
        })
    }

    fn position(plan: &Plan, path: &str) -> usize {
        plan.actions
            .iter()
            .position(|action| action.target() == Path::new(path))
            .unwrap_or_else(|| panic!("{} not planned", path))
    }

    #[test]
    fn test_slim_scenario() {
        let (config, templates) = resolve(ProjectVariant::Slim);
        let answers = Answers::new(3000)
            .with(Feature::Eslint, true)
            .with(Feature::Prettier, false);
        let plan = plan(&config, templates, "shop", &answers).unwrap();

        assert_eq!(plan.actions[0], Action::CreateDir(PathBuf::from("shop")));
        assert_eq!(plan.actions[1], Action::CreateDir(PathBuf::from("shop/src")));

        let webpack = written(&plan, "shop/webpack.config.js").unwrap();
        assert!(webpack.contains("port: 3000"));
        assert!(written(&plan, "shop/.eslintrc.json").is_some());
        assert!(written(&plan, "shop/.prettierrc.json").is_none());
        assert!(written(&plan, "shop/src/index.js").unwrap().contains("shop"));
        assert!(written(&plan, "shop/src/App.js").unwrap().contains("shop"));
        assert!(written(&plan, "shop/src/Routes.js").is_none());

        assert!(plan.dependencies.dev.contains(&"eslint".to_string()));
        assert!(!plan.dependencies.dev.contains(&"prettier".to_string()));
        assert_eq!(plan.manifest.scripts, Scripts::new(true, false));
        assert_eq!(plan.manifest.path, PathBuf::from("shop/package.json"));
    }

    #[test]
    fn test_basic_plans_routes() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();
        let routes = written(&plan, "shop/src/Routes.js").unwrap();
        assert!(routes.contains("SignIn"));
    }

    #[test]
    fn test_full_components_copy_once_then_renders() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();

        let copies: Vec<usize> = plan
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| matches!(a, Action::CopyTree { source, .. } if source == "components"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(copies.len(), 1);

        for path in [
            "shop/src/components/blocks/Loader/PageLoader/PageLoader.js",
            "shop/src/components/blocks/Region/Sidebar/Sidebar.js",
            "shop/src/components/blocks/Region/TopBar/TopBar.js",
        ] {
            assert!(position(&plan, path) > copies[0], "{} before copy", path);
            assert!(written(&plan, path).unwrap().contains("shop"));
        }
    }

    #[test]
    fn test_both_component_flags_copy_once() {
        let (mut config, templates) = resolve(ProjectVariant::Basic);
        config.can_add.components_copy = true;
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();
        let copies = plan
            .actions
            .iter()
            .filter(|a| matches!(a, Action::CopyTree { source, .. } if source == "components"))
            .count();
        assert_eq!(copies, 1);
    }

    #[test]
    fn test_components_copy_without_renders() {
        let (config, templates) = resolve(ProjectVariant::Slim);
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();
        assert!(plan.actions.contains(&Action::CopyTree {
            source: "components".to_string(),
            dest: PathBuf::from("shop/src/components"),
        }));
        assert!(written(&plan, "shop/src/components/blocks/Region/TopBar/TopBar.js").is_none());
    }

    #[test]
    fn test_module_renders_follow_their_copy() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();
        let copy = position(&plan, "shop/src/modules");
        assert!(position(&plan, "shop/src/modules/SignIn/SignIn.js") > copy);
        assert!(position(&plan, "shop/src/modules/Dashboard/Dashboard.js") > copy);
        assert!(position(&plan, "shop/src/i18n/withI18n.js") > position(&plan, "shop/src/i18n"));
    }

    #[test]
    fn test_declined_features_leave_no_trace() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let plan = plan(&config, templates, "shop", &Answers::new(7000)).unwrap();

        for rule in TOOLING {
            if let Some(file_id) = rule.config_file {
                assert!(written(&plan, &format!("shop/{}", file_id)).is_none());
            }
            for package in rule.runtime_packages {
                assert!(!plan.dependencies.runtime.contains(&package.to_string()));
            }
            for package in rule.dev_packages {
                assert!(!plan.dependencies.dev.contains(&package.to_string()));
            }
        }
        assert_eq!(plan.manifest.scripts, Scripts::new(false, false));
    }

    #[test]
    fn test_accepted_but_not_offered_is_ignored() {
        let (config, templates) = resolve(ProjectVariant::Slim);
        let plan = plan(&config, templates, "shop", &all_answers(7000)).unwrap();
        assert!(written(&plan, "shop/.huskyrc.json").is_none());
        assert!(!plan.dependencies.dev.contains(&"husky".to_string()));
        assert!(!plan
            .dependencies
            .runtime
            .contains(&"react-hook-form".to_string()));
    }

    #[test]
    fn test_tooling_files_in_declared_order() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let plan = plan(&config, templates, "shop", &all_answers(7000)).unwrap();
        let eslint = position(&plan, "shop/.eslintrc.json");
        let prettier = position(&plan, "shop/.prettierrc.json");
        let husky = position(&plan, "shop/.huskyrc.json");
        assert!(eslint < prettier && prettier < husky);
        assert!(plan
            .dependencies
            .runtime
            .contains(&"react-hook-form".to_string()));
        assert_eq!(plan.manifest.scripts, Scripts::new(true, true));
    }

    #[test]
    fn test_dependencies_are_deduplicated() {
        let (mut config, templates) = resolve(ProjectVariant::Slim);
        config.dev_dependencies.push("eslint".to_string());
        config.dev_dependencies.push("webpack".to_string());
        let answers = Answers::new(7000).with(Feature::Eslint, true);
        let plan = plan(&config, templates, "shop", &answers).unwrap();
        let eslint = plan.dependencies.dev.iter().filter(|p| *p == "eslint").count();
        let webpack = plan.dependencies.dev.iter().filter(|p| *p == "webpack").count();
        assert_eq!((eslint, webpack), (1, 1));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let (config, templates) = resolve(ProjectVariant::Basic);
        let answers = all_answers(5000);
        assert_eq!(
            plan(&config, templates, "shop", &answers).unwrap(),
            plan(&config, templates, "shop", &answers).unwrap()
        );
    }

    #[test]
    fn test_every_path_stays_under_root() {
        for variant in ProjectVariant::ALL {
            let (config, templates) = resolve(variant);
            let plan = plan(&config, templates, "shop", &all_answers(7000)).unwrap();
            for action in &plan.actions {
                assert!(action.target().starts_with("shop"));
            }
        }
    }

    /// Provider that knows nothing but the slim static files
    struct Truncated(&'static dyn TemplateProvider);

    impl TemplateProvider for Truncated {
        fn variant_name(&self) -> &'static str {
            "truncated"
        }

        fn static_content(&self, file_id: &str) -> Result<String, ConfigurationError> {
            self.0.static_content(file_id)
        }

        fn render(
            &self,
            file_id: &str,
            _app_name: &str,
            _config: &ProjectConfig,
        ) -> Result<String, ConfigurationError> {
            Err(ConfigurationError::UnknownFile {
                variant: "truncated".to_string(),
                file_id: file_id.to_string(),
            })
        }

        fn bundle(&self, name: &str) -> Result<&'static Dir<'static>, ConfigurationError> {
            self.0.bundle(name)
        }
    }

    #[test]
    fn test_missing_template_fails_whole_plan() {
        let (config, templates) = resolve(ProjectVariant::Slim);
        let truncated = Truncated(templates);
        let err = plan(&config, &truncated, "shop", &Answers::new(7000)).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownFile { ref file_id, .. } if file_id == files::BUNDLER_CONFIG
        ));
    }

    #[test]
    fn test_routes_flag_on_slim_is_a_configuration_error() {
        let (mut config, templates) = resolve(ProjectVariant::Slim);
        config.can_add.routes = true;
        let err = plan(&config, templates, "shop", &Answers::new(7000)).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownFile { .. }));
    }
}
