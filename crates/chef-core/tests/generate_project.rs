use chef_core::planner::{self, Answers};
use chef_core::{executor, Action, Feature, ProjectVariant, VariantRegistry};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

fn generated_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[tokio::test]
async fn test_basic_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = VariantRegistry::recipe(ProjectVariant::Basic);
    let config = recipe.resolver.resolve().unwrap();
    let answers = Answers::new(4000)
        .with(Feature::Eslint, true)
        .with(Feature::Husky, true);

    let plan = planner::plan(&config, recipe.templates, "shop", &answers).unwrap();
    executor::execute(&plan.actions, recipe.templates, dir.path())
        .await
        .unwrap();

    let files = generated_files(&dir.path().join("shop"));
    for expected in [
        ".babelrc",
        "webpack.config.js",
        ".eslintrc.json",
        ".huskyrc.json",
        "src/index.js",
        "src/App.js",
        "src/Routes.js",
        "src/utils/api.js",
        "src/static/css/global.css",
        "src/i18n/withI18n.js",
        "src/i18n/locales/en.json",
        "src/modules/SignIn/SignIn.js",
        "src/modules/Dashboard/Dashboard.js",
        "src/components/Layout/Layout.js",
        "src/components/blocks/Loader/PageLoader/PageLoader.js",
        "src/components/blocks/Region/Sidebar/Sidebar.js",
        "src/components/blocks/Region/TopBar/TopBar.js",
    ] {
        assert!(files.contains(expected), "missing {}", expected);
    }
    assert!(!files.contains(".prettierrc.json"));

    // Rendered files replace the bundle placeholders
    for rendered in [
        "src/i18n/withI18n.js",
        "src/modules/SignIn/SignIn.js",
        "src/components/blocks/Region/TopBar/TopBar.js",
    ] {
        let content = std::fs::read_to_string(dir.path().join("shop").join(rendered)).unwrap();
        assert!(content.contains("shop"), "{} not rendered", rendered);
        assert!(!content.contains("Replaced with"), "{} still a placeholder", rendered);
    }

    let webpack = std::fs::read_to_string(dir.path().join("shop/webpack.config.js")).unwrap();
    assert!(webpack.contains("port: 4000"));

    assert!(plan.dependencies.dev.contains(&"husky".to_string()));
    assert!(plan.dependencies.runtime.contains(&"react-router-dom".to_string()));
}

#[tokio::test]
async fn test_slim_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = VariantRegistry::recipe(ProjectVariant::Slim);
    let config = recipe.resolver.resolve().unwrap();

    let plan = planner::plan(&config, recipe.templates, "shop", &Answers::new(7000)).unwrap();
    executor::execute(&plan.actions, recipe.templates, dir.path())
        .await
        .unwrap();

    let files = generated_files(&dir.path().join("shop"));
    let expected: BTreeSet<String> = [
        ".babelrc",
        "webpack.config.js",
        "src/index.js",
        "src/App.js",
        "src/static/css/global.css",
        "src/components/Button/Button.js",
        "src/components/Button/index.js",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(files, expected);
}

#[test]
fn test_write_actions_cover_every_rendered_path_once() {
    let recipe = VariantRegistry::recipe(ProjectVariant::Basic);
    let config = recipe.resolver.resolve().unwrap();
    let plan = planner::plan(&config, recipe.templates, "shop", &Answers::new(7000)).unwrap();

    let mut seen = BTreeSet::new();
    for action in &plan.actions {
        if let Action::WriteFile { path, .. } = action {
            assert!(seen.insert(path.clone()), "{} written twice", path.display());
        }
    }
}
