//! Declarative feature tables driving the planner
//!
//! Each row ties a feature to the files and packages it contributes, so the
//! planner is a single pass over these tables rather than a chain of flag
//! checks.

use crate::config::{Feature, FeatureFlags, ModuleSlot, ProjectConfig, SourceArea};
use crate::templates::files;
use std::path::PathBuf;

/// Answer-gated tooling: a feature the user accepts on top of the recipe
#[derive(Debug, Clone, Copy)]
pub struct ToolingRule {
    pub feature: Feature,
    /// Static config file written at the project root
    pub config_file: Option<&'static str>,
    pub runtime_packages: &'static [&'static str],
    pub dev_packages: &'static [&'static str],
}

/// Declared precedence: lint, formatting, pre-commit hook, forms
pub const TOOLING: [ToolingRule; 4] = [
    ToolingRule {
        feature: Feature::Eslint,
        config_file: Some(files::ESLINT_CONFIG),
        runtime_packages: &[],
        dev_packages: &["eslint", "eslint-plugin-react"],
    },
    ToolingRule {
        feature: Feature::Prettier,
        config_file: Some(files::PRETTIER_CONFIG),
        runtime_packages: &[],
        dev_packages: &["prettier"],
    },
    ToolingRule {
        feature: Feature::Husky,
        config_file: Some(files::HUSKY_CONFIG),
        runtime_packages: &[],
        dev_packages: &["husky"],
    },
    ToolingRule {
        feature: Feature::HookForm,
        config_file: None,
        runtime_packages: &["react-hook-form"],
        dev_packages: &[],
    },
];

/// One component of a path relative to `source_dir.main`
#[derive(Debug, Clone, Copy)]
pub enum Segment {
    Area(SourceArea),
    Module(ModuleSlot),
    Literal(&'static str),
}

/// A rendered file that replaces a bundle placeholder
#[derive(Debug, Clone, Copy)]
pub struct RenderRule {
    pub file_id: &'static str,
    /// Feature that must be enabled for this render
    pub gate: Feature,
    /// Directory holding the file, relative to `source_dir.main`
    pub dir: &'static [Segment],
}

impl RenderRule {
    pub fn relative_path(&self, config: &ProjectConfig) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.dir {
            match segment {
                Segment::Area(area) => path.push(config.source_dir.get(*area)),
                Segment::Module(slot) => path.push(config.modules.get(*slot)),
                Segment::Literal(name) => path.push(name),
            }
        }
        path.join(self.file_id)
    }
}

/// Recipe-gated bundle copied from `sources/<bundle>`
#[derive(Debug, Clone, Copy)]
pub struct BundleRule {
    pub bundle: &'static str,
    /// Copied once if any of these is enabled
    pub gates: &'static [Feature],
    /// Destination under `source_dir.main`
    pub area: SourceArea,
    /// Written after the copy, overwriting placeholders
    pub renders: &'static [RenderRule],
}

impl BundleRule {
    pub fn enabled(&self, can_add: &FeatureFlags) -> bool {
        self.gates.iter().any(|feature| can_add.get(*feature))
    }
}

pub const BUNDLES: [BundleRule; 5] = [
    BundleRule {
        bundle: "utils",
        gates: &[Feature::Utils],
        area: SourceArea::Utils,
        renders: &[],
    },
    BundleRule {
        bundle: "static",
        gates: &[Feature::Static],
        area: SourceArea::Assets,
        renders: &[],
    },
    BundleRule {
        bundle: "i18n",
        gates: &[Feature::I18n],
        area: SourceArea::I18n,
        renders: &[RenderRule {
            file_id: files::WITH_I18N,
            gate: Feature::I18n,
            dir: &[Segment::Area(SourceArea::I18n)],
        }],
    },
    BundleRule {
        bundle: "modules",
        gates: &[Feature::Modules],
        area: SourceArea::Containers,
        renders: &[
            RenderRule {
                file_id: files::SIGN_IN,
                gate: Feature::Modules,
                dir: &[
                    Segment::Area(SourceArea::Containers),
                    Segment::Module(ModuleSlot::SignIn),
                ],
            },
            RenderRule {
                file_id: files::DASHBOARD,
                gate: Feature::Modules,
                dir: &[
                    Segment::Area(SourceArea::Containers),
                    Segment::Module(ModuleSlot::Dashboard),
                ],
            },
        ],
    },
    BundleRule {
        bundle: "components",
        gates: &[Feature::FullComponents, Feature::ComponentsCopy],
        area: SourceArea::Components,
        renders: &[
            RenderRule {
                file_id: files::PAGE_LOADER,
                gate: Feature::FullComponents,
                dir: &[
                    Segment::Area(SourceArea::Components),
                    Segment::Area(SourceArea::BusinessLogic),
                    Segment::Literal("Loader"),
                    Segment::Literal("PageLoader"),
                ],
            },
            RenderRule {
                file_id: files::SIDEBAR,
                gate: Feature::FullComponents,
                dir: &[
                    Segment::Area(SourceArea::Components),
                    Segment::Area(SourceArea::BusinessLogic),
                    Segment::Literal("Region"),
                    Segment::Literal("Sidebar"),
                ],
            },
            RenderRule {
                file_id: files::TOP_BAR,
                gate: Feature::FullComponents,
                dir: &[
                    Segment::Area(SourceArea::Components),
                    Segment::Area(SourceArea::BusinessLogic),
                    Segment::Literal("Region"),
                    Segment::Literal("TopBar"),
                ],
            },
        ],
    },
];
