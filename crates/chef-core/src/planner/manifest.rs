//! package.json rewrite applied after installation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub const MANIFEST_FILE: &str = "package.json";

/// Script entries written into the generated manifest.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prettier: Option<String>,
    pub clean: String,
}

impl Scripts {
    /// Derived only from whether eslint and prettier were installed
    pub fn new(eslint: bool, prettier: bool) -> Self {
        Self {
            dev: "webpack serve --mode development".to_string(),
            build: "webpack --mode production --progress".to_string(),
            lint: eslint.then(|| "eslint src --ext .js".to_string()),
            prettier: prettier.then(|| "prettier --write src".to_string()),
            clean: "rm -rf node_modules".to_string(),
        }
    }
}

/// Planned rewrite of the manifest created by `npm init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRewrite {
    pub path: PathBuf,
    pub scripts: Scripts,
}

impl ManifestRewrite {
    /// Replace `scripts` wholesale and drop `main`, keeping every other key
    /// in its original position.
    pub fn apply(&self, existing: &str) -> Result<String, serde_json::Error> {
        let mut manifest: Value = serde_json::from_str(existing)?;
        let object = manifest.as_object_mut().ok_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom("package manifest must be a JSON object")
        })?;

        object.insert("scripts".to_string(), serde_json::to_value(&self.scripts)?);
        object.shift_remove("main");

        let mut rendered = serde_json::to_string_pretty(&manifest)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
