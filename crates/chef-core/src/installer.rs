//! npm invocation: manifest creation and dependency installation

use crate::error::{ChefError, InstallMode};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Lines of npm's stderr kept in an installation error
const ERROR_TAIL_LINES: usize = 15;

pub fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Arguments for one batch install
pub fn install_args(mode: InstallMode, packages: &[String]) -> Vec<String> {
    let mut args = vec!["install".to_string(), mode.npm_flag().to_string()];
    args.extend(packages.iter().cloned());
    args
}

/// Create the default package.json with `npm init -y`
pub async fn init_manifest(project_dir: &Path) -> Result<()> {
    let output = Command::new(npm_program())
        .args(["init", "-y"])
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run npm init in {}", project_dir.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "npm init failed with exit code {}:\n{}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

/// Install one dependency set in a single batch. Empty sets are a no-op.
///
/// Failures are reported as [`ChefError::Installation`] and never retried.
pub async fn install_packages(
    project_dir: &Path,
    mode: InstallMode,
    packages: &[String],
) -> Result<(), ChefError> {
    if packages.is_empty() {
        return Ok(());
    }

    let installation_error = |detail: String| ChefError::Installation {
        mode,
        packages: packages.join(" "),
        detail,
    };

    let output = Command::new(npm_program())
        .args(install_args(mode, packages))
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| installation_error(format!("could not run npm: {}", e)))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let tail = lines[lines.len().saturating_sub(ERROR_TAIL_LINES)..].join("\n");
    Err(installation_error(format!(
        "npm exited with code {}\n{}",
        output.status.code().unwrap_or(-1),
        tail
    )))
}
