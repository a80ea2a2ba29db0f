//! Executes a plan against the filesystem

use crate::error::ChefError;
use crate::planner::{Action, ManifestRewrite};
use crate::templates::TemplateProvider;
use anyhow::{Context, Result};
use include_dir::{Dir, DirEntry, File};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Refuse to generate into an existing path
pub fn ensure_absent(base_dir: &Path, app_name: &str) -> Result<(), ChefError> {
    let path = base_dir.join(app_name);
    if path.exists() {
        return Err(ChefError::AlreadyExists {
            path: PathBuf::from(app_name),
            cwd: base_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Run every action in order below `base_dir`.
///
/// Returns the number of files written, bundle contents included.
pub async fn execute(
    actions: &[Action],
    templates: &dyn TemplateProvider,
    base_dir: &Path,
) -> Result<usize> {
    let mut written = 0;

    for action in actions {
        match action {
            Action::CreateDir(path) => {
                let target = base_dir.join(path);
                fs::create_dir_all(&target)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", target.display()))?;
            }
            Action::WriteFile { path, content } => {
                write_file(&base_dir.join(path), content.as_bytes()).await?;
                written += 1;
            }
            Action::CopyTree { source, dest } => {
                let bundle = templates.bundle(source)?;
                written += copy_bundle(bundle, &base_dir.join(dest)).await?;
            }
        }
    }

    Ok(written)
}

async fn write_file(target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(target, content)
        .await
        .with_context(|| format!("Failed to write file: {}", target.display()))
}

fn collect_files(dir: &'static Dir<'static>, files: &mut Vec<&'static File<'static>>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, files),
            DirEntry::File(file) => files.push(file),
        }
    }
}

/// Recursively copy an embedded bundle, overwriting existing files
async fn copy_bundle(bundle: &'static Dir<'static>, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)
        .await
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let mut files = Vec::new();
    collect_files(bundle, &mut files);

    for file in &files {
        let relative = file.path().strip_prefix(bundle.path()).with_context(|| {
            format!(
                "Bundle file {} is outside {}",
                file.path().display(),
                bundle.path().display()
            )
        })?;
        write_file(&dest.join(relative), file.contents()).await?;
    }

    Ok(files.len())
}

/// Apply the planned manifest rewrite to the file `npm init` produced
pub async fn rewrite_manifest(rewrite: &ManifestRewrite, base_dir: &Path) -> Result<()> {
    let path = base_dir.join(&rewrite.path);
    let existing = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let updated = rewrite.apply(&existing).map_err(ChefError::from)?;
    fs::write(&path, updated)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
