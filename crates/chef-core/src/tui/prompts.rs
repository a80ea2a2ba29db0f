//! Charm-style CLI prompts using cliclack

use crate::config::{Feature, ProjectConfig, PORT_CHOICES};
use crate::error::InstallMode;
use crate::planner::{self, Answers, Plan};
use crate::runtime::check;
use crate::variant::{ProjectVariant, Recipe, VariantRegistry};
use crate::{executor, installer};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the app and of the directory created for it
    pub app_name: Option<String>,

    /// Project variant (slim or basic)
    pub variant: Option<String>,

    /// Dev-server port
    pub port: Option<u16>,

    /// Optional tooling to accept; everything else offered is declined
    pub features: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Check a name against npm's package naming rules
pub fn validate_app_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("App name is required".to_string());
    }
    if name.len() > 214 {
        return Err("App name must be at most 214 characters".to_string());
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err("App name cannot start with '.' or '_'".to_string());
    }
    if matches!(name, "node_modules" | "favicon.ico") {
        return Err(format!("'{}' is a reserved name", name));
    }
    if let Some(bad) = name
        .chars()
        .find(|&c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')))
    {
        return Err(format!(
            "App name may only contain lowercase letters, digits, '-', '.', '_' or '~' (found '{}')",
            bad
        ));
    }
    Ok(())
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("react-chef {}", cli_version))?;

    let base_dir = std::env::current_dir().context("Failed to read current directory")?;

    // Step 1: App name, refusing existing directories before any prompt
    let app_name = select_app_name(&args)?;
    executor::ensure_absent(&base_dir, &app_name)?;

    // Step 2: Variant and its config
    let recipe = select_variant(&args)?;
    let config = recipe.resolver.resolve()?;

    // Step 3: npm must be available
    check_runtimes()?;

    // Step 4: Port and optional tooling
    let answers = collect_answers(&config, &args)?;

    // Step 5: Plan, then execute
    let plan = planner::plan(&config, recipe.templates, &app_name, &answers)?;
    create_project(&plan, recipe, &base_dir).await?;

    // Step 6: Install and finalize the manifest
    install_dependencies(&plan, &base_dir).await?;

    print_next_steps(&plan, &answers)?;

    Ok(())
}

fn select_app_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.app_name {
        validate_app_name(name).map_err(anyhow::Error::msg)?;
        cliclack::log::info(format!("App name: {}", name))?;
        return Ok(name.clone());
    }

    if args.yes {
        anyhow::bail!("App name missing. For example: react-chef my-app-name");
    }

    let name: String = cliclack::input("App name")
        .placeholder("my-app-name")
        .validate(|input: &String| validate_app_name(input))
        .interact()?;
    Ok(name)
}

fn select_variant(args: &CreateArgs) -> Result<Recipe> {
    if let Some(name) = &args.variant {
        let recipe = VariantRegistry::lookup(name)?;
        cliclack::log::info(format!("Project type: {}", recipe.variant))?;
        return Ok(recipe);
    }

    if args.yes {
        let recipe = VariantRegistry::recipe(ProjectVariant::default());
        cliclack::log::info(format!("Project type: {}", recipe.variant))?;
        return Ok(recipe);
    }

    let mut select = cliclack::select("choose your project type");
    for recipe in VariantRegistry::all() {
        let (name, description) = recipe.resolver.describe()?;
        select = select.item(recipe.variant, name, description);
    }

    let variant: ProjectVariant = select.initial_value(ProjectVariant::default()).interact()?;
    Ok(VariantRegistry::recipe(variant))
}

fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::require_npm() {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.error("Missing runtimes");
            Err(e)
        }
    }
}

fn collect_answers(config: &ProjectConfig, args: &CreateArgs) -> Result<Answers> {
    let port = match args.port {
        Some(port) => port,
        None if args.yes => config.port,
        None => {
            let mut select = cliclack::select("choose your port number");
            for port in PORT_CHOICES {
                select = select.item(port, port, "");
            }
            let initial = if PORT_CHOICES.contains(&config.port) {
                config.port
            } else {
                PORT_CHOICES[PORT_CHOICES.len() - 1]
            };
            select.initial_value(initial).interact()?
        }
    };

    let mut answers = Answers::new(port);
    let offered = config.can_add.offered_prompts();

    if let Some(requested) = &args.features {
        for key in requested {
            match Feature::from_key(key.trim()) {
                Some(feature) if offered.contains(&feature) => answers.set(feature, true),
                Some(feature) => {
                    cliclack::log::warning(format!("{} is not offered by this project type", feature))?
                }
                None => cliclack::log::warning(format!("Unknown feature: {}", key))?,
            }
        }
    } else {
        for feature in offered {
            let accepted = match feature.prompt() {
                Some(_) if args.yes => feature.default_answer(),
                Some(message) => cliclack::confirm(message)
                    .initial_value(feature.default_answer())
                    .interact()?,
                None => false,
            };
            answers.set(feature, accepted);
        }
    }

    let accepted: Vec<&str> = Feature::PROMPTED
        .iter()
        .filter(|f| answers.accepts(**f))
        .map(|f| f.key())
        .collect();
    cliclack::log::success(format!(
        "Port {}, tooling: {}",
        answers.port,
        if accepted.is_empty() {
            "none".to_string()
        } else {
            accepted.join(", ")
        }
    ))?;

    Ok(answers)
}

async fn create_project(plan: &Plan, recipe: Recipe, base_dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match executor::execute(&plan.actions, recipe.templates, base_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written,
                base_dir.join(&plan.root).display()
            ));
        }
        Err(e) => {
            spinner.error("Failed to create project");
            return Err(e);
        }
    }

    let spinner = cliclack::spinner();
    spinner.start("Initializing package.json...");
    installer::init_manifest(&base_dir.join(&plan.root)).await?;
    spinner.stop("Initialized package.json");

    Ok(())
}

async fn install_dependencies(plan: &Plan, base_dir: &Path) -> Result<()> {
    let project_dir: PathBuf = base_dir.join(&plan.root);

    for (mode, packages) in [
        (InstallMode::Runtime, &plan.dependencies.runtime),
        (InstallMode::Dev, &plan.dependencies.dev),
    ] {
        if packages.is_empty() {
            continue;
        }
        let spinner = cliclack::spinner();
        spinner.start(format!("Installing App {}...", mode));
        if let Err(e) = installer::install_packages(&project_dir, mode, packages).await {
            spinner.error(format!("Failed to install {}", mode));
            return Err(e.into());
        }
        spinner.stop(format!("Installed {} {}", packages.len(), mode));
    }

    executor::rewrite_manifest(&plan.manifest, base_dir).await?;
    cliclack::log::success("Updated package.json scripts")?;

    Ok(())
}

fn print_next_steps(plan: &Plan, answers: &Answers) -> Result<()> {
    let mut steps = vec![
        format!("cd {}", plan.root.display()),
        "npm run dev".to_string(),
    ];
    if plan.manifest.scripts.lint.is_some() {
        steps.push("npm run lint".to_string());
    }
    if plan.manifest.scripts.prettier.is_some() {
        steps.push("npm run prettier".to_string());
    }

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();
    println!(
        "  Dev server: {}",
        format!("http://localhost:{}", answers.port).underline()
    );

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_app_names() {
        for name in ["shop", "my-app", "app2", "a.b_c~d"] {
            assert!(validate_app_name(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_app_names() {
        for name in ["", ".hidden", "_private", "MyApp", "my app", "../escape", "node_modules"] {
            assert!(validate_app_name(name).is_err(), "{} should be invalid", name);
        }
        assert!(validate_app_name(&"a".repeat(215)).is_err());
    }
}
