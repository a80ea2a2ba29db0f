//! React Chef CLI - Project scaffolding for React apps

use anyhow::Result;
use chef_core::tui::CreateArgs;
use clap::Parser;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "react-chef")]
#[command(about = "CLI for scaffolding React projects from slim or basic recipes")]
#[command(version)]
pub struct Args {
    /// App name, also the directory created for the project
    pub app_name: Option<String>,

    /// Project type (slim or basic)
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Dev-server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Optional tooling to add (comma-separated: eslint,prettier,husky,hook_form)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            app_name: args.app_name,
            variant: args.variant,
            port: args.port,
            features: args.features,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = chef_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
