//! CLI entry and dispatch.

use anyhow::{Context, Result};
use careerbuzz_core::{config, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "careerbuzz")]
#[command(version)]
#[command(about = "CareerBuzz: turn your skills into career pathways")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Suggest careers for a comma-separated list of skills
    Analyze {
        /// Skills to analyze, e.g. "python, sql, pandas"
        #[arg(short, long)]
        skills: String,
    },
    /// Show or flip the light/dark theme preference
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ThemeCommands {
    /// Print the stored theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("Warning: file logging disabled: {err:#}");
    }

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the landing page
    let Some(command) = cli.command else {
        return commands::landing::run(&config);
    };

    match command {
        Commands::Analyze { skills } => commands::analyze::run(&config, &skills).await,
        Commands::Theme { command } => match command.unwrap_or(ThemeCommands::Show) {
            ThemeCommands::Show => commands::theme::show(),
            ThemeCommands::Toggle => commands::theme::toggle(),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
