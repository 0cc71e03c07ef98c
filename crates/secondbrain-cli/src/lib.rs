//! SecondBrain command-line interface.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use secondbrain_core::env::vars;
use secondbrain_core::{Config, ConfigError};
use std::path::PathBuf;

/// SecondBrain - remember notes and find them again by meaning
#[derive(Parser)]
#[command(name = "secondbrain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = vars::CONFIG, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the configuration selected by `--config`, or the default file.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        Config::load_from(self.config.as_deref())
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Save a new memory
    Remember(commands::remember::RememberArgs),

    /// Search memories by meaning and/or reminder date
    Search(commands::search::SearchArgs),

    /// List every stored memory
    List,

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Run diagnostics
    Doctor,

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments and the configuration loaded for them.
///
/// Memory commands require a valid configuration; `config` and `doctor`
/// report load failures themselves.
pub async fn run(cli: Cli, config: Result<Config, ConfigError>) -> anyhow::Result<()> {
    let config_path = cli.config;
    match cli.command {
        Commands::Remember(args) => {
            commands::remember::run(args, commands::validated(config)?).await
        }
        Commands::Search(args) => {
            commands::search::run(args, commands::validated(config)?).await
        }
        Commands::List => commands::list::run(commands::validated(config)?).await,
        Commands::Config(args) => {
            commands::config::run(args, config_path.as_deref(), config).await
        }
        Commands::Doctor => commands::doctor::run(config_path.as_deref(), config).await,
        Commands::Version => {
            println!("secondbrain {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
