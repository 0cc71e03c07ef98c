//! Configuration management commands.

use clap::Args;
use secondbrain_core::config::Config;
use secondbrain_core::{paths, ConfigError};
use std::path::{Path, PathBuf};

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration
    Validate,
}

fn config_file(config_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(paths::config_file()?),
    }
}

/// Run the config command.
///
/// `config` is the result of loading `config_path` (or the default file).
pub async fn run(
    args: ConfigArgs,
    config_path: Option<&Path>,
    config: Result<Config, ConfigError>,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = config?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }

        ConfigCommand::Init { force } => {
            let path = config_file(config_path)?;

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {:?}. Use --force to overwrite.",
                    path
                );
            }

            Config::default().save(&path)?;
            println!("Created config file: {:?}", path);
            println!("  Tip: set OPENAI_API_KEY before running 'secondbrain remember'.");
        }

        ConfigCommand::Path => {
            let path = config_file(config_path)?;
            println!("{}", path.display());
        }

        ConfigCommand::Validate => match config {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => anyhow::bail!("Configuration error: {}", e),
            },
            Err(e) => anyhow::bail!("Failed to load config: {}", e),
        },
    }

    Ok(())
}
