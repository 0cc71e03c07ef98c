//! Diagnostic commands.

use console::{style, Emoji};
use secondbrain_core::config::Config;
use secondbrain_core::ConfigError;
use secondbrain_core::{env, paths};
use secondbrain_memory::{FileVectorStore, VectorStore};
use std::path::Path;

static CHECK: Emoji = Emoji("✓", "+");
static CROSS: Emoji = Emoji("✗", "x");
static WARN: Emoji = Emoji("⚠", "!");

/// Run the doctor command.
///
/// `config` is the result of loading `config_path` (or the default file).
pub async fn run(
    config_path: Option<&Path>,
    config: Result<Config, ConfigError>,
) -> anyhow::Result<()> {
    println!("SecondBrain Doctor\n");

    let mut errors = 0;
    let mut warnings = 0;

    println!("Checking directories...");

    match paths::base_dir() {
        Ok(dir) if dir.exists() => {
            println!("  {} Base directory exists: {:?}", style(CHECK).green(), dir);
        }
        Ok(dir) => {
            println!("  {} Base directory missing: {:?}", style(WARN).yellow(), dir);
            warnings += 1;
        }
        Err(e) => {
            println!("  {} Failed to determine base directory: {}", style(CROSS).red(), e);
            errors += 1;
        }
    }

    println!("\nChecking configuration...");

    if config_path.is_none() {
        if let Ok(path) = paths::config_file() {
            if !path.exists() {
                println!("  {} Using defaults, no file at {:?}", style(WARN).yellow(), path);
                println!("    Run 'secondbrain config init' to create one");
                warnings += 1;
            }
        }
    }

    let config = match config {
        Ok(config) => {
            println!("  {} Configuration loaded", style(CHECK).green());
            match config.validate() {
                Ok(_) => println!("  {} Configuration valid", style(CHECK).green()),
                Err(e) => {
                    println!("  {} Configuration invalid: {}", style(CROSS).red(), e);
                    errors += 1;
                }
            }
            Some(config)
        }
        Err(ConfigError::NotFound(path)) => {
            println!("  {} Configuration file not found: {:?}", style(WARN).yellow(), path);
            println!("    Run 'secondbrain config init' to create one");
            warnings += 1;
            None
        }
        Err(e) => {
            println!("  {} Configuration error: {}", style(CROSS).red(), e);
            errors += 1;
            None
        }
    };

    println!("\nChecking environment...");

    if env::get_var(env::vars::OPENAI_API_KEY).is_some() {
        println!("  {} OPENAI_API_KEY is set", style(CHECK).green());
    } else {
        println!(
            "  {} OPENAI_API_KEY is not set; remember and semantic search will fail",
            style(WARN).yellow()
        );
        warnings += 1;
    }

    println!("\nChecking memory store...");

    let config = config.unwrap_or_default();
    match config.store_path() {
        Ok(path) if !path.exists() => {
            println!("  {} No memories stored yet: {:?}", style(CHECK).green(), path);
        }
        Ok(path) => match FileVectorStore::new(path.clone()) {
            Ok(store) => {
                let count = store.count().await?;
                println!(
                    "  {} {} memories in {:?}",
                    style(CHECK).green(),
                    count,
                    path
                );
            }
            Err(e) => {
                println!("  {} Store unreadable {:?}: {}", style(CROSS).red(), path, e);
                errors += 1;
            }
        },
        Err(e) => {
            println!("  {} Failed to resolve store path: {}", style(CROSS).red(), e);
            errors += 1;
        }
    }

    println!();
    if errors > 0 {
        anyhow::bail!("{} error(s), {} warning(s)", errors, warnings);
    }
    println!("{} error(s), {} warning(s)", errors, warnings);

    Ok(())
}
