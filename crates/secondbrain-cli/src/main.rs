//! SecondBrain CLI entry point.

use clap::Parser;
use secondbrain_cli::{run, Cli};
use secondbrain_core::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env::load_dotenv()?;

    let config = cli.load_config();

    // Logging level comes from the config file unless RUST_LOG or -v says otherwise
    let level = match cli.verbose {
        0 => config
            .as_ref()
            .map(|config| config.logging.level.as_str())
            .unwrap_or("info"),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("secondbrain={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli, config).await
}
