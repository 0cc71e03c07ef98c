//! The `list` command: every stored memory, unfiltered.

use super::open_manager;
use crate::render;
use secondbrain_core::Config;

/// Run the list command.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let manager = open_manager(&config)?;

    let records = manager.list_all().await?;
    if records.is_empty() {
        render::render_info("No memories stored yet.");
        return Ok(());
    }

    for record in &records {
        render::render_listing(record);
    }
    tracing::debug!(count = records.len(), "Listed memories");

    Ok(())
}
