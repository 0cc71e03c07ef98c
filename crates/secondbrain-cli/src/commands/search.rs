//! The `search` command.

use super::{open_manager, parse_date};
use crate::render;
use chrono::NaiveDate;
use clap::builder::RangedU64ValueParser;
use clap::Args;
use secondbrain_core::Config;
use secondbrain_memory::SearchQuery;

/// Search command arguments.
#[derive(Args)]
pub struct SearchArgs {
    /// Ask me anything...
    pub query: Option<String>,

    /// Only show reminders due on or before this date (YYYY-MM-DD or 'today')
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub due_by: Option<NaiveDate>,

    /// Number of nearest memories to consider (1-100)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=100))]
    pub limit: Option<usize>,
}

impl SearchArgs {
    /// Build the query, using the configured limit unless overridden.
    pub fn to_query(&self, default_limit: usize) -> SearchQuery {
        let query = SearchQuery::new(self.query.clone().unwrap_or_default())
            .with_limit(self.limit.unwrap_or(default_limit));
        match self.due_by {
            Some(date) => query.with_due_by(date),
            None => query,
        }
    }
}

/// Run the search command.
pub async fn run(args: SearchArgs, config: Config) -> anyhow::Result<()> {
    let query = args.to_query(config.search.limit);

    let manager = open_manager(&config)?;
    let mut results = manager.search(query).await?;

    let mut shown = 0;
    for record in results.by_ref() {
        render::render_memory(&record);
        shown += 1;
    }

    if shown == 0 {
        if results.candidate_count() == 0 {
            render::render_info("No relevant memories found.");
        } else {
            render::render_info("No memories match the query and filter.");
        }
    }

    Ok(())
}
