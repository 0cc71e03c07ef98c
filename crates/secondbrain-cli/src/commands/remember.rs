//! The `remember` command.

use super::{open_manager, parse_date};
use crate::render;
use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use clap::Args;
use secondbrain_core::Config;
use secondbrain_memory::NewMemory;
use std::path::{Path, PathBuf};

/// Image types accepted as attachments.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Remember command arguments.
#[derive(Args)]
pub struct RememberArgs {
    /// Describe this memory or just enter a note
    pub text: String,

    /// Attach an image (png, jpg, jpeg)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Reminder date (YYYY-MM-DD or 'today')
    #[arg(long, value_name = "DATE", value_parser = parse_date, conflicts_with_all = ["remind_in", "no_reminder"])]
    pub remind: Option<NaiveDate>,

    /// Set the reminder this many days from today
    #[arg(long, value_name = "DAYS", conflicts_with = "no_reminder")]
    pub remind_in: Option<u32>,

    /// Save without a reminder date
    #[arg(long)]
    pub no_reminder: bool,

    /// Attach a generated summary
    #[arg(long)]
    pub summarize: bool,
}

impl RememberArgs {
    /// Reminder date to store, falling back to `default_days` from today.
    pub fn reminder_date(&self, today: NaiveDate, default_days: u32) -> Option<NaiveDate> {
        if self.no_reminder {
            return None;
        }
        if let Some(date) = self.remind {
            return Some(date);
        }
        let days = self.remind_in.unwrap_or(default_days);
        today.checked_add_days(Days::new(u64::from(days)))
    }
}

fn read_image(path: &Path) -> anyhow::Result<Vec<u8>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        anyhow::bail!(
            "Unsupported image type {:?}; expected one of: {}",
            path,
            IMAGE_EXTENSIONS.join(", ")
        );
    }
    std::fs::read(path).with_context(|| format!("Failed to read image {:?}", path))
}

/// Run the remember command.
pub async fn run(args: RememberArgs, config: Config) -> anyhow::Result<()> {
    let mut memory = NewMemory::new(args.text.clone());
    memory.reminder_date =
        args.reminder_date(Local::now().date_naive(), config.reminders.default_days);
    memory.summarize = args.summarize;
    if let Some(path) = &args.image {
        memory.image = Some(read_image(path)?);
    }

    let manager = open_manager(&config)?;
    let reminder = memory.reminder_date;
    manager.create(memory).await?;

    render::render_saved(reminder);
    Ok(())
}
