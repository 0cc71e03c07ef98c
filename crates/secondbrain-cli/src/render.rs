//! Terminal rendering of memories.

use chrono::NaiveDate;
use console::{style, Emoji};
use secondbrain_memory::MemoryRecord;

static SAVED: Emoji = Emoji("✅ ", "+ ");
static MEMORY: Emoji = Emoji("📘 ", "");
static NOTE: Emoji = Emoji("📝 ", "");
static DATE: Emoji = Emoji("📅 ", "");
static SUMMARY: Emoji = Emoji("🧠 ", "");
static IMAGE: Emoji = Emoji("🖼  ", "");

const RULE: &str = "---";

/// Confirmation after a memory was stored.
pub fn render_saved(reminder: Option<NaiveDate>) {
    match reminder {
        Some(date) => println!(
            "{}{} Reminder set for {}",
            SAVED,
            style("Memory saved!").green().bold(),
            date
        ),
        None => println!("{}{}", SAVED, style("Memory saved!").green().bold()),
    }
}

fn render_image(record: &MemoryRecord) {
    match record.image() {
        Some(path) => println!("{}{}", IMAGE, style(path.display()).dim()),
        None => println!("{}", style("No image available for this memory.").dim()),
    }
}

/// A search hit.
pub fn render_memory(record: &MemoryRecord) {
    println!("{}{} {}", MEMORY, style("Memory:").bold(), record.text);
    if let Some(date) = record.reminder_date {
        println!("{}{} {}", DATE, style("Reminder Date:").bold(), style(date).cyan());
    }
    if let Some(summary) = &record.summary {
        println!("{}{} {}", SUMMARY, style("Summary:").bold(), summary);
    }
    render_image(record);
    println!("{}", RULE);
}

/// An entry in the full listing.
pub fn render_listing(record: &MemoryRecord) {
    println!("{}{}", NOTE, record.text);
    match record.reminder_date {
        Some(date) => println!("{}{}", DATE, date),
        None => println!("{}{}", DATE, style("no reminder").dim()),
    }
    if let Some(summary) = &record.summary {
        println!("{}{}", SUMMARY, summary);
    }
    render_image(record);
    println!("{}", RULE);
}

/// Informational line, e.g. an empty result.
pub fn render_info(message: &str) {
    println!("{}", style(message).yellow());
}
