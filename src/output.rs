use anyhow::Result;
use chrono::{Duration, Utc};
use colored::Colorize;

use crate::api::SearchOutcome;

/// Print one result set as human-readable text.
pub fn print_text(outcome: &SearchOutcome, query: &str, days: u32) {
    let since = (Utc::now() - Duration::days(i64::from(days))).format("%Y-%m-%d");
    println!(
        "{} {} {}",
        "Results for".bold(),
        query.cyan().bold(),
        format!("(since {since})").dimmed()
    );

    if outcome.repos.is_empty() {
        println!("{}", "No matching repositories".dimmed());
    } else {
        println!();
        println!("{}", "Repositories".bold().underline());
        for repo in &outcome.repos {
            println!("  {}", repo.full_name.green().bold());
            if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                println!("    {description}");
            }
        }
    }

    if !outcome.summary.is_empty() {
        println!();
        println!("{}", "AI Summary".bold().underline());
        println!("{}", outcome.summary);
    }
}

/// Print one result set as JSON, mirroring the backend's response shape.
pub fn print_json(outcome: &SearchOutcome) -> Result<()> {
    let value = serde_json::json!({
        "repos": outcome.repos,
        "summary": outcome.summary,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
