use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::time::Duration;

use repotrend::{InteractiveApp, SummaryClient, TimeWindow, logging, output};

#[derive(Parser)]
#[command(
    name = "repotrend",
    version,
    about = "Search trending repositories by topic and time window, with an AI-generated summary",
    long_about = None
)]
struct Cli {
    /// Search topic (e.g. "robot", "AI", "python")
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Lookback window in days (180, 365 or 1095)
    #[arg(short, long, default_value_t = 180, value_parser = parse_days)]
    days: u32,

    /// Backend base URL
    #[arg(
        short,
        long,
        env = "REPOTREND_BACKEND",
        default_value = "http://127.0.0.1:5000"
    )]
    backend: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Output format (one-shot mode only)
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Interactive search mode
    #[arg(short = 'i', long)]
    interactive: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_days(s: &str) -> Result<u32, String> {
    let days: u32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if TimeWindow::from_days(days).is_none() {
        return Err(format!("unsupported window `{days}`; use 180, 365 or 1095"));
    }
    Ok(days)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    logging::init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let client = SummaryClient::new(cli.backend, Duration::from_secs(cli.timeout))?;
    let window = TimeWindow::from_days(cli.days).unwrap_or_default();

    // Interactive mode
    if cli.interactive {
        let mut app = InteractiveApp::new(client, cli.query, window);
        return app.run();
    }

    // One-shot mode: run a single search and print the result set.
    let query = cli.query.unwrap_or_default();
    let outcome = client.fetch_summary(&query, window.days())?;

    match cli.format {
        OutputFormat::Text => output::print_text(&outcome, &query, window.days()),
        OutputFormat::Json => output::print_json(&outcome)?,
    }

    Ok(())
}
