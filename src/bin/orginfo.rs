//! Operator CLI for the orginfo.uz lookup pipeline.
//!
//! Runs the same services as the HTTP server, without the server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve free text (prompts when TEXT is omitted)
//! cargo run --bin orginfo -- resolve "ООО Ромашка Ташкент"
//!
//! # Parse a saved registry page offline
//! cargo run --bin orginfo -- parse page.html
//! cargo run --bin orginfo -- parse page.html --json
//!
//! # Show which collaborators are configured
//! cargo run --bin orginfo -- providers
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `robot_backend::config`.

use robot_backend::config::{self, Config};
use robot_backend::domain::formatter::format_record;
use robot_backend::infrastructure::markup::extract_fields;
use robot_backend::server::build_state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI tool for orginfo.uz lookups.
#[derive(Parser)]
#[command(name = "orginfo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve free text into organization cards
    Resolve {
        /// Tax ID, company name, director name or a registry link
        text: Option<String>,
    },

    /// Extract fields from a saved registry page
    Parse {
        /// HTML file downloaded from orginfo.uz
        file: PathBuf,

        /// Print the extracted record as JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Show configured collaborators in chain order
    Providers,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Fallback warnings go to stderr so they do not mix with the answer
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { text } => resolve(text).await?,
        Commands::Parse { file, json } => parse(file, json)?,
        Commands::Providers => providers()?,
    }

    Ok(())
}

/// Runs the resolution pipeline and prints the answer.
async fn resolve(text: Option<String>) -> Result<()> {
    let config = config::load_from_env().context("Failed to load configuration")?;
    let state = build_state(&config)?;

    let text = match text {
        Some(t) => t,
        None => Input::new()
            .with_prompt("ИНН, название или ФИО руководителя")
            .interact_text()?,
    };

    println!("{}", "🔎 Resolving...".bright_blue().bold());
    println!();

    let answer = state
        .resolution_service
        .resolve_organization_query(&text)
        .await;

    println!("{}", answer);
    println!();

    Ok(())
}

/// Extracts and prints a saved page. Needs no configuration or network.
fn parse(file: PathBuf, json: bool) -> Result<()> {
    let html = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let record = extract_fields(&html);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    if record.is_empty() {
        println!("{}", "⚠️  No organization fields found".yellow());
        println!();
    }

    println!("{}", format_record(&record));

    Ok(())
}

/// Lists every collaborator with its credential state.
///
/// # Output Format
///
/// ```text
/// 🔌 Collaborators
///
///   Completion API   gpt-4o-mini     CONFIGURED
///   serpapi          search #1       DISABLED
///   google_cse       search #2       CONFIGURED
/// ```
fn providers() -> Result<()> {
    let config = config::load_from_env().context("Failed to load configuration")?;
    let state = build_state(&config)?;

    println!("{}", "🔌 Collaborators".bright_blue().bold());
    println!();

    println!(
        "  {:<16} {:<15} {}",
        "Completion API".cyan(),
        config.openai_model.bright_black(),
        status_label(state.ask_service.is_configured())
    );

    for (position, provider) in state
        .resolution_service
        .chain()
        .provider_status()
        .iter()
        .enumerate()
    {
        println!(
            "  {:<16} {:<15} {}",
            provider.name.cyan(),
            format!("search #{}", position + 1).bright_black(),
            status_label(provider.configured)
        );
    }

    println!();
    print_hints(&config);

    Ok(())
}

fn status_label(configured: bool) -> ColoredString {
    if configured {
        "CONFIGURED".green()
    } else {
        "DISABLED".red()
    }
}

fn print_hints(config: &Config) {
    if config.serpapi_key.is_none() && !config.is_google_cse_enabled() {
        println!(
            "{}",
            "⚠️  No search provider configured: only direct registry links will resolve."
                .yellow()
        );
        println!(
            "  Set {} or both {} and {}",
            "SERPAPI_KEY".bright_cyan(),
            "GOOGLE_API_KEY".bright_cyan(),
            "GOOGLE_CSE_ID".bright_cyan()
        );
        println!();
    }
}
