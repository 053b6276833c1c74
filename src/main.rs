//! CLI entry point for the listing lookup tool.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use meli_fetcher_core::{FetchError, ItemClient, ValidationError, lookup_item};
use tracing::{debug, info};

mod cli;
mod output;
mod prompt;

use cli::{Args, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(
        item_id = ?args.item_id,
        base_url = %args.base_url,
        format = ?args.format,
        "CLI arguments parsed"
    );

    // Credential first: never prompt for an identifier that cannot be looked up.
    let Some(client_id) = args
        .client_id
        .as_deref()
        .map(str::trim)
        .filter(|client_id| !client_id.is_empty())
    else {
        report_failure(&FetchError::from(ValidationError::EmptyClientId), args.format)?;
        return Ok(());
    };

    let raw_item_id = match &args.item_id {
        Some(item_id) => item_id.clone(),
        None => prompt::read_item_id(&mut io::stdin().lock(), &mut io::stderr())
            .context("failed to read listing identifier from stdin")?,
    };

    let client = ItemClient::with_options(args.client_options())
        .context("failed to initialize the item API client")?;

    match lookup_item(&client, &raw_item_id, client_id).await {
        Ok(report) => {
            info!(
                pictures = report.info.pictures.len(),
                variations = report.info.variation_ids.len(),
                "Lookup complete"
            );
            match args.format {
                OutputFormat::Text => print!("{}", output::render_report_text(&report)),
                OutputFormat::Json => println!("{}", output::render_report_json(&report)?),
            }
        }
        Err(error) => {
            info!(kind = error.kind(), "Lookup failed");
            report_failure(&error, args.format)?;
        }
    }

    Ok(())
}

/// Writes a classified failure: text to stderr, JSON to stdout.
fn report_failure(error: &FetchError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => eprint!("{}", output::render_error_text(error)),
        OutputFormat::Json => println!("{}", output::render_error_json(error)?),
    }
    Ok(())
}
