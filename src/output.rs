//! CLI output formatting for lookup results and classified errors.

use std::fmt::Write as _;

use meli_fetcher_core::{FetchError, ItemSummary, LookupReport};
use serde_json::json;

/// Placeholder for a header field the document did not carry.
const MISSING: &str = "N/A";

/// Message when the listing has no photos.
pub const NO_PICTURES_MESSAGE: &str = "No photos found for this listing.";

/// Message when the listing lists no variations.
pub const NO_VARIATIONS_MESSAGE: &str = "This listing has no variations.";

/// Renders a successful lookup as human-readable text.
pub fn render_report_text(report: &LookupReport) -> String {
    let mut out = render_summary(&report.summary);

    if report.info.pictures.is_empty() {
        let _ = writeln!(out, "\n{NO_PICTURES_MESSAGE}");
    } else {
        out.push_str("\nPhotos:\n");
        for (index, url) in report.info.pictures.iter().enumerate() {
            let _ = writeln!(out, "  {}: {url}", index + 1);
        }
    }

    if report.info.variation_ids.is_empty() {
        let _ = writeln!(out, "\n{NO_VARIATIONS_MESSAGE}");
    } else {
        out.push_str("\nVariation IDs:\n");
        for (index, id) in report.info.variation_ids.iter().enumerate() {
            let _ = writeln!(out, "  {}: {id}", index + 1);
        }
    }

    out
}

fn render_summary(summary: &ItemSummary) -> String {
    let title = summary.title.as_deref().unwrap_or(MISSING);
    let id = summary.id.as_deref().unwrap_or(MISSING);
    let currency = summary.currency_id.as_deref().unwrap_or_default();
    let price = summary
        .price
        .map_or_else(|| MISSING.to_string(), |price| price.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "--- Listing: {title} ---");
    let _ = writeln!(out, "ID: {id}");
    let _ = writeln!(out, "Price: {currency} {price}");
    out
}

/// Renders a classified failure as human-readable text.
///
/// Status and decode failures include the raw response body.
pub fn render_error_text(error: &FetchError) -> String {
    let headline = match error {
        FetchError::Validation(_) => format!("Error: {error}"),
        FetchError::Transport { .. } => format!("Request error: {error}"),
        FetchError::HttpStatus { .. } => format!("HTTP error: {error}"),
        FetchError::Decode { .. } => format!("Decode error: {error}"),
    };

    match error.response_body() {
        Some(body) => format!("{headline}\nResponse body: {body}\n"),
        None => format!("{headline}\n"),
    }
}

/// Renders a successful lookup as a JSON document.
pub fn render_report_json(report: &LookupReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Renders a classified failure as a JSON document.
pub fn render_error_json(error: &FetchError) -> serde_json::Result<String> {
    let mut detail = json!({
        "kind": error.kind(),
        "message": error.to_string(),
    });
    if let FetchError::HttpStatus { status, .. } = error {
        detail["status"] = json!(status);
    }
    if let Some(body) = error.response_body() {
        detail["body"] = json!(body.to_text());
    }
    serde_json::to_string_pretty(&json!({ "error": detail }))
}
