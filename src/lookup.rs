//! Single-listing lookup: validate, fetch, extract.
//!
//! ```text
//! Start -> Validated -> Fetched -> Extracted -> Done
//!   |          |
//!   +----------+--> Failed(kind)
//! ```
//!
//! Extraction is total, so nothing fails once the document is fetched.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::fetch::{FetchError, ItemClient};
use crate::item::{ExtractedInfo, ItemSummary, extract, summarize};
use crate::listing::ItemQuery;

/// Progress of a single lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupStage {
    #[default]
    Start,
    Validated,
    Fetched,
    Extracted,
    Done,
}

/// Successful lookup result handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupReport {
    /// Stage the lookup finished in; `Done` for every report `lookup_item` returns.
    #[serde(skip)]
    pub stage: LookupStage,
    pub summary: ItemSummary,
    #[serde(flatten)]
    pub info: ExtractedInfo,
}

/// Looks up one listing and extracts its photos and variation ids.
///
/// The raw identifier is trimmed and uppercased before use. Nothing is sent
/// when validation fails.
///
/// # Errors
///
/// Returns [`FetchError::Validation`] for a blank credential or a malformed
/// identifier, otherwise whatever [`ItemClient::fetch_item`] classified.
#[instrument(skip_all, fields(raw_item_id = %raw_item_id))]
pub async fn lookup_item(
    client: &ItemClient,
    raw_item_id: &str,
    client_id: &str,
) -> Result<LookupReport, FetchError> {
    let query = ItemQuery::parse(raw_item_id, client_id)?;
    debug!(stage = ?LookupStage::Validated, item_id = query.item_id(), "Identifier accepted");

    let record = client
        .fetch_item(query.item_id(), query.client_id())
        .await?;
    debug!(stage = ?LookupStage::Fetched, "Item document parsed");

    let mut report = LookupReport {
        stage: LookupStage::Extracted,
        summary: summarize(&record),
        info: extract(&record),
    };
    debug!(
        stage = ?report.stage,
        pictures = report.info.pictures.len(),
        variations = report.info.variation_ids.len(),
        "Item facts extracted"
    );

    report.stage = LookupStage::Done;
    debug!(stage = ?report.stage, "Lookup complete");
    Ok(report)
}
