//! Fixed User-Agent identifying this tool to the item-lookup API.

/// Application name sent in the User-Agent header.
const APP_NAME: &str = "MeliItemFetcherApp";

/// User-Agent for item lookups: `MeliItemFetcherApp/<crate version>`.
#[must_use]
pub fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("{APP_NAME}/{version}")
}
