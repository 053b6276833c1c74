//! Mercado Livre Item Lookup Library
//!
//! Looks up a single listing through the public item-lookup API and derives
//! its ordered photo URLs and variation identifiers.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`listing`] - Identifier normalization and validation
//! - [`fetch`] - HTTP client for `GET /items/{id}` with failure classification
//! - [`item`] - Response document types and pure extraction
//! - [`lookup`] - Validate → fetch → extract pipeline
//!
//! The credential is always passed in by the caller; nothing here reads the
//! environment or prints.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
pub mod item;
pub mod listing;
pub mod lookup;
#[cfg(test)]
pub mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use fetch::{
    ClientBuildError, ClientOptions, FetchError, ItemClient, ResponseBody, TransportKind,
};
pub use item::{
    ExtractedInfo, ItemRecord, ItemSummary, Picture, Variation, VariationId, extract, summarize,
};
pub use listing::{ItemQuery, MARKETPLACE_PREFIX, ValidationError, normalize_item_id, validate_item_id};
pub use lookup::{LookupReport, LookupStage, lookup_item};
