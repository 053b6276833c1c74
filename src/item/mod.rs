//! Listing documents and the facts derived from them.
//!
//! - [`ItemRecord`] - the parsed item-lookup response
//! - [`extract`] - photo URLs and variation ids, in document order
//! - [`summarize`] - id, title and price for display

mod extract;
mod record;

pub use extract::{ExtractedInfo, ItemSummary, extract, summarize};
pub use record::{ItemRecord, Picture, Variation, VariationId};
