//! Pure extraction of photo URLs and variation ids from an [`ItemRecord`].

use serde::Serialize;

use super::record::{ItemRecord, VariationId};

/// Facts derived from a listing document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedInfo {
    /// Secure photo URLs, in document order.
    pub pictures: Vec<String>,
    /// Variation identifiers, in document order.
    pub variation_ids: Vec<VariationId>,
}

/// Header facts shown above the extracted lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub currency_id: Option<String>,
}

/// Derives photo URLs and variation ids from a listing document.
///
/// Missing or empty `pictures`/`variations` yield empty lists. No other field
/// influences the result.
#[must_use]
pub fn extract(record: &ItemRecord) -> ExtractedInfo {
    let pictures = record
        .pictures
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|picture| picture.secure_url.clone())
        .collect();

    let variation_ids = record
        .variations
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|variation| variation.id.clone())
        .collect();

    ExtractedInfo {
        pictures,
        variation_ids,
    }
}

/// Copies the id, title and price out of a listing document.
#[must_use]
pub fn summarize(record: &ItemRecord) -> ItemSummary {
    ItemSummary {
        id: record.id.clone(),
        title: record.title.clone(),
        price: record.price,
        currency_id: record.currency_id.clone(),
    }
}
