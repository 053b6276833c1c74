//! Item-lookup API response types.
//!
//! Only the fields the tool reads are modelled; everything else in the
//! document is ignored. Absent keys and explicit `null` both deserialize to
//! `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A listing document returned by `GET /items/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub currency_id: Option<String>,
    pub pictures: Option<Vec<Picture>>,
    pub variations: Option<Vec<Variation>>,
    /// Kept untyped so nothing inside it can fail a lookup.
    pub attributes: Option<Vec<serde_json::Value>>,
}

/// A photo entry from `pictures`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Picture {
    pub secure_url: String,
}

/// A purchasable configuration from `variations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variation {
    pub id: VariationId,
}

/// Opaque variation identifier, sent by the API as either a number or a string.
///
/// Numbers are carried as received, so negative and fractional ids survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariationId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for VariationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for VariationId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<u64> for VariationId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<i64> for VariationId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}
