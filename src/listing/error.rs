//! Error types for listing identifier and credential validation.

use thiserror::Error;

/// Errors detected before any network access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No listing identifier was supplied (or it was only whitespace)
    #[error("listing identifier is empty\n  Suggestion: Enter an identifier such as MLB1234567890")]
    EmptyItemId,

    /// The identifier does not start with the marketplace prefix
    #[error(
        "invalid listing identifier '{item_id}': must start with 'MLB'\n  Suggestion: Enter an identifier such as MLB1234567890"
    )]
    MissingPrefix {
        /// The normalized identifier that was rejected
        item_id: String,
    },

    /// No client id (APP_ID) was supplied
    #[error(
        "client id (APP_ID) is not configured\n  Suggestion: Set the MELI_APP_ID environment variable or pass --client-id"
    )]
    EmptyClientId,
}

impl ValidationError {
    /// Creates a `MissingPrefix` error for the given identifier.
    #[must_use]
    pub fn missing_prefix(item_id: &str) -> Self {
        Self::MissingPrefix {
            item_id: item_id.to_string(),
        }
    }
}
