//! Listing identifier normalization and validation.
//!
//! A raw identifier typed by the user (`" mlb123 "`) is trimmed and uppercased,
//! then checked against the marketplace prefix. Together with the client id it
//! forms an [`ItemQuery`], the only input the lookup pipeline accepts.

mod error;

pub use error::ValidationError;

/// Three-letter prefix every listing identifier on the Brazilian site carries.
pub const MARKETPLACE_PREFIX: &str = "MLB";

/// Trims and uppercases a raw listing identifier.
#[must_use]
pub fn normalize_item_id(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Normalizes and validates a raw listing identifier.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyItemId`] for blank input and
/// [`ValidationError::MissingPrefix`] when the identifier does not start with
/// [`MARKETPLACE_PREFIX`].
pub fn validate_item_id(raw: &str) -> Result<String, ValidationError> {
    let item_id = normalize_item_id(raw);
    if item_id.is_empty() {
        return Err(ValidationError::EmptyItemId);
    }
    if !item_id.starts_with(MARKETPLACE_PREFIX) {
        return Err(ValidationError::missing_prefix(&item_id));
    }
    Ok(item_id)
}

/// Validated lookup input: a normalized listing identifier plus the API client id.
#[derive(Clone, PartialEq, Eq)]
pub struct ItemQuery {
    item_id: String,
    client_id: String,
}

impl ItemQuery {
    /// Builds a query from raw user input.
    ///
    /// The credential is checked first so a missing client id is reported even
    /// when the identifier is also malformed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the client id is blank or the identifier
    /// fails [`validate_item_id`].
    pub fn parse(raw_item_id: &str, client_id: &str) -> Result<Self, ValidationError> {
        let client_id = client_id.trim();
        if client_id.is_empty() {
            return Err(ValidationError::EmptyClientId);
        }
        let item_id = validate_item_id(raw_item_id)?;
        Ok(Self {
            item_id,
            client_id: client_id.to_string(),
        })
    }

    /// The normalized listing identifier.
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// The API client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl std::fmt::Debug for ItemQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemQuery")
            .field("item_id", &self.item_id)
            .field("client_id", &"<redacted>")
            .finish()
    }
}
