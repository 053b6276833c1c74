//! HTTP client for the item-lookup endpoint.
//!
//! [`ItemClient`] issues exactly one `GET {base}/items/{id}?client_id={cid}`
//! per call and classifies the outcome into [`FetchError`]. It never retries.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::body::ResponseBody;
use super::constants::{CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS};
use super::error::{ClientBuildError, FetchError};
use crate::item::ItemRecord;
use crate::listing::ValidationError;
use crate::user_agent;

/// Construction options for [`ItemClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API host, e.g. `https://api.mercadolibre.com`.
    pub base_url: String,
    /// Time allowed to establish the connection.
    pub connect_timeout: Duration,
    /// Time allowed for the whole request, body included.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Item-lookup API client.
///
/// Idle connections are not kept, so each lookup opens and releases its own
/// connection.
///
/// # Example
///
/// ```no_run
/// use meli_fetcher_core::ItemClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ItemClient::new()?;
/// let record = client.fetch_item("MLB1234567890", "my-app-id").await?;
/// println!("{:?}", record.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ItemClient {
    client: Client,
    base_url: Url,
}

impl ItemClient {
    /// Creates a client for the public API with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a client with explicit options (custom host for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::InvalidBaseUrl`] when the base URL does not
    /// parse or cannot carry a path, and [`ClientBuildError::Http`] when reqwest
    /// rejects the configuration.
    pub fn with_options(options: ClientOptions) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(&options.base_url)
            .map_err(|e| ClientBuildError::invalid_base_url(&options.base_url, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::invalid_base_url(
                &options.base_url,
                "URL cannot carry a path",
            ));
        }

        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .pool_max_idle_per_host(0)
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The configured API host.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one listing document.
    ///
    /// Both arguments are used as given; normalization is the caller's job
    /// (see [`ItemQuery`](crate::ItemQuery)).
    ///
    /// # Errors
    ///
    /// - [`FetchError::Validation`] if either argument is empty (no request is sent)
    /// - [`FetchError::Transport`] on DNS/connect/TLS failures and timeouts
    /// - [`FetchError::HttpStatus`] on a non-2xx response
    /// - [`FetchError::Decode`] when a 2xx body is not a listing document
    #[instrument(skip_all, fields(item_id = %item_id))]
    pub async fn fetch_item(&self, item_id: &str, client_id: &str) -> Result<ItemRecord, FetchError> {
        if item_id.is_empty() {
            return Err(ValidationError::EmptyItemId.into());
        }
        if client_id.is_empty() {
            return Err(ValidationError::EmptyClientId.into());
        }

        let url = self.item_url(item_id, client_id);
        debug!(host = ?self.base_url.host_str(), path = url.path(), "Requesting item");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(item_id, e))?;

        let status = response.status();
        let body = ResponseBody::from(
            response
                .bytes()
                .await
                .map_err(|e| FetchError::transport(item_id, e))?
                .to_vec(),
        );
        debug!(status = status.as_u16(), bytes = body.len(), "Item response received");

        if !status.is_success() {
            return Err(FetchError::http_status(item_id, status.as_u16(), body));
        }

        parse_item_record(item_id, body)
    }

    fn item_url(&self, item_id: &str, client_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected at construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["items", item_id]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("client_id", client_id);
        url
    }
}

/// Parses a 2xx body into an [`ItemRecord`], keeping the raw body on failure.
fn parse_item_record(item_id: &str, body: ResponseBody) -> Result<ItemRecord, FetchError> {
    let value: serde_json::Value = match serde_json::from_slice(body.as_bytes()) {
        Ok(value) => value,
        Err(e) => return Err(FetchError::decode(item_id, body, e.to_string())),
    };
    if !value.is_object() {
        return Err(FetchError::decode(
            item_id,
            body,
            "expected a JSON object at the top level",
        ));
    }
    serde_json::from_value(value).map_err(|e| FetchError::decode(item_id, body, e.to_string()))
}
