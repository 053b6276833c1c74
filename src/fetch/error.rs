//! Error types for the fetch module.
//!
//! [`FetchError`] is the classified outcome of a failed lookup. None of the
//! messages include the request URL, since its query string carries the
//! client id.

use thiserror::Error;

use super::body::ResponseBody;
use crate::listing::ValidationError;
use crate::lookup::LookupStage;

/// Transport-level failure subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or total request timeout elapsed.
    Timeout,
    /// DNS resolution, refused connection, or TLS handshake failure.
    Connect,
    /// Anything else the transport reported (e.g. the body stream broke).
    Other,
}

impl TransportKind {
    /// Classifies a reqwest error.
    #[must_use]
    pub fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect
        } else {
            Self::Other
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Timeout => "request timed out",
            Self::Connect => "cannot connect to the item API",
            Self::Other => "network error",
        }
    }
}

/// Errors that terminate a single item lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Malformed or missing identifier/credential, detected before any I/O.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced a complete HTTP response.
    #[error("{} fetching {item_id}: {source}", .kind.describe())]
    Transport {
        /// The listing being fetched.
        item_id: String,
        /// Failure subtype.
        kind: TransportKind,
        /// The underlying error, stripped of its URL.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("HTTP {status} fetching {item_id}")]
    HttpStatus {
        /// The listing being fetched.
        item_id: String,
        /// The HTTP status code.
        status: u16,
        /// Raw response body.
        body: ResponseBody,
    },

    /// The API answered 2xx but the body is not a listing document.
    #[error("unexpected response format for {item_id}: {reason}")]
    Decode {
        /// The listing being fetched.
        item_id: String,
        /// Raw response body.
        body: ResponseBody,
        /// Parser diagnostic.
        reason: String,
    },
}

impl FetchError {
    /// Creates a transport error, classifying its kind and dropping the URL.
    #[must_use]
    pub fn transport(item_id: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            item_id: item_id.into(),
            kind: TransportKind::classify(&source),
            source: source.without_url(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(
        item_id: impl Into<String>,
        status: u16,
        body: impl Into<ResponseBody>,
    ) -> Self {
        Self::HttpStatus {
            item_id: item_id.into(),
            status,
            body: body.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(
        item_id: impl Into<String>,
        body: impl Into<ResponseBody>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Decode {
            item_id: item_id.into(),
            body: body.into(),
            reason: reason.into(),
        }
    }

    /// Stable tag for the error class (`validation`, `transport`, `http_status`, `decode`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport { .. } => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode { .. } => "decode",
        }
    }

    /// Raw response body, for status and decode failures.
    #[must_use]
    pub fn response_body(&self) -> Option<&ResponseBody> {
        match self {
            Self::HttpStatus { body, .. } | Self::Decode { body, .. } => Some(body),
            Self::Validation(_) | Self::Transport { .. } => None,
        }
    }

    /// The last stage the lookup reached before failing.
    #[must_use]
    pub fn failed_at(&self) -> LookupStage {
        match self {
            Self::Validation(_) => LookupStage::Start,
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::Decode { .. } => {
                LookupStage::Validated
            }
        }
    }

    /// Returns true for timeouts.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportKind::Timeout,
                ..
            }
        )
    }
}

/// Errors building an [`ItemClient`](super::ItemClient).
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The base URL does not parse or cannot carry path segments.
    #[error("invalid API base URL '{base_url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        base_url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// reqwest refused the client configuration.
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientBuildError {
    /// Creates an `InvalidBaseUrl` error.
    #[must_use]
    pub fn invalid_base_url(base_url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: reason.into(),
        }
    }
}
