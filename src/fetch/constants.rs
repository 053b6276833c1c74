//! Constants for the fetch module (endpoint, timeouts).

/// Item-lookup API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mercadolibre.com";

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total request timeout (30 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
