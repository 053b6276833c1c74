#![allow(dead_code)]

pub mod socket_guard;

use meli_fetcher_core::{ClientOptions, ItemClient};

/// Client pointed at a mock server with default timeouts.
pub fn client_for(base_url: &str) -> ItemClient {
    ItemClient::with_options(ClientOptions {
        base_url: base_url.to_string(),
        ..ClientOptions::default()
    })
    .expect("client should build for mock server URL")
}

/// Expected User-Agent header value.
pub fn expected_user_agent() -> String {
    format!("MeliItemFetcherApp/{}", env!("CARGO_PKG_VERSION"))
}
