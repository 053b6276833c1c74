//! Mock-server startup for sandboxes that may forbid binding localhost.
//!
//! A test that cannot bind returns early instead of failing. Set
//! `MELI_FETCHER_REQUIRE_SOCKET_TESTS=1` (CI) to turn that skip into a failure.
//! Shared with the library's unit tests through `src/test_support`.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

pub const REQUIRE_SOCKETS_ENV: &str = "MELI_FETCHER_REQUIRE_SOCKET_TESTS";

fn sockets_required() -> bool {
    std::env::var(REQUIRE_SOCKETS_ENV).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    })
}

/// True when no localhost port can be bound and the calling test should return.
#[track_caller]
#[must_use]
pub fn localhost_unavailable() -> bool {
    if TcpListener::bind("127.0.0.1:0").is_ok() {
        return false;
    }
    let caller = Location::caller();
    assert!(
        !sockets_required(),
        "{caller}: cannot bind a localhost socket and {REQUIRE_SOCKETS_ENV} is set"
    );
    eprintln!("{caller}: cannot bind a localhost socket, skipping mock-server test");
    true
}

/// Starts a wiremock server, or returns `None` when the test should skip.
pub async fn start_mock_server_or_skip() -> Option<MockServer> {
    if localhost_unavailable() {
        return None;
    }
    Some(MockServer::start().await)
}
