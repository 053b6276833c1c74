//! Refused connections, unresolvable hosts, slow servers, server errors.
//! Assert every transport failure is classified and nothing is retried.

use std::net::TcpListener;
use std::time::Duration;

use meli_fetcher_core::{ClientOptions, FetchError, ItemClient, TransportKind, lookup_item};
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use crate::support::socket_guard::{localhost_unavailable, start_mock_server_or_skip};

/// Returns a localhost URL whose port has nothing listening.
fn closed_port_url() -> Option<String> {
    let listener = TcpListener::bind("127.0.0.1:0").ok()?;
    let port = listener.local_addr().ok()?.port();
    drop(listener);
    Some(format!("http://127.0.0.1:{port}"))
}

#[tokio::test]
async fn p0_connection_refused_is_transport_connect() {
    if localhost_unavailable() {
        return;
    }
    let Some(base_url) = closed_port_url() else {
        return;
    };

    let client = ItemClient::with_options(ClientOptions {
        base_url,
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
    })
    .expect("client");

    let err = lookup_item(&client, "MLB1", "app").await.unwrap_err();
    match err {
        FetchError::Transport { kind, .. } => assert_eq!(kind, TransportKind::Connect),
        other => panic!("Expected Transport, got: {other:?}"),
    }
}

#[tokio::test]
async fn p0_unresolvable_host_is_transport_error() {
    let client = ItemClient::with_options(ClientOptions {
        base_url: "http://item-api.invalid".to_string(),
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
    })
    .expect("client");

    let err = lookup_item(&client, "MLB1", "app").await.unwrap_err();
    assert_eq!(err.kind(), "transport", "got: {err:?}");
    assert!(err.response_body().is_none());
}

#[tokio::test]
async fn p0_slow_server_times_out_once_without_retry() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ItemClient::with_options(ClientOptions {
        base_url: mock_server.uri(),
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_millis(300),
    })
    .expect("client");

    let err = lookup_item(&client, "MLB1", "app").await.unwrap_err();
    assert!(err.is_timeout(), "Expected timeout, got: {err:?}");
    assert!(err.to_string().contains("timed out"), "{err}");
}

#[tokio::test]
async fn p0_server_error_is_reported_once() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = crate::support::client_for(&mock_server.uri());
    let err = lookup_item(&client, "MLB1", "app").await.unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 500, .. }));
    assert_eq!(err.response_body().unwrap(), "internal");
}
