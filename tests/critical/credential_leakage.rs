//! Assert the client id never appears in error messages or debug output.

use std::error::Error as _;
use std::net::TcpListener;
use std::time::Duration;

use meli_fetcher_core::{ClientOptions, FetchError, ItemClient, ItemQuery, lookup_item};
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use crate::support::socket_guard::{localhost_unavailable, start_mock_server_or_skip};

const SECRET_CLIENT_ID: &str = "secret-app-id-8675309";

/// Display, Debug and every source in the chain.
fn all_error_text(err: &FetchError) -> String {
    let mut text = format!("{err}\n{err:?}");
    let mut source = err.source();
    while let Some(inner) = source {
        text.push('\n');
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

#[tokio::test]
async fn p0_transport_error_does_not_contain_client_id() {
    if localhost_unavailable() {
        return;
    }
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let client = ItemClient::with_options(ClientOptions {
        base_url: format!("http://127.0.0.1:{port}"),
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
    })
    .expect("client");

    let err = lookup_item(&client, "MLB1", SECRET_CLIENT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "transport");
    let text = all_error_text(&err);
    assert!(
        !text.contains(SECRET_CLIENT_ID),
        "Transport error must not contain client id: {text}"
    );
}

#[tokio::test]
async fn p0_timeout_error_does_not_contain_client_id() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = ItemClient::with_options(ClientOptions {
        base_url: mock_server.uri(),
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_millis(200),
    })
    .expect("client");

    let err = lookup_item(&client, "MLB1", SECRET_CLIENT_ID)
        .await
        .unwrap_err();
    let text = all_error_text(&err);
    assert!(
        !text.contains(SECRET_CLIENT_ID),
        "Timeout error must not contain client id: {text}"
    );
}

#[tokio::test]
async fn p0_status_error_message_does_not_contain_client_id() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"invalid"}"#))
        .mount(&mock_server)
        .await;

    let client = crate::support::client_for(&mock_server.uri());
    let err = lookup_item(&client, "MLB1", SECRET_CLIENT_ID)
        .await
        .unwrap_err();
    assert!(!all_error_text(&err).contains(SECRET_CLIENT_ID));
}

#[test]
fn p0_item_query_debug_does_not_contain_client_id() {
    let query = ItemQuery::parse("MLB1", SECRET_CLIENT_ID).expect("valid query");
    let debug = format!("{query:?}");
    assert!(!debug.contains(SECRET_CLIENT_ID), "{debug}");
}
