#![allow(dead_code)]

use economic_client::{ApiClient, Credential};
use mockito::{Mock, ServerGuard};

pub const SECRET: &str = "demo-secret";
pub const GRANT: &str = "demo-grant";

pub fn credential() -> Credential {
    Credential::new(SECRET, GRANT)
}

pub fn rest_client(server: &ServerGuard) -> ApiClient {
    ApiClient::rest(&credential())
        .expect("valid credential")
        .with_base_url(server.url())
        .expect("mock server URL is absolute")
}

pub fn open_client(server: &ServerGuard) -> ApiClient {
    ApiClient::open(&credential())
        .expect("valid credential")
        .with_base_url(server.url())
        .expect("mock server URL is absolute")
}

/// Empty REST collection with the given `self` link.
pub fn empty_collection(self_url: &str) -> String {
    serde_json::json!({
        "collection": [],
        "pagination": {"skipPages": 0, "pageSize": 100, "results": 0},
        "self": self_url,
    })
    .to_string()
}

/// Registers a mock that answers `method path` exactly once with a JSON body.
pub async fn expect_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock(method, path)
        .match_header("x-appsecrettoken", SECRET)
        .match_header("x-agreementgranttoken", GRANT)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

pub async fn assert_all(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert_async().await;
    }
}
