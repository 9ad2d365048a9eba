mod common;

use common::{empty_collection, open_client, rest_client};
use economic_client::{ApiClient, Credential, Economic, RequestBody};
use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::{Value, json};

#[tokio::test]
async fn facade_routes_each_family_to_its_client() {
    let mut server = Server::new_async().await;
    let layouts = server
        .mock("GET", "/layouts?skippages=0&pagesize=100")
        .with_status(200)
        .with_body(empty_collection("layouts"))
        .create_async()
        .await;
    let projects = server
        .mock("GET", "/api/v22.0.0/projects")
        .with_status(200)
        .with_body(r#"{"items": [{"number": 1}], "cursor": 1}"#)
        .create_async()
        .await;

    let economic = Economic::from_clients(rest_client(&server), open_client(&server));
    economic
        .layouts
        .get(Default::default())
        .await
        .expect("layouts");
    let all = economic.projects.get_all().await.expect("projects");

    layouts.assert_async().await;
    projects.assert_async().await;
    assert_eq!(all.data.items.len(), 1);
}

#[tokio::test]
async fn missing_grant_token_is_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/self")
        .match_header("x-appsecrettoken", "only-secret")
        .match_header("x-agreementgranttoken", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"agreementNumber": 1}"#)
        .create_async()
        .await;

    let credential = Credential::default().with_secret_token("only-secret");
    let client = ApiClient::rest(&credential)
        .expect("client")
        .with_base_url(server.url())
        .expect("base url");
    economic_client::rest::SelfInfo::from_client(client)
        .get()
        .await
        .expect("self");

    mock.assert_async().await;
}

#[tokio::test]
async fn raw_requests_pass_json_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v22.0.0/employeegroups")
        .match_body(Matcher::Json(json!({"name": "Ops"})))
        .with_status(201)
        .with_body(r#"{"number": 9, "name": "Ops"}"#)
        .create_async()
        .await;

    let response = open_client(&server)
        .request::<Value>(
            Method::POST,
            "api/v22.0.0/employeegroups",
            Some(RequestBody::Json(json!({"name": "Ops"}))),
        )
        .await
        .expect("raw request");

    mock.assert_async().await;
    assert_eq!(response.status, 201);
    assert_eq!(response.data["number"], 9);
    assert_eq!(response.request.method, Method::POST);
}

#[tokio::test]
async fn undecodable_success_body_is_a_json_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/currencies/DKK")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let error = economic_client::rest::Currencies::from_client(rest_client(&server))
        .get_for("DKK")
        .await
        .expect_err("html is not json");

    assert!(matches!(error, economic_client::ClientError::Json(_)));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let client = ApiClient::rest(&common::credential())
        .expect("client")
        .with_base_url("http://127.0.0.1:1")
        .expect("base url");

    let error = economic_client::rest::Units::from_client(client)
        .get_for(1)
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(error, economic_client::ClientError::Request(_)));
    assert_eq!(error.status(), None);
    assert_eq!(error.error_description(), None);
}
