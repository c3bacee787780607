//! HTTP-level tests for NetBoxClient against a wiremock server
//!
//! No NetBox instance required.

mod common;

use common::client_for;
use netbox_client::smoke::{self, ResourceCategory};
use netbox_client::{
    Configuration, DataSource, NetBoxClient, NetBoxError, Prefix, Site, SmokeFailure, Tenant,
    WirelessLan,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

fn status_body() -> serde_json::Value {
    json!({
        "django-version": "5.0.9",
        "installed-apps": {"rest_framework": "3.15.2"},
        "netbox-version": "4.1.6",
        "plugins": {},
        "python-version": "3.12.3",
        "rq-workers-running": 1
    })
}

fn empty_page() -> serde_json::Value {
    json!({"count": 0, "next": null, "previous": null, "results": []})
}

/// Serve the server's auth policy: status is open, everything else needs `TOKEN`.
async fn mount_netbox(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(header("authorization", format!("Token {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .with_priority(10)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})),
        )
        .with_priority(20)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_status_returns_versions_with_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status/"))
        .and(header("authorization", format!("Token {TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let resp = client.status().await.expect("status succeeds");

    assert_eq!(resp.status_code(), 200);
    assert_eq!(resp.data.netbox_version(), Some("4.1.6"));
    assert!(resp.data.missing_version_keys().is_empty());
}

#[tokio::test]
async fn test_list_decodes_count_and_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tenancy/tenants/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "url": format!("{}/api/tenancy/tenants/1/", server.uri()), "display": "Acme", "name": "Acme", "slug": "acme"},
                {"id": 2, "url": format!("{}/api/tenancy/tenants/2/", server.uri()), "display": "Globex", "name": "Globex", "slug": "globex"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let resp = client.list::<Tenant>(&[]).await.expect("tenants list succeeds");

    assert_eq!(resp.status_code(), 200);
    assert_eq!(resp.data.count(), 2);
    assert_eq!(resp.data.results[1].slug, "globex");
}

#[tokio::test]
async fn test_filters_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ipam/prefixes/"))
        .and(query_param("status", "active"))
        .and(query_param("q", "10.0.0.0/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let resp = client
        .list::<Prefix>(&[("status", "active"), ("q", "10.0.0.0/8")])
        .await
        .expect("filtered list succeeds");

    assert_eq!(resp.data.count(), 0);
}

#[tokio::test]
async fn test_list_all_follows_next_links() {
    let server = MockServer::start().await;
    let page_two = format!("{}/api/wireless/wireless-lans/?limit=1&offset=1", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/wireless/wireless-lans/"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null,
            "results": [{"id": 2, "ssid": "guest", "status": {"value": "active", "label": "Active"}}]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/wireless/wireless-lans/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": page_two, "previous": null,
            "results": [{"id": 1, "ssid": "corp", "status": {"value": "active", "label": "Active"}, "auth_type": {"value": "wpa-enterprise", "label": "WPA Enterprise"}}]
        })))
        .with_priority(5)
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let lans = client.list_all::<WirelessLan>(&[]).await.expect("all pages succeed");

    let ssids: Vec<&str> = lans.iter().map(|l| l.ssid.as_str()).collect();
    assert_eq!(ssids, vec!["corp", "guest"]);
    assert!(lans[1].auth_type.is_none());
}

#[tokio::test]
async fn test_retrieve_hits_object_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/core/data-sources/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "name": "configs",
            "type": {"value": "git", "label": "Git"},
            "source_url": "https://git.example.com/netbox-configs.git",
            "enabled": true,
            "status": {"value": "completed", "label": "Completed"},
            "last_synced": "2024-06-01T08:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let source = client
        .retrieve::<DataSource>(5)
        .await
        .expect("retrieve succeeds")
        .into_inner();

    assert_eq!(source.name, "configs");
    assert_eq!(source.status.value_str(), Some("completed"));
    assert!(source.last_synced.is_some());
}

#[tokio::test]
async fn test_missing_object_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "No Tenant matches the given query."})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let err = client.retrieve::<Tenant>(999).await.expect_err("404 is an error");

    assert!(matches!(err, NetBoxError::NotFound(_)));
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let err = client.list::<Tenant>(&[]).await.expect_err("500 is an error");

    match err {
        NetBoxError::Api(msg) => assert!(msg.contains("500")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_html_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>login</body></html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);
    let err = client.list::<Tenant>(&[]).await.expect_err("html is not JSON");

    assert!(matches!(err, NetBoxError::Decode(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_no_content_fails_status_check_not_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), TOKEN);

    let err = client.list::<Site>(&[]).await.expect_err("nothing to decode");
    assert!(matches!(err, NetBoxError::EmptyBody(204)));

    let failure = smoke::run_check(&client, ResourceCategory::Sites)
        .await
        .expect_err("204 is not 200");
    assert!(
        matches!(failure, SmokeFailure::UnexpectedStatus { actual: 204, .. }),
        "unexpected failure: {failure:?}"
    );
}

#[tokio::test]
async fn test_invalid_token_fails_lists_but_not_status() {
    let server = MockServer::start().await;
    mount_netbox(&server).await;

    let client = client_for(&server.uri(), "not-a-real-token");

    let status = client.status().await.expect("status is served anonymously");
    assert_eq!(status.status_code(), 200);

    let err = client.list::<Tenant>(&[]).await.expect_err("tenants need a token");
    assert!(matches!(err, NetBoxError::Authentication(_)));

    let err = client.validate_token().await.expect_err("token check needs a token");
    assert!(matches!(err, NetBoxError::Authentication(_)));
}

#[tokio::test]
async fn test_smoke_suite_passes_with_valid_token() {
    let server = MockServer::start().await;
    mount_netbox(&server).await;

    let client = client_for(&server.uri(), TOKEN);
    client.validate_token().await.expect("token accepted");

    for (category, outcome) in smoke::run_all(&client).await {
        let report = outcome.unwrap_or_else(|f| panic!("{category} failed: {f}"));
        assert_eq!(report.status, 200);
    }
}

#[tokio::test]
async fn test_smoke_suite_with_invalid_token_only_passes_status() {
    let server = MockServer::start().await;
    mount_netbox(&server).await;

    let client = client_for(&server.uri(), "not-a-real-token");

    for (category, outcome) in smoke::run_all(&client).await {
        match (category, outcome) {
            (ResourceCategory::Status, outcome) => {
                assert!(outcome.is_ok(), "status should pass: {outcome:?}");
            }
            (_, Err(SmokeFailure::Request { source: NetBoxError::Authentication(_), .. })) => {}
            (category, other) => panic!("{category}: expected auth failure, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on the discard port.
    let client = client_for("http://127.0.0.1:9", TOKEN);

    let err = client.status().await.expect_err("no server");
    assert!(err.is_transport(), "expected transport error, got {err:?}");

    for (category, outcome) in smoke::run_all(&client).await {
        match outcome {
            Err(SmokeFailure::Request { source, .. }) => {
                assert!(source.is_transport(), "{category}: {source:?}");
            }
            other => panic!("{category}: expected transport failure, got {other:?}"),
        }
    }
}

#[test]
fn test_default_fixture_is_reproducible() {
    let first = Configuration::from_lookup(|_| None);
    let second = Configuration::from_lookup(|_| None);
    assert_eq!(first, second);

    let a = NetBoxClient::from_config(&first).expect("client builds");
    let b = NetBoxClient::from_config(&second).expect("client builds");
    assert_eq!(a.base_url(), "http://localhost:8000");
    assert_eq!(a.base_url(), b.base_url());
}
