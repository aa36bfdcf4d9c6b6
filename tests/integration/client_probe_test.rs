//! Integration Test: 管理APIクライアントのプローブ挙動
//!
//! HTTPレスポンス・接続失敗・不正ボディが Probe にどう写像されるかを
//! モックサーバー越しに検証する。

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use louiectl::types::KillswitchRequest;

use crate::support::admin::{
    client_for, client_for_url, mount_success, UNUSED_PORT_URL,
};

#[tokio::test]
async fn test_get_returns_status_and_envelope() {
    let server = MockServer::start().await;
    mount_success(&server, "admin/overview", json!({ "users": { "total": 1 } })).await;

    let client = client_for(&server);
    let probe = client.get("admin/overview").await;

    assert_eq!(probe.status(), 200);
    assert!(probe.is_ok());
    assert_eq!(probe.payload()["data"]["users"]["total"], 1);
}

#[tokio::test]
async fn test_bearer_token_attached_to_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/overview"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let probe = client.get("admin/overview").await;

    // ヘッダー不一致ならモックに当たらず404になる
    assert_eq!(probe.status(), 200);
}

#[tokio::test]
async fn test_connection_refused_maps_to_sentinel() {
    let client = client_for_url(UNUSED_PORT_URL);
    let probe = client.get("admin/overview").await;

    assert_eq!(probe.status(), 0);
    assert_eq!(probe.payload(), json!({ "error": "Connection refused" }));
    assert!(!probe.is_ok());
}

#[tokio::test]
async fn test_non_200_status_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stripe"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "success": false,
            "message": "Stripe unreachable",
            "data": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let probe = client.get("admin/stripe").await;

    assert_eq!(probe.status(), 503);
    assert!(!probe.is_ok());
    assert_eq!(probe.payload()["message"], "Stripe unreachable");
}

#[tokio::test]
async fn test_empty_body_decodes_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/toggles"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let probe = client.get("admin/toggles").await;

    assert_eq!(probe.status(), 200);
    assert_eq!(probe.payload(), json!({}));
    // success フラグが無いので健全とは見なさない
    assert!(!probe.is_ok());
}

#[tokio::test]
async fn test_malformed_body_reports_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let probe = client.get("admin/users").await;

    assert_eq!(probe.status(), 0);
    let payload = probe.payload();
    let message = payload["error"].as_str().unwrap_or_default();
    assert!(message.contains("Invalid JSON"), "got: {message}");
}

#[tokio::test]
async fn test_post_sends_exact_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/killswitch"))
        .and(body_json(json!({
            "module": "stripe",
            "enabled": false,
            "reason": "manual-cli"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Killswitch disabled for stripe",
            "data": { "module": "stripe", "enabled": false }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = KillswitchRequest::new("stripe", false, "manual-cli");
    let probe = client.post("admin/killswitch", &request).await;

    assert!(probe.is_ok());
}

#[tokio::test]
async fn test_trailing_slash_base_url_still_resolves() {
    let server = MockServer::start().await;
    mount_success(&server, "admin/environment", json!({ "env": "test" })).await;

    let client = client_for_url(&format!("{}/", server.uri()));
    let probe = client.get("admin/environment").await;
    assert_eq!(probe.status(), 200);
}
