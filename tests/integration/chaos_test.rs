//! Integration Test: chaos モードのクリーンアップ保証
//!
//! どんな実行経路でも最後に全モジュールが宣言順に再有効化されることを
//! 実際のHTTPリクエスト列で検証する。

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use louiectl::cli::chaos;
use louiectl::registry::EndpointRegistry;

use crate::support::admin::client_for;

/// 全キルスイッチ操作を受理して記録するモックサーバ。
async fn killswitch_recorder() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/killswitch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Killswitch updated",
            "data": null
        })))
        .mount(&server)
        .await;
    server
}

fn request_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

#[tokio::test]
async fn test_zero_duration_still_runs_full_cleanup() {
    let server = killswitch_recorder().await;
    let client = client_for(&server);
    let registry = EndpointRegistry::new();

    chaos::execute(&client, &registry, 0).await.unwrap();

    // 期限0秒ではトグルは一度も走らず、クリーンアップだけが流れる
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), registry.modules().len());

    for (request, module) in requests.iter().zip(registry.modules()) {
        let body = request_body(request);
        assert_eq!(body["module"], *module);
        assert_eq!(body["enabled"], true);
        assert_eq!(body["reason"], "chaos-cleanup");
    }
}

#[tokio::test]
async fn test_short_run_toggles_then_cleans_up_in_order() {
    let server = killswitch_recorder().await;
    let client = client_for(&server);
    let registry = EndpointRegistry::new();

    chaos::execute(&client, &registry, 1).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let module_count = registry.modules().len();
    assert!(
        requests.len() > module_count,
        "expected at least one toggle before cleanup, got {} requests",
        requests.len()
    );

    let (toggles, cleanup) = requests.split_at(requests.len() - module_count);
    for request in toggles {
        let body = request_body(request);
        assert_eq!(body["reason"], "chaos-mode");
        let module = body["module"].as_str().unwrap();
        assert!(registry.modules().contains(&module));
    }
    for (request, module) in cleanup.iter().zip(registry.modules()) {
        let body = request_body(request);
        assert_eq!(body["module"], *module);
        assert_eq!(body["enabled"], true);
        assert_eq!(body["reason"], "chaos-cleanup");
    }
}
