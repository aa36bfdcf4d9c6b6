//! Integration Test: システムチェック
//!
//! 全エンドポイント健全／一部劣化／全滅の各ケースで判定を検証する。

use serde_json::json;
use wiremock::MockServer;

use louiectl::cli::check;
use louiectl::registry::EndpointRegistry;

use crate::support::admin::{
    client_for, client_for_url, healthy_admin_server, mount_failure, mount_success,
    UNUSED_PORT_URL,
};

#[tokio::test]
async fn test_check_reports_healthy_when_all_endpoints_answer() {
    let server = healthy_admin_server().await;
    let client = client_for(&server);
    let registry = EndpointRegistry::new();

    let healthy = check::execute(&client, &registry).await.unwrap();
    assert!(healthy);
}

#[tokio::test]
async fn test_check_reports_degraded_when_one_endpoint_fails() {
    let server = MockServer::start().await;
    let registry = EndpointRegistry::new();
    for endpoint in registry.endpoints() {
        if endpoint.name == "stripe" {
            mount_failure(&server, endpoint.path, 500).await;
        } else {
            mount_success(&server, endpoint.path, json!({})).await;
        }
    }

    let client = client_for(&server);
    let healthy = check::execute(&client, &registry).await.unwrap();
    assert!(!healthy);
}

#[tokio::test]
async fn test_check_treats_success_false_as_degraded() {
    // HTTP 200 でも封筒の success が false なら劣化扱い
    let server = MockServer::start().await;
    let registry = EndpointRegistry::new();
    for endpoint in registry.endpoints() {
        if endpoint.name == "intelligence" {
            mount_failure(&server, endpoint.path, 200).await;
        } else {
            mount_success(&server, endpoint.path, json!({})).await;
        }
    }

    let client = client_for(&server);
    let healthy = check::execute(&client, &registry).await.unwrap();
    assert!(!healthy);
}

#[tokio::test]
async fn test_check_with_unreachable_service_is_degraded() {
    let client = client_for_url(UNUSED_PORT_URL);
    let registry = EndpointRegistry::new();
    let healthy = check::execute(&client, &registry).await.unwrap();
    assert!(!healthy);
}

#[tokio::test]
async fn test_check_renders_summary_from_autonomy_payload() {
    let server = MockServer::start().await;
    let registry = EndpointRegistry::new();
    for endpoint in registry.endpoints() {
        if endpoint.name == "autonomy" {
            mount_success(
                &server,
                endpoint.path,
                json!({
                    "systemHealth": {
                        "status": "healthy",
                        "uptime_formatted": "1d 2h",
                        "memory": { "heapUsed": 104857600 }
                    },
                    "overview": {
                        "users": { "total": 12 },
                        "stripe_ok": true,
                        "signups_ok": true,
                        "intelligence_ok": true
                    }
                }),
            )
            .await;
        } else {
            mount_success(&server, endpoint.path, json!({})).await;
        }
    }

    let client = client_for(&server);
    let healthy = check::execute(&client, &registry).await.unwrap();
    assert!(healthy);
}
