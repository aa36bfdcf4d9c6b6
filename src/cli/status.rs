//! status モード
//!
//! 各エンドポイントのペイロードを整形して一括表示する。

use serde_json::Value;

use crate::client::{AdminClient, Probe};
use crate::registry::EndpointRegistry;
use crate::report::{self, WIDE_BANNER_WIDTH};

/// Execute the full status dump.
pub async fn execute(
    client: &AdminClient,
    registry: &EndpointRegistry,
) -> Result<(), anyhow::Error> {
    println!("\n{}", report::rule(WIDE_BANNER_WIDTH));
    println!("  LOUIE FULL STATUS DUMP");
    println!("{}", report::rule(WIDE_BANNER_WIDTH));

    for endpoint in registry.endpoints() {
        println!("\n--- {} ---", endpoint.name.to_uppercase());
        let probe = client.get(endpoint.path).await;
        match &probe {
            Probe::Response { status: 200, body } => {
                println!("{}", pretty(displayed_payload(body)));
            }
            _ => {
                println!("ERROR: HTTP {}", probe.status());
                println!("{}", pretty(&probe.payload()));
            }
        }
    }

    println!("\n{}\n", report::rule(WIDE_BANNER_WIDTH));
    Ok(())
}

/// 封筒に `data` キーがあればその値を、なければ封筒全体を表示対象にする。
fn displayed_payload(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
