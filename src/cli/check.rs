//! check モード
//!
//! 全エンドポイントを順にプローブして OK/FAILED の一覧を表示し、
//! 最後に autonomy サマリーを描画する。

use crate::client::{AdminClient, Probe};
use crate::registry::EndpointRegistry;
use crate::report::{self, Level, BANNER_WIDTH};
use crate::types::{ApiEnvelope, AutonomySummary};

/// Execute the system check.
///
/// Returns `true` when every endpoint answered HTTP 200 with a success
/// envelope; the caller maps `false` to exit code 1.
pub async fn execute(
    client: &AdminClient,
    registry: &EndpointRegistry,
) -> Result<bool, anyhow::Error> {
    println!("\n{}", report::rule(BANNER_WIDTH));
    println!("  LOUIE SYSTEM CHECK");
    println!("{}\n", report::rule(BANNER_WIDTH));

    let mut all_ok = true;
    for endpoint in registry.endpoints() {
        let probe = client.get(endpoint.path).await;
        let (level, line) = status_line(endpoint.name, &probe);
        report::log(level, &line);
        if !probe.is_ok() {
            all_ok = false;
        }
    }

    println!("\n{}", report::divider(BANNER_WIDTH));

    render_summary(client).await;

    println!("\n{}", report::rule(BANNER_WIDTH));
    if all_ok {
        report::log(Level::Ok, "All systems operational.");
    } else {
        report::log(Level::Error, "Some systems are degraded.");
    }
    println!("{}\n", report::rule(BANNER_WIDTH));

    Ok(all_ok)
}

fn status_line(name: &str, probe: &Probe) -> (Level, String) {
    if probe.is_ok() {
        (Level::Ok, format!("{name:<20} OK"))
    } else {
        (
            Level::Error,
            format!("{name:<20} FAILED (HTTP {})", probe.status()),
        )
    }
}

/// autonomy エンドポイントを改めて取得し、要約ブロックを表示する。
/// 取得に失敗した場合は黙ってスキップする（一覧側で既に失敗が見えている）。
async fn render_summary(client: &AdminClient) {
    let probe = client.get("admin/autonomy").await;
    if !probe.is_ok() {
        return;
    }
    let envelope: ApiEnvelope = match serde_json::from_value(probe.payload()) {
        Ok(envelope) => envelope,
        Err(_) => return,
    };
    let Some(data) = envelope.data else {
        return;
    };
    let summary = AutonomySummary::from_value(&data);

    println!("\nSystem Status:  {}", summary.system_status);
    println!("Uptime:         {}", summary.uptime);
    println!("Memory (Heap):  {:.1} MB", summary.heap_used_mb());
    println!("Total Users:    {}", summary.total_users);
    println!("Stripe:         {}", ok_or_down(summary.stripe_ok));
    println!("Signups:        {}", ok_or_down(summary.signups_ok));
    println!("Intelligence:   {}", ok_or_down(summary.intelligence_ok));
}

fn ok_or_down(healthy: bool) -> &'static str {
    if healthy {
        "OK"
    } else {
        "DOWN"
    }
}
