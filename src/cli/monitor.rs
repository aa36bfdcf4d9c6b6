//! monitor モード
//!
//! 一定間隔で全エンドポイントを巡回し、ステータス遷移と
//! ペイロード変化を検出して報告する。Ctrl+C で停止する。

use std::collections::HashMap;
use std::time::Duration;

use serde_json::json;

use crate::client::{AdminClient, Probe};
use crate::registry::EndpointRegistry;
use crate::report::{self, Level, BANNER_WIDTH};

/// Observed endpoint state carried across heartbeats.
#[derive(Debug, Default)]
pub struct MonitorState {
    last_status: HashMap<String, u16>,
    last_payload: HashMap<String, String>,
}

/// One change detected during a heartbeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeartbeatEvent {
    /// HTTPステータスが前回観測から変わった（初回観測も含む）
    StatusChanged {
        /// 新しいステータスコード（到達不能時は `0`）
        status: u16,
    },
    /// 正常応答のまま `data` ペイロードの指紋が変わった
    PayloadChanged,
}

/// Record one probe of `name` and report the changes it reveals.
///
/// Status transitions are always tracked. The payload fingerprint is only
/// updated on healthy probes, so an endpoint that fails and recovers is
/// diffed against its last good payload.
pub fn observe(state: &mut MonitorState, name: &str, probe: &Probe) -> Vec<HeartbeatEvent> {
    let mut events = Vec::new();
    let status = probe.status();

    match state.last_status.get(name) {
        Some(previous) if *previous == status => {}
        _ => {
            events.push(HeartbeatEvent::StatusChanged { status });
            state.last_status.insert(name.to_string(), status);
        }
    }

    if probe.is_ok() {
        let fingerprint = payload_fingerprint(probe);
        if let Some(previous) = state.last_payload.get(name) {
            if *previous != fingerprint {
                events.push(HeartbeatEvent::PayloadChanged);
            }
        }
        state.last_payload.insert(name.to_string(), fingerprint);
    }

    events
}

/// `data` フィールドの正準指紋。`serde_json` はオブジェクトキーを
/// ソート順で出力するため、同じ内容は常に同じ文字列になる。
fn payload_fingerprint(probe: &Probe) -> String {
    let body = probe.payload();
    body.get("data").cloned().unwrap_or_else(|| json!({})).to_string()
}

/// Execute the heartbeat loop until Ctrl+C.
pub async fn execute(
    client: &AdminClient,
    registry: &EndpointRegistry,
    interval_secs: u64,
) -> Result<(), anyhow::Error> {
    println!("\n{}", report::rule(BANNER_WIDTH));
    println!("  LOUIE CONTINUOUS MONITOR");
    println!("  Press Ctrl+C to stop");
    println!("{}\n", report::rule(BANNER_WIDTH));

    let mut state = MonitorState::default();
    let interval = Duration::from_secs(interval_secs);

    // シグナルリスナーはループの外で一度だけ張る。巡回中に届いた
    // Ctrl+C も次の select で確実に拾われる。
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        report::log(Level::Info, "--- HEARTBEAT ---");

        for endpoint in registry.endpoints() {
            let probe = client.get(endpoint.path).await;
            for event in observe(&mut state, endpoint.name, &probe) {
                render_event(endpoint.name, &event);
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            result = &mut ctrl_c => {
                result?;
                println!("\n\nMonitor stopped.");
                return Ok(());
            }
        }
    }
}

fn render_event(name: &str, event: &HeartbeatEvent) {
    match event {
        HeartbeatEvent::StatusChanged { status: 200 } => {
            report::log(Level::Ok, &format!("{name}: Status changed to OK"));
        }
        HeartbeatEvent::StatusChanged { status } => {
            report::log(Level::Error, &format!("{name}: Status changed to {status}"));
        }
        HeartbeatEvent::PayloadChanged => {
            report::log(Level::Warn, &format!("{name}: Payload changed"));
        }
    }
}
