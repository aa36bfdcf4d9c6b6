//! load モード
//!
//! ランダムに選んだエンドポイントへ逐次リクエストを送り、
//! 件数とスループットを報告する。意図的に並列化しない。

use std::time::{Duration, Instant};

use rand::RngExt;

use crate::client::AdminClient;
use crate::registry::EndpointRegistry;
use crate::report::{self, BANNER_WIDTH};

const PROGRESS_EVERY: u64 = 50;

/// Aggregated result of one load run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReport {
    /// 送信したリクエスト数
    pub total: u64,
    /// HTTP 200 で応答した数
    pub success: u64,
    /// それ以外（到達不能を含む）
    pub failed: u64,
    /// 実行全体の所要時間
    pub elapsed: Duration,
}

impl LoadReport {
    /// Requests per second over the whole run.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}

/// Execute the load spike: `count` sequential GET requests.
/// Returns the tallied report after printing it.
pub async fn execute(
    client: &AdminClient,
    registry: &EndpointRegistry,
    count: u64,
) -> Result<LoadReport, anyhow::Error> {
    println!("\n{}", report::rule(BANNER_WIDTH));
    println!("  LOUIE LOAD SPIKE: {} requests", count);
    println!("{}\n", report::rule(BANNER_WIDTH));

    let endpoints = registry.endpoints();
    let mut success = 0u64;
    let mut failed = 0u64;
    let start = Instant::now();

    for i in 0..count {
        let endpoint = &endpoints[rand::rng().random_range(0..endpoints.len())];
        let probe = client.get(endpoint.path).await;
        if probe.status() == 200 {
            success += 1;
        } else {
            failed += 1;
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            println!("  Progress: {}/{}", i + 1, count);
        }
    }

    let summary = LoadReport {
        total: count,
        success,
        failed,
        elapsed: start.elapsed(),
    };
    render_summary(&summary);
    Ok(summary)
}

fn render_summary(summary: &LoadReport) {
    println!("\n{}", report::divider(BANNER_WIDTH));
    println!("Total Requests:  {}", summary.total);
    println!("Success:         {}", summary.success);
    println!("Failed:          {}", summary.failed);
    println!("Duration:        {:.2}s", summary.elapsed.as_secs_f64());
    println!("Requests/sec:    {:.2}", summary.throughput());
    println!("{}\n", report::divider(BANNER_WIDTH));
}
