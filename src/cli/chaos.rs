//! chaos モード
//!
//! 期限までランダムにキルスイッチを切り替え、終了後（中断後も）に
//! 全モジュールを必ず再有効化する。

use std::time::{Duration, Instant};

use rand::RngExt;

use crate::client::AdminClient;
use crate::registry::{EndpointRegistry, KILLSWITCH_PATH};
use crate::report::{self, Level, BANNER_WIDTH};
use crate::types::KillswitchRequest;

/// Execute chaos mode for `duration_secs` seconds.
pub async fn execute(
    client: &AdminClient,
    registry: &EndpointRegistry,
    duration_secs: u64,
) -> Result<(), anyhow::Error> {
    println!("\n{}", report::rule(BANNER_WIDTH));
    println!("  LOUIE CHAOS MODE");
    println!("  Duration: {} seconds", duration_secs);
    println!("{}\n", report::rule(BANNER_WIDTH));

    let deadline = Instant::now() + Duration::from_secs(duration_secs);

    // biased によりリスナー側が最初にポーリングされ、ハンドラは
    // 一発目のトグルPOSTより前に確立される。送信中の Ctrl+C でも
    // プロセスは落ちず、ループを破棄してクリーンアップへ抜ける。
    tokio::select! {
        biased;
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => println!("\n\nChaos stopped."),
                // リスナーを失ったら中断不能のまま走らせない
                Err(e) => report::log(
                    Level::Error,
                    &format!("Interrupt listener failed: {e}"),
                ),
            }
        }
        _ = run_toggles(client, registry, deadline) => {}
    }

    cleanup(client, registry).await;
    Ok(())
}

/// 期限までランダムなトグルを送り続ける。中断は呼び出し側の
/// select が担い、このループごと破棄される。
async fn run_toggles(client: &AdminClient, registry: &EndpointRegistry, deadline: Instant) {
    while Instant::now() < deadline {
        let (module, enable) = pick_toggle(registry.modules());
        let action = if enable { "ENABLE" } else { "DISABLE" };
        report::log(Level::Chaos, &format!("CHAOS: {action} {module}"));

        let request = KillswitchRequest::new(module, enable, "chaos-mode");
        let probe = client.post(KILLSWITCH_PATH, &request).await;
        if probe.status() == 200 {
            report::log(Level::Ok, "  -> Success");
        } else {
            report::log(Level::Error, &format!("  -> Failed: {}", probe.payload()));
        }

        let pause = Duration::from_millis(rand::rng().random_range(1000..=3000));
        tokio::time::sleep(pause).await;
    }
}

fn pick_toggle<'a>(modules: &[&'a str]) -> (&'a str, bool) {
    let mut rng = rand::rng();
    let module = modules[rng.random_range(0..modules.len())];
    let enable = rng.random_range(0..2) == 1;
    (module, enable)
}

/// 全モジュールを宣言順に再有効化する。個々の結果は確認しない。
async fn cleanup(client: &AdminClient, registry: &EndpointRegistry) {
    println!("\nRe-enabling all modules...");
    for module in registry.modules() {
        let request = KillswitchRequest::new(module, true, "chaos-cleanup");
        client.post(KILLSWITCH_PATH, &request).await;
    }
    report::log(Level::Ok, "All modules re-enabled.");
}
