//! kill / enable モード
//!
//! 単一モジュールのキルスイッチを手動で切り替える。

use crate::client::AdminClient;
use crate::registry::KILLSWITCH_PATH;
use crate::report::{self, Level};
use crate::types::KillswitchRequest;

/// Toggle one module's killswitch. `enable` selects the target state.
///
/// The module name is passed through verbatim; the backend decides
/// whether it is valid.
pub async fn execute(
    client: &AdminClient,
    module: &str,
    enable: bool,
) -> Result<(), anyhow::Error> {
    if enable {
        report::log(Level::Ok, &format!("Enabling module: {module}"));
    } else {
        report::log(Level::Warn, &format!("Disabling module: {module}"));
    }

    let request = KillswitchRequest::new(module, enable, "manual-cli");
    let probe = client.post(KILLSWITCH_PATH, &request).await;

    let (done, verb) = if enable {
        ("enabled", "enable")
    } else {
        ("disabled", "disable")
    };
    if probe.is_ok() {
        report::log(Level::Ok, &format!("Module '{module}' {done}."));
    } else {
        report::log(
            Level::Error,
            &format!("Failed to {verb} '{module}': {}", probe.payload()),
        );
    }
    Ok(())
}
