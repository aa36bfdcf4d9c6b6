//! CLI surface for louiectl
//!
//! Flag-style interface: each mode is a long flag and exactly one mode is
//! accepted per invocation. Connection flags fall back to environment
//! variables.

pub mod chaos;
pub mod check;
pub mod killswitch;
pub mod load;
pub mod monitor;
pub mod status;

use clap::{ArgGroup, Parser};

use crate::config::DEFAULT_BASE_URL;

/// LOUIE Autonomy CLI - monitoring, chaos testing and system control
#[derive(Parser, Debug)]
#[command(name = "louiectl")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["check", "status", "monitor", "chaos", "load", "kill", "enable"])
))]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    LOUIE_API_URL    Admin API base URL (default: http://localhost:3000)
    LOUIE_TOKEN      Bearer token for admin endpoints
    RUST_LOG         Diagnostic log filter (default: info)

EXAMPLES:
    louiectl --check
    louiectl --monitor
    louiectl --chaos 120
    louiectl --load 500
    louiectl --kill signups
    louiectl --enable signups
"#)]
pub struct Cli {
    /// Quick health check of all admin endpoints
    #[arg(long)]
    pub check: bool,

    /// Full status dump of every endpoint payload
    #[arg(long)]
    pub status: bool,

    /// Continuous monitoring with change detection
    #[arg(long)]
    pub monitor: bool,

    /// Chaos mode: random killswitch toggles for SECS seconds
    #[arg(long, value_name = "SECS", num_args = 0..=1, default_missing_value = "60")]
    pub chaos: Option<u64>,

    /// Load spike: N sequential requests against random endpoints
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "100")]
    pub load: Option<u64>,

    /// Disable a module via its killswitch
    #[arg(long, value_name = "MODULE")]
    pub kill: Option<String>,

    /// Enable a module via its killswitch
    #[arg(long, value_name = "MODULE")]
    pub enable: Option<String>,

    /// Admin API base URL
    #[arg(long, value_name = "URL", env = "LOUIE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token for admin endpoints
    #[arg(
        long,
        value_name = "TOKEN",
        env = "LOUIE_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    pub token: String,

    /// Seconds between monitor heartbeats
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 5,
        conflicts_with_all = ["check", "status", "chaos", "load", "kill", "enable"]
    )]
    pub interval: u64,
}

/// One resolved operation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--check`
    Check,
    /// `--status`
    Status,
    /// `--monitor`
    Monitor,
    /// `--chaos [SECS]`
    Chaos(u64),
    /// `--load [N]`
    Load(u64),
    /// `--kill MODULE`
    Kill(String),
    /// `--enable MODULE`
    Enable(String),
}

impl Cli {
    /// The mode selected by flags, `None` when no mode flag was given.
    pub fn mode(&self) -> Option<Mode> {
        if self.check {
            Some(Mode::Check)
        } else if self.status {
            Some(Mode::Status)
        } else if self.monitor {
            Some(Mode::Monitor)
        } else if let Some(secs) = self.chaos {
            Some(Mode::Chaos(secs))
        } else if let Some(count) = self.load {
            Some(Mode::Load(count))
        } else if let Some(module) = &self.kill {
            Some(Mode::Kill(module.clone()))
        } else {
            self.enable.as_ref().map(|module| Mode::Enable(module.clone()))
        }
    }
}
