//! コンソールレポーター
//!
//! タイムスタンプ付きの色分けログ行とバナー用罫線を出力する。
//! 運用者向け出力はすべてここを通し、`tracing` はデバッグ診断専用とする。

use chrono::Local;
use colored::{ColoredString, Colorize};

/// 標準バナー幅（check / monitor / chaos / load）
pub const BANNER_WIDTH: usize = 50;

/// ステータスダンプ用の広いバナー幅
pub const WIDE_BANNER_WIDTH: usize = 60;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log line severity. Each level maps to one fixed console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral progress output, uncolored
    Info,
    /// Successful probe or action, green
    Ok,
    /// Drift worth attention, yellow
    Warn,
    /// Failed probe or action, red
    Error,
    /// Chaos-mode toggles, magenta
    Chaos,
}

impl Level {
    /// Bracketed label as printed in the log line.
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Chaos => "CHAOS",
        }
    }

    fn paint(self, line: String) -> ColoredString {
        match self {
            Level::Info => line.normal(),
            Level::Ok => line.bright_green(),
            Level::Warn => line.bright_yellow(),
            Level::Error => line.bright_red(),
            Level::Chaos => line.bright_magenta(),
        }
    }
}

fn compose(level: Level, message: &str, timestamp: &str) -> String {
    format!("[{}] [{}] {}", timestamp, level.label(), message)
}

/// Print one timestamped, level-colored log line:
/// `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`.
pub fn log(level: Level, message: &str) {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    println!("{}", level.paint(compose(level, message, &timestamp)));
}

/// Horizontal rule of `=` characters.
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Horizontal rule of `-` characters.
pub fn divider(width: usize) -> String {
    "-".repeat(width)
}
