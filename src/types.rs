//! 管理APIのワイヤ型
//!
//! バックエンドは全ルートを `{ success, message, data }` の封筒形式で
//! 返す。`data` の中身はルートごとに異なる半構造JSONのため、型付けは
//! 封筒までとし、ペイロードは `serde_json::Value` のまま扱う。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 管理APIの標準レスポンス封筒
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    /// バックエンドが操作成功と報告したか
    #[serde(default)]
    pub success: bool,
    /// 結果の説明文（省略されるルートもある）
    #[serde(default)]
    pub message: Option<String>,
    /// ルート固有のペイロード
    #[serde(default)]
    pub data: Option<Value>,
}

/// `POST admin/killswitch` のリクエストボディ
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KillswitchRequest {
    /// バックエンドが解釈するモジュール識別子
    pub module: String,
    /// `true` で再有効化、`false` で停止
    pub enabled: bool,
    /// 監査用の注記。バックエンドはそのまま受け取る
    pub reason: String,
}

impl KillswitchRequest {
    /// リクエストボディを組み立てる
    pub fn new(module: &str, enabled: bool, reason: &str) -> Self {
        Self {
            module: module.to_string(),
            enabled,
            reason: reason.to_string(),
        }
    }
}

/// `admin/autonomy` ペイロードの要約ビュー
///
/// システムチェックの末尾に表示する。フィールドが欠けていても
/// 失敗にはせず、中立の既定値で描画する。
#[derive(Debug, Clone, PartialEq)]
pub struct AutonomySummary {
    /// `systemHealth.status` を大文字化した表示用文字列
    pub system_status: String,
    /// `systemHealth.uptime_formatted`
    pub uptime: String,
    /// `systemHealth.memory.heapUsed`（バイト）
    pub heap_used_bytes: f64,
    /// `overview.users.total`
    pub total_users: u64,
    /// `overview.stripe_ok`
    pub stripe_ok: bool,
    /// `overview.signups_ok`
    pub signups_ok: bool,
    /// `overview.intelligence_ok`
    pub intelligence_ok: bool,
}

impl AutonomySummary {
    /// `data` ペイロードから要約を抽出する
    pub fn from_value(data: &Value) -> Self {
        let health = data.get("systemHealth");
        let overview = data.get("overview");

        let system_status = health
            .and_then(|h| h.get("status"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_uppercase();
        let uptime = health
            .and_then(|h| h.get("uptime_formatted"))
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        let heap_used_bytes = health
            .and_then(|h| h.get("memory"))
            .and_then(|m| m.get("heapUsed"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let total_users = overview
            .and_then(|o| o.get("users"))
            .and_then(|u| u.get("total"))
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let flag = |name: &str| {
            overview
                .and_then(|o| o.get(name))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        };

        Self {
            system_status,
            uptime,
            heap_used_bytes,
            total_users,
            stripe_ok: flag("stripe_ok"),
            signups_ok: flag("signups_ok"),
            intelligence_ok: flag("intelligence_ok"),
        }
    }

    /// ヒープ使用量をMB単位で返す（表示は小数1桁）
    pub fn heap_used_mb(&self) -> f64 {
        self.heap_used_bytes / 1024.0 / 1024.0
    }
}
