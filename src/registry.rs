//! 管理APIカタログ
//!
//! プローブ対象エンドポイントとキルスイッチ対象モジュールの固定一覧。
//! `main` で一度構築し、各コマンドへ参照で渡す。

/// キルスイッチ操作の POST 先パス
pub const KILLSWITCH_PATH: &str = "admin/killswitch";

/// 監視対象の管理APIエンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// 表示名（check の左列、monitor のイベント名）
    pub name: &'static str,
    /// ベースURLからの相対パス
    pub path: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "overview",
        path: "admin/overview",
    },
    Endpoint {
        name: "environment",
        path: "admin/environment",
    },
    Endpoint {
        name: "system_health",
        path: "admin/system-health",
    },
    Endpoint {
        name: "financials",
        path: "admin/financials/summary",
    },
    Endpoint {
        name: "stripe",
        path: "admin/stripe",
    },
    Endpoint {
        name: "users",
        path: "admin/users",
    },
    Endpoint {
        name: "community",
        path: "admin/community",
    },
    Endpoint {
        name: "intelligence",
        path: "admin/intelligence",
    },
    Endpoint {
        name: "doc_scanner",
        path: "admin/doc-scanner",
    },
    Endpoint {
        name: "toggles",
        path: "admin/toggles",
    },
    Endpoint {
        name: "killswitches",
        path: "admin/killswitches",
    },
    Endpoint {
        name: "autonomy",
        path: "admin/autonomy",
    },
];

const MODULES: &[&str] = &[
    "stripe",
    "intelligence",
    "scanner",
    "signups",
    "billing",
    "posting",
    "docs",
    "api",
];

/// エンドポイントとモジュールの固定カタログ
///
/// 一覧の並びは宣言順で安定しており、check/status の表示順と
/// chaos クリーンアップの再有効化順をそのまま決める。
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: &'static [Endpoint],
    modules: &'static [&'static str],
}

impl EndpointRegistry {
    /// 既定のカタログを構築
    pub fn new() -> Self {
        Self {
            endpoints: ENDPOINTS,
            modules: MODULES,
        }
    }

    /// プローブ対象エンドポイント（宣言順）
    pub fn endpoints(&self) -> &[Endpoint] {
        self.endpoints
    }

    /// キルスイッチ対象モジュール（宣言順）
    pub fn modules(&self) -> &[&'static str] {
        self.modules
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}
