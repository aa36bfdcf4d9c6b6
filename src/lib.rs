//! LOUIE Autonomy CLI
//!
//! LOUIE管理APIに対する監視・カオス試験・キルスイッチ制御ツール

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 管理APIクライアント
pub mod client;

/// 設定管理
pub mod config;

/// エンドポイント・モジュールのカタログ
pub mod registry;

/// コンソールレポーター
pub mod report;

/// ワイヤ型定義
pub mod types;
