//! User Service
//!
//! ユーザープロファイルをメモリ内で管理するHTTPサーバー

#![warn(missing_docs)]

/// 共通型定義（プロファイル、リクエスト/レスポンス、エラー）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// ユーザーレジストリ
pub mod registry;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// Shutdown controller
pub mod shutdown;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone, Default)]
pub struct AppState {
    /// ユーザーレジストリ
    pub registry: registry::UserHolder,
}

impl AppState {
    /// 指定したレジストリでアプリケーション状態を作成
    pub fn new(registry: registry::UserHolder) -> Self {
        Self { registry }
    }
}
