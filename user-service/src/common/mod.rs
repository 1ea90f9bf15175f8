//! 共通型定義

/// エラー型
pub mod error;

/// APIリクエスト/レスポンス型
pub mod protocol;

/// コアデータ型
pub mod types;
