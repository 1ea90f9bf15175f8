//! ロギング初期化
//!
//! `USER_SERVICE_LOG_LEVEL`（なければ `RUST_LOG`、既定 `info`）でフィルタを決定し、
//! `USER_SERVICE_LOG_FORMAT=json` でJSON出力に切り替える。

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けテキスト
    Text,
    /// 1行1JSON
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("USER_SERVICE_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

fn env_filter() -> EnvFilter {
    let directive = std::env::var("USER_SERVICE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// グローバルsubscriberを初期化する
///
/// 2回目以降の呼び出しは何もせず `Ok(())` を返す。
/// 別のグローバルsubscriberが既に設定されている場合はエラー。
pub fn init() -> anyhow::Result<()> {
    INITIALIZED.get_or_try_init(install).map(|_| ())
}

fn install() -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
    }

    Ok(())
}
