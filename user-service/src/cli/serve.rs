//! serve サブコマンド
//!
//! ユーザーサービスを起動します。

use crate::config::{self, parse_duration, ServerConfig};
use clap::Args;
use std::time::Duration;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value_t = config::DEFAULT_PORT, env = "USER_SERVICE_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = config::DEFAULT_HOST, env = "USER_SERVICE_HOST")]
    pub host: String,

    /// How long to wait for in-flight requests on shutdown, e.g. 15s or 1m
    #[arg(
        long,
        default_value = "15s",
        value_parser = parse_duration,
        env = "USER_SERVICE_GRACEFUL_TIMEOUT"
    )]
    pub graceful_timeout: Duration,

    /// Per-request timeout
    #[arg(
        long,
        default_value = "15s",
        value_parser = parse_duration,
        env = "USER_SERVICE_REQUEST_TIMEOUT"
    )]
    pub request_timeout: Duration,

    /// Log every request
    #[arg(long, default_value_t = false)]
    pub request_logging: bool,
}

impl ServeArgs {
    /// Convert to a [`ServerConfig`].
    ///
    /// Request logging is on when the flag is given or the environment enables it.
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            graceful_timeout: self.graceful_timeout,
            request_timeout: self.request_timeout,
            request_logging: self.request_logging || config::is_request_logging_enabled(),
        }
    }
}
