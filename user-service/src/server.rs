//! axumサーバー起動・シャットダウンハンドリング

use crate::config::ServerConfig;
use crate::shutdown::ShutdownController;
use crate::AppState;
use anyhow::Context;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// axumサーバーを起動し、シャットダウンシグナルを待機する
///
/// バインド失敗、または猶予時間内にシャットダウンが完了しない場合はエラーを返す。
pub async fn run(
    state: AppState,
    config: ServerConfig,
    shutdown: ShutdownController,
) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_addr))?;

    info!("User service listening on {}", listener.local_addr()?);

    let signals = tokio::spawn(forward_os_signals(shutdown.clone()));
    let app = crate::api::create_app(state, &config);

    let result = serve_listener(listener, app, shutdown, config.graceful_timeout).await;
    signals.abort();
    result
}

/// バインド済みリスナーでサーバーを実行する
///
/// `shutdown` が要求されると新規接続の受け付けを止め、処理中のリクエストを
/// `graceful_timeout` まで待つ。
pub async fn serve_listener(
    listener: TcpListener,
    app: Router,
    shutdown: ShutdownController,
    graceful_timeout: Duration,
) -> anyhow::Result<()> {
    let signal = shutdown.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async move { signal.wait().await })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("Server task panicked")?.context("Server error")?;
            return Ok(());
        }
        _ = shutdown.wait() => {
            info!("Draining in-flight requests (timeout {:?})", graceful_timeout);
        }
    }

    match tokio::time::timeout(graceful_timeout, &mut server).await {
        Ok(joined) => {
            joined.context("Server task panicked")?.context("Server error")?;
            info!("Server shutdown complete");
            Ok(())
        }
        Err(_) => {
            server.abort();
            anyhow::bail!(
                "Can't properly shutdown server: in-flight requests still running after {:?}",
                graceful_timeout
            )
        }
    }
}

/// OSシグナルを受けたらシャットダウンを要求する
async fn forward_os_signals(shutdown: ShutdownController) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            return;
        }
    }

    shutdown.request_shutdown();
}
