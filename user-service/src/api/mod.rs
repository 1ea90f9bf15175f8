//! REST APIハンドラー
//!
//! ルーター構築とリクエストログミドルウェア

/// APIエラーレスポンス型
pub mod error;
/// ユーザー管理API
pub mod users;

use crate::config::ServerConfig;
use crate::AppState;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::time::Instant;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// APIのパスプレフィックス
pub const CONTEXT_PATH: &str = "/api/v1";

/// APIルーターを作成（ミドルウェアなし）
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{CONTEXT_PATH}/users"),
            get(users::list_users).post(users::create_user),
        )
        .route(
            &format!("{CONTEXT_PATH}/users/count"),
            get(users::count_users).delete(users::delete_count_user),
        )
        .route(
            &format!("{CONTEXT_PATH}/users/:username"),
            get(users::get_user).delete(users::delete_user),
        )
        .with_state(state)
}

/// ミドルウェア込みのアプリケーションを作成
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    apply_layers(create_router(state), config)
}

/// ルーターに共通ミドルウェアを適用する
///
/// リクエストログは `config.request_logging` が有効な場合のみ挿入する。
/// `config.request_timeout` を超えたリクエストは408を返す。
pub fn apply_layers(router: Router, config: &ServerConfig) -> Router {
    let mut app = router;

    if config.request_logging {
        app = app.layer(middleware::from_fn(request_logging_middleware));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
}

/// リクエストログミドルウェア
///
/// メソッド・URI・ステータス・処理時間を記録する。
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "{} {}",
        method,
        uri
    );

    response
}
