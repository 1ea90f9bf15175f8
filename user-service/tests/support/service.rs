use axum::{
    body::{to_bytes, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use user_service::{api, config::ServerConfig, registry::UserHolder, AppState};

/// テスト用のアプリケーションを作成する（.oneshot()スタイルのテスト用）
///
/// レジストリも返すので、HTTPを経由せずに状態を検証できる。
#[allow(dead_code)]
pub fn create_test_app() -> (Router, UserHolder) {
    let registry = UserHolder::new();
    let state = AppState::new(registry.clone());
    let app = api::create_app(state, &ServerConfig::default());
    (app, registry)
}

/// リクエストを1本送ってステータスとボディを返す
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Response<Body>) {
    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), response)
}

/// ボディをJSONとして読む
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// ボディを生バイトで読む
#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[allow(dead_code)]
pub fn create_user_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
