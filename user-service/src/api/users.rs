//! ユーザー管理API
//!
//! `/api/v1/users` 配下のCRUD操作。各ハンドラーはレジストリ操作を1回だけ呼び出す。

use crate::common::{
    error::ServiceError,
    protocol::{CountResponse, CreateUserRequest},
};
use crate::registry::is_valid_username;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::error::AppError;

/// JSONボディ付きレスポンスを生成する
///
/// シリアライズ失敗時は500を返す（ログは `AppError` 側で出力）。
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

/// パス上のユーザー名がパターンに一致しない場合はルート不一致として扱う
///
/// パーセントデコード後にUTF-8として不正なセグメントも同じく404にする。
fn route_username(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(username) =
        path.map_err(|e| ServiceError::NotFound(format!("no route for path segment: {}", e)))?;
    if is_valid_username(&username) {
        Ok(username)
    } else {
        Err(ServiceError::NotFound(format!("no route for username '{}'", username)).into())
    }
}

/// POST /api/v1/users - ユーザー作成
///
/// Content-Typeに関わらずボディをJSONとして解釈する。
///
/// # Returns
/// * `201 Created` - 作成されたユーザー
/// * `409 Conflict` - ユーザー名重複
/// * `500 Internal Server Error` - ボディ不正・ユーザー名パターン不一致
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request: CreateUserRequest = serde_json::from_slice(&body)
        .map_err(|e| ServiceError::Validation(format!("malformed create user body: {}", e)))?;

    if !is_valid_username(&request.username) {
        return Err(ServiceError::Validation(format!(
            "username '{}' does not match the allowed pattern",
            request.username
        ))
        .into());
    }

    let profile = state.registry.add(&request.username).await?;
    tracing::info!(username = %profile.username, id = %profile.id, "User created");

    json_response(StatusCode::CREATED, &profile)
}

/// GET /api/v1/users - ユーザー一覧取得（順序不定）
pub async fn list_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = state.registry.list().await;
    json_response(StatusCode::OK, &users)
}

/// GET /api/v1/users/count - ユーザー数取得
pub async fn count_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let count = state.registry.count().await;
    json_response(StatusCode::OK, &CountResponse { count })
}

/// GET /api/v1/users/:username - ユーザー取得
///
/// # Returns
/// * `200 OK` - ユーザー
/// * `404 Not Found` - 未登録、またはユーザー名がパターンに一致しない
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let username = route_username(path)?;
    let profile = state.registry.get(&username).await?;
    json_response(StatusCode::OK, &profile)
}

/// DELETE /api/v1/users/:username - ユーザー削除
///
/// # Returns
/// * `204 No Content` - 削除成功
/// * `404 Not Found` - 未登録、またはユーザー名がパターンに一致しない
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let username = route_username(path)?;
    remove(&state, &username).await
}

/// DELETE /api/v1/users/count
///
/// `/count` の静的ルートが `:username` より優先されるため、`count` という
/// ユーザー名の削除はここで受ける。
pub async fn delete_count_user(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    remove(&state, "count").await
}

async fn remove(state: &AppState, username: &str) -> Result<StatusCode, AppError> {
    if state.registry.delete(username).await {
        tracing::info!(username = %username, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::NotFound(username.to_string()).into())
    }
}
