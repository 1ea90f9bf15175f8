//! POST /api/v1/users Contract Tests

use crate::support::service::{body_json, create_test_app, create_user_request, send};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use uuid::Uuid;

/// ユーザー作成で201とプロファイルJSONが返る
#[tokio::test]
async fn test_create_user_returns_created_profile() {
    let (app, registry) = create_test_app();

    let (status, response) = send(&app, create_user_request(r#"{"Username":"alice"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_json(response).await;
    assert_eq!(body["username"], "alice");
    let id = body["id"].as_str().expect("id must be a string");
    assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
    assert_eq!(body.as_object().unwrap().len(), 2);

    assert_eq!(registry.get("alice").await.unwrap().id.to_string(), id);
}

/// 小文字のフィールド名も受け付ける
#[tokio::test]
async fn test_create_user_accepts_lowercase_field() {
    let (app, _registry) = create_test_app();

    let (status, _) = send(&app, create_user_request(r#"{"username":"bob"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
}

/// フィールド名の大文字小文字は区別しない
#[tokio::test]
async fn test_create_user_field_name_is_case_insensitive() {
    let (app, registry) = create_test_app();

    let (status, response) = send(&app, create_user_request(r#"{"USERNAME":"alice"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body_json(response).await["username"], "alice");

    let (status, _) = send(&app, create_user_request(r#"{"userName":"bob"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(registry.count().await, 2);
}

/// Content-Typeなしでもボディを解釈する
#[tokio::test]
async fn test_create_user_without_content_type() {
    let (app, _registry) = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .body(Body::from(r#"{"Username":"carol"}"#))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
}

/// 重複ユーザー名は409、件数は変わらない
#[tokio::test]
async fn test_create_duplicate_user_is_conflict() {
    let (app, registry) = create_test_app();

    let (first, _) = send(&app, create_user_request(r#"{"Username":"alice"}"#)).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, response) = send(&app, create_user_request(r#"{"Username":"alice"}"#)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    assert_eq!(registry.count().await, 1);
}

/// 不正なJSONは500
#[tokio::test]
async fn test_create_user_with_malformed_body() {
    let (app, registry) = create_test_app();

    for body in ["", "{", "not json", r#"{"Username": 42}"#, r#"{"name":"alice"}"#] {
        let (status, _) = send(&app, create_user_request(body)).await;
        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "body {:?} should be rejected",
            body
        );
    }

    assert_eq!(registry.count().await, 0);
}

/// パターンに一致しないユーザー名は500、レジストリは変更されない
#[tokio::test]
async fn test_create_user_with_invalid_username() {
    let (app, registry) = create_test_app();

    let long_name = format!("a{}", "b".repeat(32));
    for name in ["", "a", "1alice", "-alice", "al ice", long_name.as_str()] {
        let body = serde_json::json!({ "Username": name }).to_string();
        let (status, _) = send(&app, create_user_request(&body)).await;
        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "username {:?} should be rejected",
            name
        );
    }

    assert_eq!(registry.count().await, 0);
}
