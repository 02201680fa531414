use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ovation::config::Config;
use ovation::services::VERIFIED_SENTINEL;
use ovation::state::SharedState;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const CODE_TTL: Duration = Duration::from_secs(600);

async fn spawn_app() -> (Router, Arc<SharedState>) {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;

    let shared = Arc::new(
        SharedState::new(config)
            .await
            .expect("Failed to create shared state"),
    );
    let state = ovation::api::create_app_state(shared.clone(), None);
    (ovation::api::router(state).await, shared)
}

async fn post_json(
    app: &Router,
    uri: &str,
    payload: &serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_signup_with_verified_email() {
    let (app, shared) = spawn_app().await;

    shared
        .store
        .set_verification("hong@example.com", VERIFIED_SENTINEL, CODE_TTL)
        .await
        .unwrap();

    let payload = serde_json::json!({
        "name": "홍길동",
        "email": "hong@example.com",
        "password": "1234abc!@"
    });

    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "hong@example.com");
    assert_eq!(body["data"]["name"], "홍길동");
    assert!(body["data"]["password_hash"].is_null());

    // The handshake record is consumed by a successful signup.
    let leftover = shared.store.get_verification("hong@example.com").await.unwrap();
    assert_eq!(leftover, None);

    assert!(shared.store.account_exists("hong@example.com").await.unwrap());
}

#[tokio::test]
async fn test_signup_requires_verified_email() {
    let (app, shared) = spawn_app().await;

    let payload = serde_json::json!({
        "name": "tester",
        "email": "fresh@example.com",
        "password": "1234abc!@"
    });

    // No verification record at all.
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A pending (unconfirmed) code is not enough.
    shared
        .store
        .set_verification("fresh@example.com", "123456", CODE_TTL)
        .await
        .unwrap();

    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(!shared.store.account_exists("fresh@example.com").await.unwrap());
}

#[tokio::test]
async fn test_expired_verification_is_treated_as_absent() {
    let (app, shared) = spawn_app().await;

    // A code whose TTL has already elapsed must not be readable.
    shared
        .store
        .set_verification("stale@example.com", "123456", Duration::ZERO)
        .await
        .unwrap();
    let stored = shared.store.get_verification("stale@example.com").await.unwrap();
    assert_eq!(stored, None);

    // An expired sentinel no longer proves ownership of the address.
    shared
        .store
        .set_verification("stale@example.com", VERIFIED_SENTINEL, Duration::ZERO)
        .await
        .unwrap();

    let payload = serde_json::json!({
        "name": "tester",
        "email": "stale@example.com",
        "password": "1234abc!@"
    });
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(!shared.store.account_exists("stale@example.com").await.unwrap());
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let (app, shared) = spawn_app().await;

    let payload = serde_json::json!({
        "name": "tester",
        "email": "dup@example.com",
        "password": "1234abc!@"
    });

    shared
        .store
        .set_verification("dup@example.com", VERIFIED_SENTINEL, CODE_TTL)
        .await
        .unwrap();
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Even a re-verified email cannot sign up twice.
    shared
        .store
        .set_verification("dup@example.com", VERIFIED_SENTINEL, CODE_TTL)
        .await
        .unwrap();
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("already"));
}

#[tokio::test]
async fn test_signup_rejects_invalid_fields() {
    let (app, _shared) = spawn_app().await;

    // Field validation fires before the verification check, so no
    // handshake record is needed here.
    let bad_passwords = [
        "",
        "123test12",
        "test@@@@@",
        "123123123!",
        "1a@",
        "1a@12312!@#!@!#!@#@!#@!2!@!!zda",
    ];
    for password in bad_passwords {
        let payload = serde_json::json!({
            "name": "tester",
            "email": "valid@example.com",
            "password": password
        });
        let response = post_json(&app, "/api/auth/signup", &payload).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "password {password:?} should be rejected"
        );
    }

    for email in ["testtest.com", "tes#R%estcom", "testtes*tcom"] {
        let payload = serde_json::json!({
            "name": "tester",
            "email": email,
            "password": "1234abc!@"
        });
        let response = post_json(&app, "/api/auth/signup", &payload).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "email {email:?} should be rejected"
        );
    }

    let payload = serde_json::json!({
        "name": "山田太郎",
        "email": "valid@example.com",
        "password": "1234abc!@"
    });
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_email_confirm_flow() {
    let (app, shared) = spawn_app().await;

    shared
        .store
        .set_verification("confirm@example.com", "123456", CODE_TTL)
        .await
        .unwrap();

    // Wrong code: a plain negative answer, no error and no lockout.
    let payload = serde_json::json!({"email": "confirm@example.com", "code": "999999"});
    let response = post_json(&app, "/api/auth/email/confirm", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["verified"], false);

    // The pending code survives a failed attempt.
    let payload = serde_json::json!({"email": "confirm@example.com", "code": "123456"});
    let response = post_json(&app, "/api/auth/email/confirm", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["verified"], true);

    let stored = shared
        .store
        .get_verification("confirm@example.com")
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some(VERIFIED_SENTINEL));

    let payload = serde_json::json!({
        "name": "tester",
        "email": "confirm@example.com",
        "password": "1234abc!@"
    });
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_code_stores_a_pending_code() {
    let (app, shared) = spawn_app().await;

    // Mail is disabled in the default config, so delivery is a no-op
    // but a code must still be recorded for the address.
    let payload = serde_json::json!({"email": "request@example.com"});
    let response = post_json(&app, "/api/auth/email/request", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = shared
        .store
        .get_verification("request@example.com")
        .await
        .unwrap()
        .expect("code should be stored");
    assert_eq!(stored.len(), 6);
    assert!(stored.chars().all(|c| c.is_ascii_digit()));

    let payload = serde_json::json!({"email": "not-an-email"});
    let response = post_json(&app, "/api/auth/email/request", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_session_and_password_change() {
    let (app, shared) = spawn_app().await;

    shared
        .store
        .set_verification("login@example.com", VERIFIED_SENTINEL, CODE_TTL)
        .await
        .unwrap();
    let payload = serde_json::json!({
        "name": "tester",
        "email": "login@example.com",
        "password": "1234abc!@"
    });
    let response = post_json(&app, "/api/auth/signup", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Wrong password is rejected.
    let payload = serde_json::json!({"email": "login@example.com", "password": "wrong1ab!"});
    let response = post_json(&app, "/api/auth/login", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown email is rejected.
    let payload = serde_json::json!({"email": "nobody@example.com", "password": "1234abc!@"});
    let response = post_json(&app, "/api/auth/login", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = serde_json::json!({"email": "login@example.com", "password": "1234abc!@"});
    let response = post_json(&app, "/api/auth/login", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "login@example.com");

    // Password change verifies the current password first.
    let payload = serde_json::json!({
        "current_password": "wrong1ab!",
        "new_password": "5678def!@"
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/auth/password")
                .header("Content-Type", "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = serde_json::json!({
        "current_password": "1234abc!@",
        "new_password": "5678def!@"
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/auth/password")
                .header("Content-Type", "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = serde_json::json!({"email": "login@example.com", "password": "5678def!@"});
    let response = post_json(&app, "/api/auth/login", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Logout invalidates the session.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
