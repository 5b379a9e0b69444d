//! End-to-end API tests
//!
//! Drive the fully assembled router (middleware included) against an
//! in-memory database.

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use mart_server::db::DbService;
use mart_server::{Config, JwtConfig, JwtService, ServerState};

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

fn test_config() -> Config {
    Config {
        run_address: "127.0.0.1:0".to_string(),
        work_dir: "./unused".to_string(),
        accrual_address: String::new(),
        log_level: "debug".to_string(),
        environment: "test".to_string(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_minutes: 60,
        },
    }
}

async fn test_app() -> Router {
    let db = DbService::memory().await.expect("in-memory database");
    let state = ServerState::new(test_config(), db.db);
    mart_server::api::build_app(state)
}

async fn read_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn register(app: &Router, login: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/user/register",
        json!({"login": login, "password": password}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    body["token"].as_str().expect("token in body").to_string()
}

async fn upload_order(app: &Router, token: &str, number: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user/orders")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from(number.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_with_token(app: &Router, uri: &str, token: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

// ========== Registration and login ==========

#[tokio::test]
async fn test_register_returns_token_and_header() {
    let app = test_app().await;

    let response = post_json(
        &app,
        "/api/user/register",
        json!({"login": "john_doe", "password": "securepass123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let auth_header = response
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .expect("Authorization header")
        .to_string();
    assert!(auth_header.starts_with("Bearer "));

    let body = read_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["token"].as_str().is_some());
    assert!(body["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn test_register_validates_credential_formats() {
    let app = test_app().await;

    for (login, password) in [
        ("ab", "securepass123"),                    // too short
        ("_user", "securepass123"),                 // leading underscore
        ("toolongusername123456", "securepass123"), // 21 chars
        ("john doe", "securepass123"),              // space
        ("john_doe", "short"),                      // weak password
    ] {
        let response = post_json(
            &app,
            "/api/user/register",
            json!({"login": login, "password": password}),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "login={:?} password={:?}",
            login,
            password
        );
    }
}

#[tokio::test]
async fn test_duplicate_login_conflicts() {
    let app = test_app().await;
    register(&app, "john_doe", "securepass123").await;

    let response = post_json(
        &app,
        "/api/user/register",
        json!({"login": "john_doe", "password": "otherpass456"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["message"], "login is not available");
}

#[tokio::test]
async fn test_login_roundtrip() {
    let app = test_app().await;
    register(&app, "john_doe", "securepass123").await;

    let response = post_json(
        &app,
        "/api/user/login",
        json!({"login": "john_doe", "password": "securepass123"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["token_type"], "Bearer");

    // Wrong password and unknown login answer identically.
    let wrong = post_json(
        &app,
        "/api/user/login",
        json!({"login": "john_doe", "password": "wrongpass123"}),
    )
    .await;
    let unknown = post_json(
        &app,
        "/api/user/login",
        json!({"login": "jane_doe", "password": "securepass123"}),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let wrong_body = read_json(wrong).await;
    let unknown_body = read_json(unknown).await;
    assert_eq!(wrong_body["code"], unknown_body["code"]);
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not-json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Order upload ==========

#[tokio::test]
async fn test_order_upload_flow() {
    let app = test_app().await;
    let token_a = register(&app, "user_a", "securepass123").await;
    let token_b = register(&app, "user_b", "securepass123").await;

    // Fresh upload
    let response = upload_order(&app, &token_a, "12345678903").await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    // Same owner retries: success, no new row
    let response = upload_order(&app, &token_a, "12345678903").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Another user: hard conflict
    let response = upload_order(&app, &token_b, "12345678903").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Only user A sees the order
    let listed = read_json(get_with_token(&app, "/api/user/orders", &token_a).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let listed_b = read_json(get_with_token(&app, "/api/user/orders", &token_b).await).await;
    assert!(listed_b.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_upload_rejects_bad_numbers() {
    let app = test_app().await;
    let token = register(&app, "user_a", "securepass123").await;

    // Checksum failure
    let response = upload_order(&app, &token, "12345678900").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Not a digit string
    for bad in ["", "12345abc", "123 456"] {
        let response = upload_order(&app, &token, bad).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "input: {:?}",
            bad
        );
    }

    // Nothing was stored
    let listed = read_json(get_with_token(&app, "/api/user/orders", &token).await).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_upload_requires_text_plain() {
    let app = test_app().await;
    let token = register(&app, "user_a", "securepass123").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/user/orders")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("12345678903"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_listing_is_newest_first() {
    let app = test_app().await;
    let token = register(&app, "user_a", "securepass123").await;

    assert_eq!(
        upload_order(&app, &token, "12345678903").await.status(),
        StatusCode::ACCEPTED
    );
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_eq!(
        upload_order(&app, &token, "79927398713").await.status(),
        StatusCode::ACCEPTED
    );

    let listed = read_json(get_with_token(&app, "/api/user/orders", &token).await).await;
    let orders = listed.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["number"], "79927398713");
    assert_eq!(orders[1]["number"], "12345678903");

    // NEW orders carry no accrual field yet
    assert_eq!(orders[0]["status"], "NEW");
    assert!(orders[0].get("accrual").is_none());
    assert!(orders[0]["uploaded_at"].as_str().is_some());
}

// ========== Authentication gate ==========

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/user/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_with_token(&app, "/api/user/orders", "garbage-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_failures_are_indistinguishable() {
    let app = test_app().await;
    register(&app, "john_doe", "securepass123").await;

    // Expired token for a real user
    let expired_issuer = JwtService::with_config(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: -2,
    });
    let expired = expired_issuer.issue("john_doe").unwrap().token;

    // Well-formed token signed with the wrong secret
    let forged_issuer = JwtService::with_config(JwtConfig {
        secret: "wrong-secret-wrong-secret-wrong-secret!".to_string(),
        expiration_minutes: 60,
    });
    let forged = forged_issuer.issue("john_doe").unwrap().token;

    // Valid signature, subject that no longer resolves to a user
    let ghost_issuer = JwtService::with_config(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: 60,
    });
    let ghost = ghost_issuer.issue("ghost_user").unwrap().token;

    let mut codes = Vec::new();
    for token in [expired, forged, ghost] {
        let response = get_with_token(&app, "/api/user/orders", &token).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        codes.push(read_json(response).await["code"].clone());
    }
    assert_eq!(codes[0], codes[1]);
    assert_eq!(codes[1], codes[2]);
}

#[tokio::test]
async fn test_wrong_scheme_is_unauthorized() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/user/orders")
                .header(header::AUTHORIZATION, "Basic am9objpkb2U=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ========== Balance stubs and health ==========

#[tokio::test]
async fn test_balance_stubs_respond_under_auth() {
    let app = test_app().await;
    let token = register(&app, "user_a", "securepass123").await;

    for (method, uri) in [
        ("GET", "/api/user/balance"),
        ("POST", "/api/user/balance/withdraw"),
        ("GET", "/api/user/withdrawals"),
    ] {
        let with_token = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(with_token.status(), StatusCode::OK, "{} {}", method, uri);

        let without_token = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            without_token.status(),
            StatusCode::UNAUTHORIZED,
            "{} {}",
            method,
            uri
        );
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

// ========== Token round trip through the real state ==========

#[tokio::test]
async fn test_registered_token_authenticates_immediately() {
    let app = test_app().await;
    let token = register(&app, "john_doe", "securepass123").await;

    let response = get_with_token(&app, "/api/user/orders", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
