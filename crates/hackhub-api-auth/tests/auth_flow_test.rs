//! Integration tests for the authentication endpoints.
//!
//! Drives the router over the in-memory store, covering both login paths,
//! logout semantics, and the anti-enumeration response shape.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use hackhub_api_auth::{auth_router, AuthState};
use hackhub_auth::PasswordHasher;
use hackhub_db::{MemoryStore, UserStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_params(4096, 1, 1).unwrap()
}

fn test_app(store: Arc<MemoryStore>) -> Router {
    let state = AuthState::new(
        Arc::clone(&store) as Arc<dyn UserStore>,
        store,
        fast_hasher(),
        "/projects",
    );
    auth_router(state)
}

async fn seed_local_user(store: &MemoryStore, email: &str, password: &str) {
    let hash = fast_hasher().hash(password).unwrap();
    store.find_or_create(email, &hash).await.unwrap();
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn local_login_with_correct_credentials_succeeds() {
    let store = Arc::new(MemoryStore::new());
    seed_local_user(&store, "a@x.com", "hunter2").await;
    let app = test_app(Arc::clone(&store));

    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({"email": "a@x.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let user = store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(body["user_id"], user.id.to_string());
    assert_eq!(body["redirect_to"], "/projects");
    assert!(body["session_token"].as_str().is_some());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let store = Arc::new(MemoryStore::new());
    seed_local_user(&store, "a@x.com", "hunter2").await;

    let wrong = test_app(Arc::clone(&store))
        .oneshot(post_json(
            "/auth/login",
            json!({"email": "a@x.com", "password": "nope"}),
        ))
        .await
        .unwrap();
    let unknown = test_app(Arc::clone(&store))
        .oneshot(post_json(
            "/auth/login",
            json!({"email": "ghost@x.com", "password": "nope"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(unknown).await);

    // The failed unknown-email attempt created nothing.
    assert!(store.find_by_email("ghost@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn assertion_callback_is_idempotent_per_email() {
    let store = Arc::new(MemoryStore::new());

    let assertion = json!({"provider": "github", "email": "new@x.com", "name": "New"});

    let first = test_app(Arc::clone(&store))
        .oneshot(post_json("/auth/callback", assertion.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;

    let second = test_app(Arc::clone(&store))
        .oneshot(post_json("/auth/callback", assertion))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let second = body_json(second).await;

    // Same user, fresh token.
    assert_eq!(first["user_id"], second["user_id"]);
    assert_ne!(first["session_token"], second["session_token"]);
}

#[tokio::test]
async fn me_reflects_session_lifecycle() {
    let store = Arc::new(MemoryStore::new());

    let login = test_app(Arc::clone(&store))
        .oneshot(post_json(
            "/auth/callback",
            json!({"provider": "github", "email": "a@x.com"}),
        ))
        .await
        .unwrap();
    let login = body_json(login).await;
    let token = login["session_token"].as_str().unwrap().to_string();

    let me = test_app(Arc::clone(&store))
        .oneshot(
            Request::builder()
                .uri("/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["email"], "a@x.com");

    let logout = test_app(Arc::clone(&store))
        .oneshot(post_json("/auth/logout", json!({"session_token": token})))
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::NO_CONTENT);

    // The destroyed token no longer authenticates.
    let me_after = test_app(Arc::clone(&store))
        .oneshot(
            Request::builder()
                .uri("/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(me_after.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_with_unknown_or_malformed_token_still_succeeds() {
    let store = Arc::new(MemoryStore::new());

    let unknown = test_app(Arc::clone(&store))
        .oneshot(post_json(
            "/auth/logout",
            json!({"session_token": uuid::Uuid::new_v4().to_string()}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NO_CONTENT);

    let malformed = test_app(store)
        .oneshot(post_json(
            "/auth/logout",
            json!({"session_token": "not-a-token"}),
        ))
        .await
        .unwrap();
    assert_eq!(malformed.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn invalid_email_shape_is_rejected_before_the_core() {
    let store = Arc::new(MemoryStore::new());

    let response = test_app(store)
        .oneshot(post_json(
            "/auth/login",
            json!({"email": "not-an-email", "password": "x"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "validation_error");
}
