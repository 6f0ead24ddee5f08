#![allow(dead_code)]

//! Test infrastructure for ps-server API tests

use ps_auth::JwtValidator;
use ps_server::{AppState, build_router};

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

/// AppState over a fresh in-memory store
pub async fn create_test_app_state() -> AppState {
    let pool = ps_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, JwtValidator::with_hs256(TEST_SECRET.as_bytes(), 0))
}

pub async fn create_test_app() -> (AppState, Router) {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    (state, app)
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

pub fn sign(claims: Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    sign(
        json!({ "sub": "admin-1", "role": "admin", "exp": now() + 3600 }),
        TEST_SECRET,
    )
}

pub fn user_token() -> String {
    sign(
        json!({ "sub": "user-1", "role": "user", "exp": now() + 3600 }),
        TEST_SECRET,
    )
}

pub fn expired_admin_token() -> String {
    sign(
        json!({ "sub": "admin-1", "role": "admin", "exp": now() - 3600 }),
        TEST_SECRET,
    )
}

pub fn wrong_secret_token() -> String {
    sign(
        json!({ "sub": "admin-1", "role": "admin", "exp": now() + 3600 }),
        "some-other-secret-nobody-configured",
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, authorization: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Send one request and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Create a project as admin and return the response body
pub async fn create_project(app: &Router, name: &str) -> Value {
    let (status, json) = send(
        app,
        post_json(
            "/projects",
            Some(&bearer(&admin_token())),
            json!({ "name": name, "description": format!("{name} description") }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}

pub async fn project_count(state: &AppState) -> usize {
    ps_db::ProjectRepository::new(state.pool.clone())
        .list()
        .await
        .unwrap()
        .len()
}
