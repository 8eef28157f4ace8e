//! Shared helpers for API integration tests
//!
//! Builds the full router against an in-memory document store and a
//! canned generative client, then drives it in-process with oneshot
//! requests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::core::{Config, ServerState};
use hr_server::db::DbService;
use hr_server::services::generative::{GenerativeClient, GenerativeError, GenerativePrompt};
use hr_server::services::http::build_router;
use hr_server::JwtService;

/// Generative client with a deterministic canned answer
#[derive(Debug, Default)]
pub struct CannedGenerative;

#[async_trait::async_trait]
impl GenerativeClient for CannedGenerative {
    async fn generate(&self, prompt: GenerativePrompt) -> Result<String, GenerativeError> {
        let preview: String = prompt.user.chars().take(40).collect();
        Ok(format!("canned answer for: {preview}"))
    }
}

/// Build a full application against a fresh in-memory database
pub async fn test_app() -> Router {
    let config = Config::with_overrides("/tmp/hrms-test", 0);
    let db = DbService::new_memory()
        .await
        .expect("failed to open memory db")
        .db;
    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    let generative: Arc<dyn GenerativeClient> = Arc::new(CannedGenerative);

    let state = ServerState::new(config, db, jwt_service, generative);
    build_router(state)
}

/// Issue one request; returns (status, parsed JSON body)
pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request dispatch failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, value)
}

/// Issue one multipart request; returns (status, parsed JSON body)
pub async fn request_multipart(
    app: &Router,
    path: &str,
    token: &str,
    parts: &[(&str, Option<(&str, &str)>, &[u8])],
) -> (StatusCode, Value) {
    const BOUNDARY: &str = "hrms-test-boundary";

    let mut body = Vec::new();
    for (name, file_meta, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_meta {
            Some((file_name, content_type)) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("failed to build multipart request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request dispatch failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Register an account and return its auth response (including token)
pub async fn register(app: &Router, display_name: &str, email: &str, role: &str) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "displayName": display_name,
            "email": email,
            "password": "test-password-1",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body
}

/// Register an admin and return its token
pub async fn admin_token(app: &Router) -> String {
    let body = register(app, "Admin One", "admin@test.com", "admin").await;
    body["token"].as_str().expect("missing token").to_string()
}

/// Create an employee through the API; returns the created profile
pub async fn create_employee(app: &Router, token: &str, email: &str, salary: f64) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/api/employees",
        Some(token),
        Some(json!({
            "firstName": "Eva",
            "lastName": "Stone",
            "email": email,
            "password": "employee-pass-1",
            "joiningDate": "2024-01-01",
            "jobTitle": "Software Engineer",
            "department": "Engineering",
            "salary": salary,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create employee failed: {body}");
    body
}
