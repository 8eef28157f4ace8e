//! Generative AI proxy integration tests
//!
//! The upstream model is replaced by a canned client; these tests cover
//! validation, role gates and the `{ field: text }` response shapes.

mod common;

use http::StatusCode;
use serde_json::json;

use common::{admin_token, create_employee, register, request, request_multipart, test_app};

async fn seed_review(app: &axum::Router, admin: &str) {
    let profile = create_employee(app, admin, "ai-emp@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap();
    let (status, _) = request(
        app,
        "POST",
        "/api/performance",
        Some(admin),
        Some(json!({ "employeeId": employee_id, "rating": 4, "comments": "great energy" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_insights_requires_reviews() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(&app, "GET", "/api/ai/insights", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No performance reviews found to analyze.");
}

#[tokio::test]
async fn test_insights_returns_source_data_and_summary() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    seed_review(&app, &admin).await;

    let (status, body) = request(&app, "GET", "/api/ai/insights", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sourceData"].as_array().unwrap().len(), 1);
    let summary = body["aiSummary"].as_str().unwrap();
    assert!(summary.starts_with("canned answer for:"));
}

#[tokio::test]
async fn test_sentiment_returns_text_field() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    seed_review(&app, &admin).await;

    let (status, body) = request(&app, "GET", "/api/ai/sentiment", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["sentiment"].as_str().is_some());
}

#[tokio::test]
async fn test_dashboard_insights_returns_text_field() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(&app, "GET", "/api/ai/dashboard-insights", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["insights"].as_str().is_some());
}

#[tokio::test]
async fn test_chatbot_requires_message() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(&app, "POST", "/api/ai/chatbot", Some(&admin), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No message provided");

    let (status, body) = request(
        &app,
        "POST",
        "/api/ai/chatbot",
        Some(&admin),
        Some(json!({ "message": "how many vacation days?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"].as_str().unwrap().contains("vacation"));
}

#[tokio::test]
async fn test_generate_template_requires_type() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/ai/generate-template",
        Some(&admin),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = request(
        &app,
        "POST",
        "/api/ai/generate-template",
        Some(&admin),
        Some(json!({ "templateType": "offer letter", "details": "senior role" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["template"].as_str().is_some());
}

#[tokio::test]
async fn test_screen_resume_requires_file_and_description() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    // Job description only, no file
    let (status, body) = request_multipart(
        &app,
        "/api/ai/screen-resume",
        &admin,
        &[("jobDescription", None, b"Rust engineer".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No resume file uploaded");

    // File only, no description
    let (status, body) = request_multipart(
        &app,
        "/api/ai/screen-resume",
        &admin,
        &[("resume", Some(("cv.pdf", "application/pdf")), b"%PDF-1.4 fake".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No job description provided");

    // Both present
    let (status, body) = request_multipart(
        &app,
        "/api/ai/screen-resume",
        &admin,
        &[
            ("jobDescription", None, b"Rust engineer, 5y experience".as_slice()),
            ("resume", Some(("cv.pdf", "application/pdf")), b"%PDF-1.4 fake".as_slice()),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fileName"], "cv.pdf");
    assert!(body["analysis"].as_str().is_some());
}

#[tokio::test]
async fn test_voice_interview_requires_audio() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request_multipart(
        &app,
        "/api/ai/voice-interview",
        &admin,
        &[("question", None, b"tell me about yourself".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No audio file uploaded");

    let (status, body) = request_multipart(
        &app,
        "/api/ai/voice-interview",
        &admin,
        &[
            ("question", None, b"strengths and weaknesses".as_slice()),
            ("audio", Some(("answer.mp3", "audio/mpeg")), b"ID3 fake audio".as_slice()),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fileName"], "answer.mp3");
    assert!(body["analysis"].as_str().is_some());
}

#[tokio::test]
async fn test_ai_role_gates() {
    let app = test_app().await;
    let _admin = admin_token(&app).await;

    // Manager may use analyst endpoints but not recruiting uploads
    let manager = register(&app, "Mgr", "ai-mgr@test.com", "manager").await;
    let manager_token = manager["token"].as_str().unwrap().to_string();

    let (status, _) = request(
        &app,
        "POST",
        "/api/ai/chatbot",
        Some(&manager_token),
        Some(json!({ "message": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request_multipart(
        &app,
        "/api/ai/screen-resume",
        &manager_token,
        &[("jobDescription", None, b"anything".as_slice())],
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Plain employees get nothing
    let employee = register(&app, "Emp", "ai-emp2@test.com", "employee").await;
    let employee_token = employee["token"].as_str().unwrap();
    let (status, _) = request(
        &app,
        "POST",
        "/api/ai/chatbot",
        Some(employee_token),
        Some(json!({ "message": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
