//! Performance Review API integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{admin_token, create_employee, register, request, test_app};

#[tokio::test]
async fn test_create_review_sets_caller_as_reviewer() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "rev@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap();

    let (status, review) = request(
        &app,
        "POST",
        "/api/performance",
        Some(&admin),
        Some(json!({ "employeeId": employee_id, "rating": 5, "comments": "excellent work" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["rating"], 5);
    assert_eq!(review["comments"], "excellent work");
    assert!(review["reviewDate"].as_i64().unwrap() > 0);

    // Reviewer resolved to the admin account on listings
    let (_, reviews) = request(&app, "GET", "/api/performance", Some(&admin), None).await;
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["reviewer"]["email"], "admin@test.com");
    assert_eq!(reviews[0]["employee"]["firstName"], "Eva");
}

#[tokio::test]
async fn test_create_review_for_unknown_employee_not_found() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/performance",
        Some(&admin),
        Some(json!({
            "employeeId": "employee:doesnotexist",
            "rating": 3,
            "comments": "who is this",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn test_rating_must_be_between_one_and_five() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "rate@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap().to_string();

    for bad_rating in [0, 6, -1] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/performance",
            Some(&admin),
            Some(json!({
                "employeeId": employee_id,
                "rating": bad_rating,
                "comments": "out of range",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "rating {bad_rating}");
    }
}

#[tokio::test]
async fn test_create_review_names_missing_fields() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/performance",
        Some(&admin),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    for field in ["employeeId", "rating", "comments"] {
        assert!(message.contains(field), "missing '{field}' in: {message}");
    }
}

#[tokio::test]
async fn test_performance_role_gates() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "perf-gate@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap().to_string();

    // Manager may create and read
    let manager = register(&app, "Mgr", "perf-mgr@test.com", "manager").await;
    let manager_token = manager["token"].as_str().unwrap();
    let (status, _) = request(
        &app,
        "POST",
        "/api/performance",
        Some(manager_token),
        Some(json!({ "employeeId": employee_id, "rating": 4, "comments": "good" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = request(&app, "GET", "/api/performance", Some(manager_token), None).await;
    assert_eq!(status, StatusCode::OK);

    // Hr may read but not create
    let hr = register(&app, "Hr", "perf-hr@test.com", "hr").await;
    let hr_token = hr["token"].as_str().unwrap();
    let (status, _) = request(&app, "GET", "/api/performance", Some(hr_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(
        &app,
        "POST",
        "/api/performance",
        Some(hr_token),
        Some(json!({ "employeeId": employee_id, "rating": 2, "comments": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Plain employees may do neither
    let employee = register(&app, "Emp", "perf-emp@test.com", "employee").await;
    let employee_token = employee["token"].as_str().unwrap();
    let (status, _) = request(&app, "GET", "/api/performance", Some(employee_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_my_reviews_resolves_caller_profile() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "my-rev@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap();

    request(
        &app,
        "POST",
        "/api/performance",
        Some(&admin),
        Some(json!({ "employeeId": employee_id, "rating": 5, "comments": "keep it up" })),
    )
    .await;

    let (_, login) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "my-rev@test.com", "password": "employee-pass-1" })),
    )
    .await;
    let token = login["token"].as_str().unwrap();

    let (status, reviews) = request(&app, "GET", "/api/performance/my-reviews", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comments"], "keep it up");
    assert_eq!(reviews[0]["reviewer"]["displayName"], "Admin One");

    // Accounts without a profile get a 404
    let (status, _) = request(&app, "GET", "/api/performance/my-reviews", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
