//! Payroll API integration tests

mod common;

use http::StatusCode;
use serde_json::json;

use common::{admin_token, create_employee, register, request, test_app};

#[tokio::test]
async fn test_employee_creation_seeds_payroll_and_deductions_update_recomputes_net() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    // Admin creates an employee with salary 5000 joining 2024-01-01
    create_employee(&app, &admin, "e@x.com", 5000.0).await;

    // One pending record with net = gross
    let (status, payrolls) = request(&app, "GET", "/api/payroll", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let payrolls = payrolls.as_array().unwrap().clone();
    assert_eq!(payrolls.len(), 1);
    assert_eq!(payrolls[0]["netSalary"], 5000.0);
    assert_eq!(payrolls[0]["status"], "Pending");

    // Setting deductions recomputes the net amount
    let id = payrolls[0]["id"].as_str().unwrap();
    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/payroll/{id}"),
        Some(&admin),
        Some(json!({ "deductions": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["grossSalary"], 5000.0);
    assert_eq!(updated["deductions"], 500.0);
    assert_eq!(updated["netSalary"], 4500.0);
}

#[tokio::test]
async fn test_gross_update_also_recomputes_net() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    create_employee(&app, &admin, "gross@test.com", 4000.0).await;

    let (_, payrolls) = request(&app, "GET", "/api/payroll", Some(&admin), None).await;
    let id = payrolls[0]["id"].as_str().unwrap().to_string();

    let (_, updated) = request(
        &app,
        "PUT",
        &format!("/api/payroll/{id}"),
        Some(&admin),
        Some(json!({ "deductions": 300 })),
    )
    .await;
    assert_eq!(updated["netSalary"], 3700.0);

    let (_, updated) = request(
        &app,
        "PUT",
        &format!("/api/payroll/{id}"),
        Some(&admin),
        Some(json!({ "grossSalary": 6000, "status": "Paid" })),
    )
    .await;
    // Previous deductions retained, net recomputed from the new gross
    assert_eq!(updated["grossSalary"], 6000.0);
    assert_eq!(updated["deductions"], 300.0);
    assert_eq!(updated["netSalary"], 5700.0);
    assert_eq!(updated["status"], "Paid");
}

#[tokio::test]
async fn test_create_payroll_names_missing_fields() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/payroll",
        Some(&admin),
        Some(json!({ "deductions": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    for field in ["employee", "periodStartDate", "periodEndDate", "grossSalary"] {
        assert!(message.contains(field), "missing '{field}' in: {message}");
    }
}

#[tokio::test]
async fn test_create_payroll_derives_net_and_defaults_deductions() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "pay@test.com", 3000.0).await;
    let employee_id = profile["id"].as_str().unwrap();

    let (status, created) = request(
        &app,
        "POST",
        "/api/payroll",
        Some(&admin),
        Some(json!({
            "employee": employee_id,
            "periodStartDate": "2024-02-01",
            "periodEndDate": "2024-03-01",
            "grossSalary": 3000,
            "deductions": 450,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["netSalary"], 2550.0);
    assert_eq!(created["status"], "Pending");

    // Deductions default to 0 when omitted
    let (status, created) = request(
        &app,
        "POST",
        "/api/payroll",
        Some(&admin),
        Some(json!({
            "employee": employee_id,
            "periodStartDate": "2024-03-01",
            "periodEndDate": "2024-04-01",
            "grossSalary": 3000,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["deductions"], 0.0);
    assert_eq!(created["netSalary"], 3000.0);
}

#[tokio::test]
async fn test_payroll_role_gates() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let profile = create_employee(&app, &admin, "gate@test.com", 1000.0).await;
    let employee_id = profile["id"].as_str().unwrap().to_string();

    let hr = register(&app, "Hr", "hr-pay@test.com", "hr").await;
    let hr_token = hr["token"].as_str().unwrap();

    // hr may read...
    let (status, _) = request(&app, "GET", "/api/payroll", Some(hr_token), None).await;
    assert_eq!(status, StatusCode::OK);

    // ...but not create
    let (status, _) = request(
        &app,
        "POST",
        "/api/payroll",
        Some(hr_token),
        Some(json!({
            "employee": employee_id,
            "periodStartDate": "2024-02-01",
            "periodEndDate": "2024-03-01",
            "grossSalary": 100,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_my_payslips_resolves_caller_profile() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    create_employee(&app, &admin, "slips@test.com", 2500.0).await;

    let (_, login) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "slips@test.com", "password": "employee-pass-1" })),
    )
    .await;
    let token = login["token"].as_str().unwrap();

    let (status, slips) = request(&app, "GET", "/api/payroll/my-payslips", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    let slips = slips.as_array().unwrap();
    assert_eq!(slips.len(), 1);
    assert_eq!(slips[0]["grossSalary"], 2500.0);

    // Accounts without a profile get a 404
    let (status, body) = request(&app, "GET", "/api/payroll/my-payslips", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee profile not found");
}
