//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use shared::Role;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate, EmployeeWithAccount};
use crate::db::repository::employee::NewEmployee;
use crate::db::repository::EmployeeRepository;
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_amount, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// List all employees (account role resolved)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeWithAccount>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeWithAccount>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(employee))
}

/// Get the logged-in account's own employee profile
pub async fn my_profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_account(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee profile not found for this user"))?;
    Ok(Json(employee))
}

/// Create a new employee (account + profile + seed payroll)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeWithAccount>)> {
    let mut missing = Vec::new();
    if payload.first_name.is_none() {
        missing.push("firstName");
    }
    if payload.last_name.is_none() {
        missing.push("lastName");
    }
    if payload.email.is_none() {
        missing.push("email");
    }
    if payload.password.is_none() {
        missing.push("password");
    }
    if payload.joining_date.is_none() {
        missing.push("joiningDate");
    }
    if payload.job_title.is_none() {
        missing.push("jobTitle");
    }
    if payload.department.is_none() {
        missing.push("department");
    }
    if payload.salary.is_none() {
        missing.push("salary");
    }
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let first_name = payload.first_name.unwrap_or_default();
    let last_name = payload.last_name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    let job_title = payload.job_title.unwrap_or_default();
    let salary = payload.salary.unwrap_or_default();
    let department = payload
        .department
        .ok_or_else(|| AppError::validation("Missing required fields: department"))?;

    validate_required_text(&first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&last_name, "lastName", MAX_NAME_LEN)?;
    validate_email(&email, "email")?;
    validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&job_title, "jobTitle", MAX_NAME_LEN)?;
    validate_amount(salary, "salary")?;
    let joining_date = parse_date(&payload.joining_date.unwrap_or_default())?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .create_with_account(NewEmployee {
            first_name,
            last_name,
            email,
            password,
            joining_date,
            job_title,
            department,
            salary,
            role: payload.role.unwrap_or(Role::Employee),
        })
        .await?;

    tracing::info!(
        employee_code = %employee.employee_code,
        email = %employee.email,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (partial; name/email changes cascade to the account)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeWithAccount>> {
    validate_optional_text(&payload.first_name, "firstName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "lastName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.job_title, "jobTitle", MAX_NAME_LEN)?;
    if let Some(email) = &payload.email {
        validate_email(email, "email")?;
    }
    if let Some(salary) = payload.salary {
        validate_amount(salary, "salary")?;
    }

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee and all associated records
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = EmployeeRepository::new(state.get_db());
    repo.delete_cascade(&id).await?;

    tracing::info!(employee_id = %id, "Employee and associated records deleted");

    Ok(Json(json!({
        "message": "Employee and all associated data removed"
    })))
}
