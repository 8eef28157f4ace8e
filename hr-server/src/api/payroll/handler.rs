//! Payroll API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Payroll, PayrollCreate, PayrollUpdate, PayrollWithEmployee};
use crate::db::repository::payroll::NewPayroll;
use crate::db::repository::{EmployeeRepository, PayrollRepository};
use crate::utils::time::parse_date;
use crate::utils::validation::validate_amount;
use crate::utils::{AppError, AppResult};

/// List all payroll records (employee display fields resolved)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PayrollWithEmployee>>> {
    let repo = PayrollRepository::new(state.get_db());
    let payrolls = repo.find_all().await?;
    Ok(Json(payrolls))
}

/// Get the logged-in account's own payroll records
pub async fn my_payslips(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Payroll>>> {
    let employees = EmployeeRepository::new(state.get_db());
    let profile = employees
        .find_by_account(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee profile not found"))?;

    let employee_id = profile
        .id
        .ok_or_else(|| AppError::internal("Employee profile has no id"))?;

    let repo = PayrollRepository::new(state.get_db());
    let payrolls = repo.find_by_employee(&employee_id).await?;
    Ok(Json(payrolls))
}

/// Create a new payroll record
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollCreate>,
) -> AppResult<(StatusCode, Json<Payroll>)> {
    let mut missing = Vec::new();
    if payload.employee.is_none() {
        missing.push("employee");
    }
    if payload.period_start_date.is_none() {
        missing.push("periodStartDate");
    }
    if payload.period_end_date.is_none() {
        missing.push("periodEndDate");
    }
    if payload.gross_salary.is_none() {
        missing.push("grossSalary");
    }
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Please provide all required payroll fields: {}",
            missing.join(", ")
        )));
    }

    let employee = payload
        .employee
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::validation("Invalid employee ID"))?;
    let period_start_date = parse_date(&payload.period_start_date.unwrap_or_default())?;
    let period_end_date = parse_date(&payload.period_end_date.unwrap_or_default())?;
    let gross_salary = payload.gross_salary.unwrap_or_default();
    let deductions = payload.deductions.unwrap_or(0.0);

    validate_amount(gross_salary, "grossSalary")?;
    validate_amount(deductions, "deductions")?;

    let repo = PayrollRepository::new(state.get_db());
    let payroll = repo
        .create(NewPayroll {
            employee,
            period_start_date,
            period_end_date,
            gross_salary,
            deductions,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(payroll)))
}

/// Update a payroll record (net salary recomputed server-side)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PayrollUpdate>,
) -> AppResult<Json<Payroll>> {
    if let Some(gross) = payload.gross_salary {
        validate_amount(gross, "grossSalary")?;
    }
    if let Some(deductions) = payload.deductions {
        validate_amount(deductions, "deductions")?;
    }

    let repo = PayrollRepository::new(state.get_db());
    let payroll = repo.update(&id, payload).await?;
    Ok(Json(payroll))
}
