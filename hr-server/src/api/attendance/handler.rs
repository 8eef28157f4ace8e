//! Attendance API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::models::{Attendance, AttendanceCreate, AttendanceWithEmployee};
use crate::db::repository::attendance::NewAttendance;
use crate::db::repository::AttendanceRepository;
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};

/// List all attendance records (employee display fields resolved)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<AttendanceWithEmployee>>> {
    let repo = AttendanceRepository::new(state.get_db());
    let records = repo.find_all().await?;
    Ok(Json(records))
}

/// Mark attendance for one employee on one calendar day
///
/// 同一员工同一天的第二次打卡，无论状态是什么都会被拒绝。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    let mut missing = Vec::new();
    if payload.employee.is_none() {
        missing.push("employee");
    }
    if payload.date.is_none() {
        missing.push("date");
    }
    if payload.status.is_none() {
        missing.push("status");
    }
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Please provide employee, date, and status: missing {}",
            missing.join(", ")
        )));
    }

    let employee = payload
        .employee
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::validation("Invalid employee ID"))?;
    let date = parse_date(&payload.date.unwrap_or_default())?;
    let status = payload
        .status
        .ok_or_else(|| AppError::validation("Please provide employee, date, and status"))?;

    let repo = AttendanceRepository::new(state.get_db());
    let record = repo
        .create(NewAttendance {
            employee,
            date,
            status,
            check_in: payload.check_in,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
