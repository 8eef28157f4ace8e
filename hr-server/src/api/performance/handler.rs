//! Performance Review API Handlers

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Performance, PerformanceCreate, PerformanceWithRefs};
use crate::db::repository::performance::NewReview;
use crate::db::repository::{EmployeeRepository, PerformanceRepository};
use crate::utils::validation::{MAX_NOTE_LEN, validate_rating, validate_required_text};
use crate::utils::{AppError, AppResult};

/// List all performance reviews (employee + reviewer resolved)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PerformanceWithRefs>>> {
    let repo = PerformanceRepository::new(state.get_db());
    let reviews = repo.find_all().await?;
    Ok(Json(reviews))
}

/// Get the logged-in account's own reviews
pub async fn my_reviews(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<PerformanceWithRefs>>> {
    let employees = EmployeeRepository::new(state.get_db());
    let profile = employees
        .find_by_account(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee profile not found"))?;

    let employee_id = profile
        .id
        .ok_or_else(|| AppError::internal("Employee profile has no id"))?;

    let repo = PerformanceRepository::new(state.get_db());
    let reviews = repo.find_by_employee(&employee_id).await?;
    Ok(Json(reviews))
}

/// Create a new review; the reviewer is the logged-in account
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<PerformanceCreate>,
) -> AppResult<(StatusCode, Json<Performance>)> {
    let mut missing = Vec::new();
    if payload.employee_id.is_none() {
        missing.push("employeeId");
    }
    if payload.rating.is_none() {
        missing.push("rating");
    }
    if payload.comments.is_none() {
        missing.push("comments");
    }
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let employee = payload
        .employee_id
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::validation("Invalid employee ID"))?;
    let rating = payload.rating.unwrap_or_default();
    let comments = payload.comments.unwrap_or_default();

    validate_rating(rating)?;
    validate_required_text(&comments, "comments", MAX_NOTE_LEN)?;

    let reviewer = user
        .id
        .parse()
        .map_err(|_| AppError::internal("Invalid reviewer account ID"))?;

    let repo = PerformanceRepository::new(state.get_db());
    let review = repo
        .create(NewReview {
            employee,
            reviewer,
            rating,
            comments,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
