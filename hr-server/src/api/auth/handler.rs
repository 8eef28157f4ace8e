//! Authentication Handlers
//!
//! Handles registration, login and current-account lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State, http::StatusCode};
use shared::Role;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::AccountRepository;
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Register handler
///
/// Creates a new account (default role "employee") and returns it with a
/// fresh token.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let mut missing = Vec::new();
    if req.display_name.is_none() {
        missing.push("displayName");
    }
    if req.email.is_none() {
        missing.push("email");
    }
    if req.password.is_none() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(AppError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let display_name = req.display_name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    validate_required_text(&display_name, "displayName", MAX_NAME_LEN)?;
    validate_email(&email, "email")?;
    validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .create(
            display_name,
            email,
            &password,
            req.role.unwrap_or(Role::Employee),
        )
        .await?;

    let account_id = account
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&account_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(account_id = %account_id, email = %account.email, "Account registered");

    let response = AuthResponse {
        id: account_id,
        display_name: account.display_name,
        email: account.email,
        role: account.role,
        token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler
///
/// Authenticates credentials and returns a fresh token.
/// “邮箱不存在”和“密码错误”返回完全相同的错误，防止枚举。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let repo = AccountRepository::new(state.get_db());
    let account = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let account = match account {
        Some(account) => {
            let password_valid = account
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", email = req.email.clone());
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            security_log!("WARN", "login_failed", email = req.email.clone());
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let account_id = account
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&account_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        account_id = %account_id,
        email = %account.email,
        role = %account.role,
        "Account logged in successfully"
    );

    let response = AuthResponse {
        id: account_id,
        display_name: account.display_name,
        email: account.email,
        role: account.role,
        token,
    };

    Ok(Json(response))
}

/// Get current account info
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        id: user.id,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
    }))
}
