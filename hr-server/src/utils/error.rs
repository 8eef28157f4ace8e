//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - 统一错误响应体 `{ "message": "...", "stack": "..." }`
//!   (`stack` 仅在非生产环境返回)
//!
//! # 状态码规范
//!
//! | 分类 | 状态码 |
//! |------|--------|
//! | 校验失败 / 资源冲突 | 400 |
//! | 未登录 / 令牌失效 / 凭证错误 | 401 |
//! | 无权限 | 403 |
//! | 资源不存在 | 404 |
//! | 上游/数据库/内部错误 | 500 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Employee not found"))
//! ```

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;
use crate::services::generative::GenerativeError;

/// 统一错误响应体
///
/// ```json
/// { "message": "Employee not found", "stack": "NotFound(...)" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// 面向客户端的错误消息
    pub message: String,
    /// 调试细节，仅非生产环境返回
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// 应用错误枚举
///
/// # 错误分类
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 未登录、令牌过期、无效令牌、凭证错误 |
/// | 业务逻辑错误 | 资源不存在、校验失败、唯一性冲突 |
/// | 系统错误 | 数据库错误、上游 AI 错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401/403) ==========
    #[error("Not authorized, no token")]
    /// 未携带令牌 (401)
    Unauthorized,

    #[error("Not authorized, token failed")]
    /// 令牌过期 (401)
    TokenExpired,

    #[error("Not authorized, token failed")]
    /// 无效令牌 (401)
    InvalidToken,

    #[error("Invalid email or password")]
    /// 凭证错误 (401) — 不区分“邮箱不存在”与“密码错误”
    InvalidCredentials,

    #[error("{0}")]
    /// 无权限 (403)
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 唯一性冲突 (400，与原始接口保持一致)
    Conflict(String),

    #[error("{0}")]
    /// 校验失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("{0}")]
    /// 上游生成式 AI 错误 (500，透传上游消息)
    Upstream(String),

    #[error("Database error")]
    /// 数据库错误 (500，细节只记日志)
    Database(String),

    #[error("Internal server error")]
    /// 内部错误 (500，细节只记日志)
    Internal(String),
}

/// stack 字段是否返回 (非生产环境才带调试细节)
fn include_stack() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|e| e != "production")
        .unwrap_or(true)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized
            | AppError::TokenExpired
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::Forbidden(_) => StatusCode::FORBIDDEN,

            AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // Uniqueness violations surface as 400 on this API surface
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,

            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,

            AppError::Database(detail) => {
                error!(target: "database", error = %detail, "Database error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }

            AppError::Internal(detail) => {
                error!(target: "internal", error = %detail, "Internal error occurred");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorBody {
            message: self.to_string(),
            stack: include_stack().then(|| format!("{:?}", self)),
        });

        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<GenerativeError> for AppError {
    fn from(e: GenerativeError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create an invalid credentials error with unified message
    /// Used to prevent email enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn token_expired() -> Self {
        Self::TokenExpired
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let resp = AppError::conflict("User with this email already exists").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_errors_are_uniform() {
        // Unknown email and wrong password must be indistinguishable
        let a = AppError::invalid_credentials().to_string();
        let b = AppError::invalid_credentials().to_string();
        assert_eq!(a, b);
        assert_eq!(a, "Invalid email or password");
    }

    #[test]
    fn test_repo_error_mapping() {
        let e: AppError = RepoError::Duplicate("dup".into()).into();
        assert!(matches!(e, AppError::Conflict(_)));
        let e: AppError = RepoError::NotFound("nope".into()).into();
        assert!(matches!(e, AppError::NotFound(_)));
    }
}
