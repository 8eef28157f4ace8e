//! 认证中间件
//!
//! 为 JWT 认证和角色授权提供 Axum 中间件。
//! 两道关卡按固定顺序执行：先 [`require_auth`] 解析账号，
//! 再 [`require_role`] 检查路由声明的角色白名单。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::Role;

use crate::auth::JwtService;
use crate::core::ServerState;
use crate::db::models::Account;
use crate::db::repository::AccountRepository;
use crate::security_log;
use crate::utils::AppError;

/// 当前账号上下文 (认证中间件注入)
///
/// 由 [`require_auth`] 从数据库解析账号后创建，注入请求扩展。
/// 密码哈希从不进入请求上下文。
///
/// # 示例
///
/// ```ignore
/// async fn handler(Extension(user): Extension<CurrentUser>) -> Json<()> {
///     println!("账号: {}, 角色: {}", user.email, user.role);
///     Json(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 账号 ID ("account:xxx")
    pub id: String,
    /// 显示名
    pub display_name: String,
    /// 邮箱
    pub email: String,
    /// 角色
    pub role: Role,
}

impl From<Account> for CurrentUser {
    fn from(account: Account) -> Self {
        Self {
            id: account
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            display_name: account.display_name,
            email: account.email,
            role: account.role,
        }
    }
}

/// 角色白名单的纯函数检查
///
/// 没有角色层级：只有白名单中明确列出的角色可以通过，
/// admin 不会隐式获得其他角色的权限。
pub fn role_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

/// 认证中间件 - 要求账号登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，
/// 然后按 `sub` 从数据库解析账号 (密码哈希不进入上下文)。
/// 解析成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (如 /health，让它们正常返回)
/// - `/api/auth/login`, `/api/auth/register` (公共接口)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
/// | 令牌有效但账号已删除 | 401 Unauthorized |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公共 API 路由跳过认证
    let is_public_api_route = path == "/api/auth/login" || path == "/api/auth/register";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(AppError::invalid_token)?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    // 验证令牌
    let claims = match jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            return match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token()),
            };
        }
    };

    // 按 sub 解析账号；令牌签发后被删除的账号在这里失败
    let repo = AccountRepository::new(state.get_db());
    let account = repo.find_by_id(&claims.sub).await?;

    match account {
        Some(account) => {
            req.extensions_mut().insert(CurrentUser::from(account));
            Ok(next.run(req).await)
        }
        None => {
            security_log!("WARN", "auth_account_missing", account_id = claims.sub.clone());
            Err(AppError::unauthorized())
        }
    }
}

/// 角色白名单中间件 - 要求账号角色在允许列表中
///
/// # 参数
///
/// - `allowed`: 路由允许的角色常量表，如 `&[Role::Admin, Role::Hr]`
///
/// # 用法
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/employees", get(handler::list))
///     .layer(middleware::from_fn(require_role(&[Role::Admin, Role::Hr])));
/// ```
///
/// # 错误
///
/// 角色不在白名单返回 403 Forbidden
pub fn require_role(
    allowed: &'static [Role],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or(AppError::unauthorized())?;

            if !role_allowed(user.role, allowed) {
                security_log!(
                    "WARN",
                    "role_denied",
                    account_id = user.id.clone(),
                    account_role = user.role.to_string(),
                    required_roles = format!("{:?}", allowed)
                );
                return Err(AppError::forbidden(
                    "Not authorized to access this route.".to_string(),
                ));
            }

            Ok(next.run(req).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_allowed_is_exact_membership() {
        let staff: &[Role] = &[Role::Admin, Role::Hr];
        assert!(role_allowed(Role::Admin, staff));
        assert!(role_allowed(Role::Hr, staff));
        assert!(!role_allowed(Role::Manager, staff));
        assert!(!role_allowed(Role::Employee, staff));
    }

    #[test]
    fn test_admin_has_no_implicit_privileges() {
        // 每个路由只信任自己的白名单
        let managers_only: &[Role] = &[Role::Manager];
        assert!(!role_allowed(Role::Admin, managers_only));
    }
}
