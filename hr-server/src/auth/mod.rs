//! 认证模块
//!
//! - [`jwt`] - JWT 令牌服务
//! - [`middleware`] - 认证和角色白名单中间件

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{CurrentUser, require_auth, require_role, role_allowed};
