//! HRMS Server - 人力资源管理系统后端
//!
//! # 架构概述
//!
//! 本模块是 HRMS Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **认证** (`auth`): JWT + Argon2 认证体系，路由级角色白名单
//! - **HTTP API** (`api`): RESTful API 接口 (员工/工资/考核/考勤)
//! - **生成式 AI 代理** (`services/generative`): 简历筛选、情感分析等
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色白名单
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! ├── services/      # 路由装配、生成式 AI 客户端
//! └── utils/         # 错误、校验、日志、时间工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::generative::{GenerativeClient, GenerativeError, GenerativePrompt};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ______  __  ________
   / / / / __ \/  |/  / ___/
  / /_/ / /_/ / /|_/ /\__ \
 / __  / _, _/ /  / /___/ /
/_/ /_/_/ |_/_/  /_//____/
    "#
    );
}
