//! 服务模块
//!
//! - [`generative`] - 生成式 AI 上游客户端 (thin proxy adapter)
//! - [`http`] - 路由装配和请求日志

pub mod generative;
pub mod http;
