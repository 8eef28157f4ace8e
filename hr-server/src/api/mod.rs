//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册/登录/当前账号
//! - [`users`] - 账号管理接口
//! - [`employees`] - 员工档案管理接口
//! - [`payroll`] - 工资管理接口
//! - [`performance`] - 绩效考核接口
//! - [`attendance`] - 考勤接口
//! - [`ai`] - 生成式 AI 代理接口

pub mod ai;
pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod payroll;
pub mod performance;
pub mod users;
