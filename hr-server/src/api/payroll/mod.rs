//! Payroll API Module

mod handler;

use axum::{Router, middleware, routing::get};
use shared::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// Payroll router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由：admin / hr
    let staff_routes = Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_role(&[Role::Admin, Role::Hr])));

    // 管理路由：仅 admin 可创建/更新
    let admin_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::put(handler::update))
        .layer(middleware::from_fn(require_role(&[Role::Admin])));

    // 自助路由：任意已登录账号查看自己的工资单
    let self_routes = Router::new().route("/my-payslips", get(handler::my_payslips));

    staff_routes.merge(admin_routes).merge(self_routes)
}
