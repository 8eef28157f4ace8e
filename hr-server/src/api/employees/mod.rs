//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};
use shared::Role;

use crate::auth::require_role;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // 人事路由：admin / hr 可读可建
    let staff_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_role(&[Role::Admin, Role::Hr])));

    // 管理路由：仅 admin 可编辑/删除
    let admin_routes = Router::new()
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_role(&[Role::Admin])));

    // 自助路由：任意已登录账号查看自己的档案
    let self_routes = Router::new().route("/my-profile", get(handler::my_profile));

    staff_routes.merge(admin_routes).merge(self_routes)
}
